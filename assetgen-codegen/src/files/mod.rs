//! TypeScript file generators.

mod assets_ts;
mod component_tsx;
mod hooks_ts;
mod index_ts;
mod types_ts;
mod utils_ts;

pub use assets_ts::AssetsTs;
pub use component_tsx::ComponentTsx;
pub use hooks_ts::HooksTs;
pub use index_ts::IndexTs;
pub use types_ts::TypesTs;
pub use utils_ts::UtilsTs;

/// Banner at the top of every generated file.
pub const GENERATED_HEADER: &str =
    "// This file is generated by assetgen. Do not edit it by hand; run `assetgen generate` instead.";

/// Quote `s` as a JavaScript string literal.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// `"a" | "b"` for the given values, `never` when there are none.
pub(crate) fn string_union<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let union = values.into_iter().map(js_string).collect::<Vec<_>>().join(" | ");
    if union.is_empty() {
        "never".to_string()
    } else {
        union
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("icons-home"), "\"icons-home\"");
        assert_eq!(js_string("it's \"quoted\""), "\"it's \\\"quoted\\\"\"");
        assert_eq!(js_string("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_string_union() {
        assert_eq!(string_union(["a", "b"]), "\"a\" | \"b\"");
        assert_eq!(string_union(Vec::<&str>::new()), "never");
    }
}
