//! Shared string utilities for code generation.

/// Split a name into lowercase words.
///
/// Words are separated by any non-alphanumeric character and by
/// lowercase-to-uppercase transitions (`homeIcon` -> `home`, `icon`).
pub fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello-world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
        .collect()
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    words(s).join("-")
}

/// Convert a string to CONSTANT_CASE (e.g., "brand logos" -> "BRAND_LOGOS")
pub fn to_constant_case(s: &str) -> String {
    words(s).join("_").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        assert_eq!(words("icons"), vec!["icons"]);
        assert_eq!(words("brand-logos_v2"), vec!["brand", "logos", "v2"]);
        assert_eq!(words("homeIcon"), vec!["home", "icon"]);
        assert_eq!(words("--"), Vec::<String>::new());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo-bar baz"), "FooBarBaz");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("brand-logos"), "brandLogos");
        assert_eq!(to_camel_case("Icons"), "icons");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
        assert_eq!(to_kebab_case("hello_world"), "hello-world");
    }

    #[test]
    fn test_to_constant_case() {
        assert_eq!(to_constant_case("brand logos"), "BRAND_LOGOS");
        assert_eq!(to_constant_case("icons"), "ICONS");
    }
}
