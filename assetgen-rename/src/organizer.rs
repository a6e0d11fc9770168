//! Synthesis of canonical `root-path-stem` names.

/// Prefix every organized stem under `path_parts` in root `base_name` starts with.
///
/// Empty when both the base name and the path are empty.
pub fn prefix<S: AsRef<str>>(path_parts: &[S], base_name: &str, sep: char) -> String {
    let sep = sep.to_string();
    std::iter::once(base_name)
        .chain(path_parts.iter().map(|part| part.as_ref()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep.as_str())
}

/// Whether `stem` already carries the prefix for its location.
pub fn is_already_organized<S: AsRef<str>>(
    stem: &str,
    path_parts: &[S],
    base_name: &str,
    sep: char,
) -> bool {
    let prefix = prefix(path_parts, base_name, sep);
    if prefix.is_empty() {
        return false;
    }
    let expected = format!("{}{}", prefix, sep).to_lowercase();
    let stem = stem.to_lowercase();
    stem.len() > expected.len() && stem.starts_with(&expected)
}

/// Build `base_name-part-...-stem` for a file.
///
/// Stems that already start with that prefix are returned unchanged, so
/// organizing an organized name is a no-op.
pub fn organize<S: AsRef<str>>(stem: &str, path_parts: &[S], base_name: &str, sep: char) -> String {
    if is_already_organized(stem, path_parts, base_name, sep) {
        return stem.to_string();
    }
    let prefix = prefix(path_parts, base_name, sep);
    if prefix.is_empty() {
        stem.to_string()
    } else {
        format!("{}{}{}", prefix, sep, stem)
    }
}
