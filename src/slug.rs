/// Convert a display name into a directory-safe kebab-case slug.
///
/// Lowercases the whole string, splits on whitespace (runs collapse, leading
/// and trailing whitespace is dropped) and joins the tokens with single
/// hyphens. Punctuation inside a token is kept as-is and non-ASCII characters
/// are not transliterated.
pub fn to_kebab_case(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
