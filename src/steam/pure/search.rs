/// Reduce a name to lower-case ASCII letters and digits for fuzzy search
pub fn normalize_search_name(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
