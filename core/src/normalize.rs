use unidecode::unidecode;

/// Collapses a display name into its lookup key: ASCII-folded,
/// lowercased, whitespace-normalized.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
