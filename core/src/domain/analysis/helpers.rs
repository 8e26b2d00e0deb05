/// Splits a raw ingredient list on commas, trims whitespace, lowercases, and
/// drops empty tokens. Order is preserved and duplicates are kept, so each
/// occurrence produces its own finding downstream.
pub fn tokenize_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
