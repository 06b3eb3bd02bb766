/// Case-insensitive exact name comparison used for items and enemies.
pub fn names_match(name: &str, query: &str) -> bool {
    name.to_lowercase() == query.to_lowercase()
}

/// Index of the first entry whose name matches `query`.
pub fn position_by_name<T>(
    entries: &[T],
    query: &str,
    name_of: impl Fn(&T) -> &str,
) -> Option<usize> {
    entries.iter().position(|e| names_match(name_of(e), query))
}
