/// A searchable field: a display name plus an accessor that stringifies the
/// field value. Accessors replace dot-path reflection; a `None` (absent)
/// value never matches.
pub struct SearchField<T> {
    pub name: &'static str,
    pub get: fn(&T) -> Option<String>,
}

impl<T> SearchField<T> {
    pub fn new(name: &'static str, get: fn(&T) -> Option<String>) -> Self {
        Self { name, get }
    }
}

/// Case-insensitive substring containment over any of `fields`.
///
/// An empty or whitespace-only query passes every record through unchanged.
/// Input order is preserved. Matching is exact substring containment, not
/// edit distance.
pub fn substring_search<'a, T>(
    records: &'a [T],
    query: &str,
    fields: &[SearchField<T>],
) -> Vec<&'a T> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return records.iter().collect();
    }

    let needle = trimmed.to_lowercase();
    records
        .iter()
        .filter(|record| {
            fields.iter().any(|field| match (field.get)(record) {
                Some(value) => value.to_lowercase().contains(&needle),
                None => false,
            })
        })
        .collect()
}
