/// Criteria filtering for result pages: exact text match and numeric range,
/// combined with AND semantics.
pub enum Criterion<T> {
    /// Keep records whose field equals `value` exactly. A record with the
    /// field absent is excluded.
    Equals {
        get: fn(&T) -> Option<String>,
        value: String,
    },
    /// Keep records whose field falls within `[min, max]`. A record with the
    /// field absent is kept, matching the storefront's filter behavior.
    Range {
        get: fn(&T) -> Option<f64>,
        min: f64,
        max: f64,
    },
}

impl<T> Criterion<T> {
    fn matches(&self, record: &T) -> bool {
        match self {
            Criterion::Equals { get, value } => {
                // An empty expected value means the filter is unset.
                if value.is_empty() {
                    return true;
                }
                match get(record) {
                    Some(actual) => actual == *value,
                    None => false,
                }
            }
            Criterion::Range { get, min, max } => match get(record) {
                Some(actual) => actual >= *min && actual <= *max,
                None => true,
            },
        }
    }
}

/// Keep the records matching every criterion, input order preserved.
pub fn filter_items<'a, T>(items: &'a [T], criteria: &[Criterion<T>]) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| criteria.iter().all(|criterion| criterion.matches(item)))
        .collect()
}
