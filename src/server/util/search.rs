/// Substring match that ignores case for any Unicode letter.
///
/// SQLite only folds ASCII in `LIKE` and `lower()`, so name filters are applied with
/// this after the query.
pub fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
