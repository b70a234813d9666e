//! Query-string helpers shared by the job and blog filters.

use url::form_urlencoded;

/// Decode a query string (with or without the leading `?`) into pairs.
pub(crate) fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Encode pairs in the given order, skipping absent values.
pub(crate) fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<String>)>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key, &value);
        }
    }
    serializer.finish()
}

/// Trim a free-text criterion; blank input means "no criterion".
pub(crate) fn normalize(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// A stored text criterion, trimmed; blank counts as absent.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Whether two text criteria select the same thing.
pub(crate) fn same_text(a: Option<&str>, b: Option<&str>) -> bool {
    present(a) == present(b)
}

/// Case-insensitive substring test; `needle` must already be lowercase.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
