//! Global identifier to render-safe local id.

/// Map an IRI to its local name, keeping only `[A-Za-z0-9_-]`.
///
/// The local name is whatever follows the last `#`, else the last `/`,
/// else the whole input. Every other character becomes `_`. Empty input
/// yields an empty id. Already-normalized ids map to themselves.
pub fn normalize(uri: &str) -> String {
    let local = match uri.rfind('#') {
        Some(pos) => &uri[pos + 1..],
        None => match uri.rfind('/') {
            Some(pos) => &uri[pos + 1..],
            None => uri,
        },
    };

    local
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
