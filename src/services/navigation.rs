use crate::domain::constants::MAPI_KEY_PARAM;

/// Text between the first `?` and any `#` of an href. `None` when the href
/// carries no query component at all.
fn query_component(href: &str) -> Option<&str> {
    let after = href.split_once('?')?.1;
    Some(after.split_once('#').map_or(after, |(q, _)| q))
}

/// Extract the credential from an href's query component.
///
/// Matches the parameter name exactly (case-sensitive) and returns the
/// literal value with no percent-decoding. A bare `?mapikey` or `?mapikey=`
/// yields `Some("")`: present but empty, distinct from absent.
pub fn read_credential(href: &str) -> Option<String> {
    let query = query_component(href)?;
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some((name, value)) if name == MAPI_KEY_PARAM => return Some(value.to_string()),
            None if pair == MAPI_KEY_PARAM => return Some(String::new()),
            _ => {}
        }
    }
    None
}

/// Raw concatenation, no escaping. A value containing `&` or `=` produces a
/// broken query string; preserved as-is from the observed behavior.
pub fn build_query_string(name: &str, value: &str) -> String {
    format!("?{}={}", name, value)
}

/// Scheme plus authority of an href, with no trailing path, query or
/// fragment. Hrefs without a scheme fall back to the text before the first
/// delimiter.
pub fn origin_of(href: &str) -> String {
    let (scheme, rest) = match href.split_once("://") {
        Some((s, r)) => (Some(s), r),
        None => (None, href),
    };
    let end = rest
        .find(['/', '?', '#'])
        .unwrap_or(rest.len());
    match scheme {
        Some(s) => format!("{}://{}", s, &rest[..end]),
        None => rest[..end].to_string(),
    }
}

/// Rewrite the href to `origin + query_string` unless it already carries the
/// `?mapikey=` marker. `None` means no-op; idempotent once applied.
pub fn apply_query_string_if_absent(href: &str, query_string: &str) -> Option<String> {
    let marker = format!("?{}=", MAPI_KEY_PARAM);
    if href.contains(&marker) {
        return None;
    }
    Some(format!("{}{}", origin_of(href), query_string))
}
