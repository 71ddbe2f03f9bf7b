//! URL cleaning: strip tracking parameters from a URL's query.
//!
//! The public entry points are [`clean`], [`clean_batch`] and
//! [`clean_with_report`]. None of them fail: input that does not parse as an
//! absolute URL is returned unchanged.
//!
//! The URL is only parsed to validate it and the output is spliced from the
//! input string: everything before the first `?`, the surviving query
//! segments joined by `&`, then the original `#fragment`. Host case, ports,
//! dot-segments and the fragment are never rewritten, and each surviving
//! `key=value` segment keeps its original bytes (including `%20` vs `+` and
//! percent-encoded invalid UTF-8). Keys are decoded as
//! `application/x-www-form-urlencoded` before matching. When nothing is
//! removed the input string is returned as-is.

use log::{debug, warn};
use url::{Url, form_urlencoded};

use crate::policy::is_tracking_param;

/// Result of cleaning a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// The cleaned URL (or the original input on pass-through).
    pub url: String,
    /// Decoded keys that were removed, in query order.
    pub removed: Vec<String>,
}

impl CleanReport {
    fn untouched(input: &str) -> Self {
        CleanReport {
            url: input.to_owned(),
            removed: Vec::new(),
        }
    }
}

/// Clean `url` by removing tracking parameters from its query.
///
/// Scheme, authority, path and fragment are left alone, and the surviving
/// query pairs keep their relative order. If every pair is removed the `?`
/// is dropped as well.
///
/// ```
/// use urlclean_lib::cleaner::clean;
///
/// assert_eq!(
///     clean("https://example.com/product?id=123&utm_source=facebook&ref=share"),
///     "https://example.com/product?id=123"
/// );
/// assert_eq!(clean("not a url"), "not a url");
/// ```
pub fn clean(url: &str) -> String {
    clean_with_report(url).url
}

/// Clean every URL in `urls`, preserving order.
pub fn clean_batch<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    urls.iter().map(|u| clean(u.as_ref())).collect()
}

/// Like [`clean`], but also reports which keys were removed.
pub fn clean_with_report(input: &str) -> CleanReport {
    if let Err(e) = Url::parse(input) {
        warn!("error cleaning URL {input:?}: {e}");
        return CleanReport::untouched(input);
    }

    let (head, fragment) = input.split_at(input.find('#').unwrap_or(input.len()));
    let Some((base, query)) = head.split_once('?') else {
        return CleanReport::untouched(input);
    };

    // A bare `?` carries nothing worth keeping.
    if query.is_empty() {
        return CleanReport {
            url: format!("{base}{fragment}"),
            removed: Vec::new(),
        };
    }

    let mut removed = Vec::new();
    let mut kept = Vec::new();
    for segment in query.split('&').filter(|s| !s.is_empty()) {
        let key = decoded_key(segment);
        if is_tracking_param(&key) {
            removed.push(key);
        } else {
            kept.push(segment);
        }
    }

    if removed.is_empty() {
        return CleanReport::untouched(input);
    }

    for key in &removed {
        debug!("removed tracking parameter {key:?}");
    }

    let url = if kept.is_empty() {
        format!("{base}{fragment}")
    } else {
        format!("{base}?{}{fragment}", kept.join("&"))
    };
    CleanReport { url, removed }
}

/// Decode the key of one raw `key=value` query segment.
fn decoded_key(segment: &str) -> String {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}
