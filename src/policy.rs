//! Tracking-parameter policy: the fixed key set and the name patterns.
//!
//! Both tables are compiled in and initialized once per process. A key is
//! treated as tracking when its lowercased form is in [`TRACKING_PARAMS`] or
//! when any of [`TRACKING_PATTERNS`] matches it (case-insensitively).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Known tracking keys, lowercase.
pub static TRACKING_PARAMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Google Analytics & Ads
        "utm_source",
        "utm_medium",
        "utm_campaign",
        "utm_term",
        "utm_content",
        "gclid",
        "gclsrc",
        // Facebook
        "fbclid",
        // Microsoft/Bing
        "msclkid",
        // HubSpot, Mailchimp, Zanox
        "_hsenc",
        "_hsmi",
        "mc_cid",
        "mc_eid",
        "zanpid",
        // Amazon
        "ref",
        "tag",
        // General
        "source",
        "affiliate",
        "campaign",
        "track",
    ]
    .into_iter()
    .collect()
});

const PATTERN_SOURCES: [&str; 5] = [
    r"(?i)^_.*id$",
    r"(?i)^ref_?.*$",
    r"(?i)^track(ing)?_?.*$",
    r"(?i)^affiliate_?.*$",
    r"(?i)^camp(aign)?_?.*$",
];

/// Patterns that suggest a tracking key, in evaluation order.
///
/// These are deliberately loose: `reference_number` or `camping` match too.
pub static TRACKING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|src| Regex::new(src).expect("tracking pattern is a valid regex"))
        .collect()
});

/// Exact, case-insensitive membership in the fixed tracking set.
pub fn is_known_tracking_param(key: &str) -> bool {
    TRACKING_PARAMS.contains(key.to_lowercase().as_str())
}

/// Check whether `key` matches any of the tracking name patterns.
pub fn looks_like_tracking_param(key: &str) -> bool {
    TRACKING_PATTERNS.iter().any(|re| re.is_match(key))
}

/// Returns true when the query key `key` should be stripped.
pub fn is_tracking_param(key: &str) -> bool {
    is_known_tracking_param(key) || looks_like_tracking_param(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_params_any_case() {
        for key in TRACKING_PARAMS.iter() {
            assert!(is_known_tracking_param(key), "{key}");
            assert!(is_known_tracking_param(&key.to_uppercase()), "{key}");
        }
        assert!(is_known_tracking_param("Utm_Source"));
        assert!(!is_known_tracking_param("utm_sourcex"));
    }

    #[test]
    fn test_patterns() {
        for key in [
            "_clickid",
            "_fooid",
            "ref_src",
            "REF_abc",
            "tracking_id",
            "trackXYZ",
            "affiliate_99",
            "campaign_2024",
            "camp",
        ] {
            assert!(looks_like_tracking_param(key), "{key}");
        }
        for key in ["id", "page", "q", "_id_x", "preference", "sort"] {
            assert!(!looks_like_tracking_param(key), "{key}");
        }
    }

    #[test]
    fn test_loose_ref_prefix_is_kept() {
        assert!(is_tracking_param("reference_number"));
    }

    #[test]
    fn test_set_has_twenty_entries() {
        assert_eq!(TRACKING_PARAMS.len(), 20);
        assert_eq!(TRACKING_PATTERNS.len(), 5);
    }
}
