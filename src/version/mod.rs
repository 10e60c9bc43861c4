//! Version comparison for installed vs. published app versions
//!
//! Versions are compared as three numeric components, never as raw strings,
//! so "1.10.0" ranks above "1.9.0".

mod normalized;

pub use normalized::{NormalizedVersion, COMPONENT_COUNT};

use std::cmp::Ordering;

/// Returns true when `latest` is strictly newer than `current`
///
/// Equal versions never report an update. Malformed input degrades to zeros
/// instead of failing, so this is total over all strings.
pub fn is_update_available(latest: &str, current: &str) -> bool {
    let latest = NormalizedVersion::parse(latest).components();
    let current = NormalizedVersion::parse(current).components();

    for (l, c) in latest.iter().zip(current.iter()) {
        if l != c {
            return l > c;
        }
    }

    false
}

/// Order two version strings by their normalized components
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    NormalizedVersion::parse(a).cmp(&NormalizedVersion::parse(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_not_lexicographic() {
        assert!(is_update_available("1.10.0", "1.9.0"));
        assert!(!is_update_available("1.9.0", "1.10.0"));
    }

    #[test]
    fn test_equal_versions_never_update() {
        assert!(!is_update_available("1.2.3", "1.2.3"));
        assert!(!is_update_available("2.0", "2.0.0"));
        assert!(!is_update_available("", "0.0.0"));
    }

    #[test]
    fn test_shorter_strings_pad() {
        assert!(is_update_available("2.0", "1.9.9"));
        assert!(!is_update_available("1.9.9", "2"));
    }

    #[test]
    fn test_suffix_stripped() {
        assert!(is_update_available("1.2.3-beta", "1.2.2"));
        assert!(!is_update_available("1.2.3-beta", "1.2.3"));
    }

    #[test]
    fn test_first_differing_component_decides() {
        assert!(is_update_available("2.0.0", "1.99.99"));
        assert!(!is_update_available("1.99.99", "2.0.0"));
        assert!(is_update_available("1.3.0", "1.2.9"));
        assert!(is_update_available("1.2.4", "1.2.3"));
        assert!(!is_update_available("1.2.3", "1.2.4"));
    }

    #[test]
    fn test_malformed_components_are_lenient() {
        assert!(is_update_available("1.1.0", "1.x.0"));
        assert!(!is_update_available("1.x.0", "1.0.0"));
    }

    #[test]
    fn test_components_beyond_patch_ignored() {
        assert!(!is_update_available("1.2.3.9", "1.2.3.1"));
    }

    #[test]
    fn test_deterministic() {
        let pairs = [
            ("1.0.0", "0.9.9"),
            ("3.4", "3.4.1"),
            ("10.0.1", "9.12.0"),
            ("abc", "1"),
        ];
        for (a, b) in pairs {
            assert_eq!(is_update_available(a, b), is_update_available(a, b));
        }
    }

    #[test]
    fn test_compare_versions() {
        assert_eq!(compare_versions("1.10.0", "1.9.0"), Ordering::Greater);
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("0.9", "1"), Ordering::Less);
    }

    #[test]
    fn test_compare_versions_agrees_with_update_check() {
        let pairs = [("1.2.3", "1.2.2"), ("1.2.3", "1.2.3"), ("0.1", "0.2")];
        for (a, b) in pairs {
            assert_eq!(
                is_update_available(a, b),
                compare_versions(a, b) == Ordering::Greater
            );
        }
    }
}
