//! Version extraction from Google Play listing pages
//!
//! The listing page is plain markup whose shape changes over time, so the
//! version is pulled out by an ordered list of matchers. The first matcher
//! that finds something wins, even if a later one would also match.

use regex::Regex;
use std::sync::LazyLock;

/// `<div>Current Version</div><span>1.2.3</span>` (older listing layout)
///
/// The span must hold something starting with a digit, so text such as
/// "Varies with device" falls through to the next matcher.
static CURRENT_VERSION_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"<div[^>]*>\s*Current Version\s*</div>\s*<span[^>]*>(?:\s*<[^>/][^>]*>)*\s*(\d[^<]*?)\s*<",
    )
    .unwrap()
});

/// `[[["1.2.3"]]]` (data embedded as nested JS arrays)
static NESTED_ARRAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[\[\["(\d[0-9A-Za-z._-]*)"\]\]"#).unwrap());

/// `"versionName":"1.2.3"`
static VERSION_NAME_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""versionName"\s*:\s*"([^"]+)""#).unwrap());

/// `Version` (also as a suffix, e.g. `softwareVersion`) followed somewhere
/// later by a dotted number
static LOOSE_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Version\b.*?(\d+(?:\.\d+)+)").unwrap());

/// A named extraction step
#[derive(Clone, Copy)]
pub struct VersionMatcher {
    /// Short name used in logs and tests
    pub name: &'static str,
    pattern: &'static LazyLock<Regex>,
}

impl VersionMatcher {
    /// Try to pull a version out of a page body
    pub fn extract(&self, body: &str) -> Option<String> {
        let captured = self.pattern.captures(body)?.get(1)?.as_str().trim();
        if captured.is_empty() {
            None
        } else {
            Some(captured.to_string())
        }
    }
}

impl std::fmt::Debug for VersionMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionMatcher")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Matchers in priority order: explicit label, layout-encoded data, loose text
pub static PLAY_STORE_MATCHERS: [VersionMatcher; 4] = [
    VersionMatcher {
        name: "current-version-label",
        pattern: &CURRENT_VERSION_LABEL_RE,
    },
    VersionMatcher {
        name: "nested-array",
        pattern: &NESTED_ARRAY_RE,
    },
    VersionMatcher {
        name: "version-name-key",
        pattern: &VERSION_NAME_KEY_RE,
    },
    VersionMatcher {
        name: "loose-version",
        pattern: &LOOSE_VERSION_RE,
    },
];

/// Run `matchers` in order and return the first hit with the matcher's name
pub fn first_match<'m>(
    matchers: &'m [VersionMatcher],
    body: &str,
) -> Option<(&'m VersionMatcher, String)> {
    matchers
        .iter()
        .find_map(|matcher| matcher.extract(body).map(|version| (matcher, version)))
}

/// Extract the published version from a Play listing page
pub fn extract_version(body: &str) -> Option<String> {
    first_match(&PLAY_STORE_MATCHERS, body).map(|(_, version)| version)
}
