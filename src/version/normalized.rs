//! Normalized three-component version tuple

use std::fmt;

/// Number of numeric components kept after normalization
pub const COMPONENT_COUNT: usize = 3;

/// A version reduced to exactly three non-negative integers (major, minor, patch)
///
/// Normalization is lenient: every dot-separated part has its non-digit
/// characters stripped, an empty remainder counts as 0, missing parts are
/// padded with 0 and anything past the third part is dropped. Parsing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NormalizedVersion([u64; COMPONENT_COUNT]);

impl NormalizedVersion {
    /// Create a normalized version from explicit components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self([major, minor, patch])
    }

    /// Normalize a raw version string
    pub fn parse(raw: &str) -> Self {
        let mut components = [0u64; COMPONENT_COUNT];

        for (slot, part) in components.iter_mut().zip(raw.split('.')) {
            *slot = parse_component(part);
        }

        Self(components)
    }

    /// Major component
    pub fn major(&self) -> u64 {
        self.0[0]
    }

    /// Minor component
    pub fn minor(&self) -> u64 {
        self.0[1]
    }

    /// Patch component
    pub fn patch(&self) -> u64 {
        self.0[2]
    }

    /// All components in order
    pub fn components(&self) -> [u64; COMPONENT_COUNT] {
        self.0
    }
}

/// Keep only the ASCII digits of a part and read them as an integer
fn parse_component(part: &str) -> u64 {
    let digits: String = part.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return 0;
    }

    // Only digits remain, so the sole failure mode is overflow
    digits.parse().unwrap_or(u64::MAX)
}

impl From<&str> for NormalizedVersion {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for NormalizedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0[0], self.0[1], self.0[2])
    }
}
