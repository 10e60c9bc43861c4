//! Installed app metadata
//!
//! The checker needs two facts about the installed app: its version and its
//! identifier in the store. They come either straight from the command line
//! or from a small TOML manifest:
//!
//! ```toml
//! [app]
//! version = "1.4.0"
//! bundle_id = "com.example.app"
//! package_name = "com.example.app"
//! platform = "ios"
//! ```

use crate::domain::Platform;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest file name
pub const MANIFEST_FILENAME: &str = "storecheck.toml";

/// Source of the installed version and store identifier
pub trait MetadataProvider {
    /// Version of the installed app
    fn installed_version(&self) -> String;

    /// Identifier of the app in the store for `platform`
    fn app_identifier(&self, platform: Platform) -> String;
}

/// Metadata known up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMetadata {
    version: String,
    app_id: String,
}

impl StaticMetadata {
    /// Create metadata from an installed version and app identifier
    pub fn new(version: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            app_id: app_id.into(),
        }
    }
}

impl MetadataProvider for StaticMetadata {
    fn installed_version(&self) -> String {
        self.version.clone()
    }

    fn app_identifier(&self, _platform: Platform) -> String {
        self.app_id.clone()
    }
}

/// Parsed `storecheck.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppManifest {
    #[serde(default)]
    pub app: AppSection,
}

/// `[app]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppSection {
    /// Installed version
    pub version: Option<String>,
    /// iOS bundle id
    pub bundle_id: Option<String>,
    /// Android package name
    pub package_name: Option<String>,
    /// Platform to check when none is given on the command line
    pub platform: Option<Platform>,
}

impl AppManifest {
    /// Load a manifest from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::read_manifest(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse manifest content; `path` is only used for error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::parse_manifest(path, e.to_string()))
    }

    /// Identifier configured for `platform`
    pub fn identifier_for(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Ios => self.app.bundle_id.as_deref(),
            Platform::Android => self.app.package_name.as_deref(),
        }
    }
}

/// Pick the manifest to load
///
/// An explicit path always wins. Otherwise `storecheck.toml` in `dir` is used
/// when it exists, and no manifest at all is fine.
pub fn locate_manifest(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        let candidate = dir.join(MANIFEST_FILENAME);
        candidate.is_file().then_some(candidate)
    })
}

/// Fully resolved inputs for one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApp {
    pub platform: Platform,
    pub metadata: StaticMetadata,
}

/// Merge command-line values over manifest values
///
/// Command-line values win. Anything still missing is a configuration error.
pub fn resolve_app(
    manifest: Option<&AppManifest>,
    platform: Option<Platform>,
    app_id: Option<&str>,
    current: Option<&str>,
) -> Result<ResolvedApp, ConfigError> {
    let platform = platform
        .or_else(|| manifest.and_then(|m| m.app.platform))
        .ok_or(ConfigError::MissingPlatform)?;

    let app_id = app_id
        .map(str::to_string)
        .or_else(|| manifest.and_then(|m| m.identifier_for(platform).map(str::to_string)))
        .ok_or_else(|| ConfigError::MissingAppId {
            platform: platform.display_name().to_string(),
            label: platform.identifier_label(),
        })?;

    let version = current
        .map(str::to_string)
        .or_else(|| manifest.and_then(|m| m.app.version.clone()))
        .ok_or(ConfigError::MissingVersion)?;

    Ok(ResolvedApp {
        platform,
        metadata: StaticMetadata::new(version, app_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MANIFEST: &str = r#"
[app]
version = "1.4.0"
bundle_id = "com.example.ios"
package_name = "com.example.android"
platform = "android"
"#;

    fn manifest() -> AppManifest {
        AppManifest::parse(FULL_MANIFEST, Path::new("storecheck.toml")).unwrap()
    }

    #[test]
    fn test_static_metadata() {
        let metadata = StaticMetadata::new("2.0.0", "com.example");
        assert_eq!(metadata.installed_version(), "2.0.0");
        assert_eq!(metadata.app_identifier(Platform::Ios), "com.example");
        assert_eq!(metadata.app_identifier(Platform::Android), "com.example");
    }

    #[test]
    fn test_parse_manifest() {
        let manifest = manifest();
        assert_eq!(manifest.app.version.as_deref(), Some("1.4.0"));
        assert_eq!(manifest.app.platform, Some(Platform::Android));
        assert_eq!(manifest.identifier_for(Platform::Ios), Some("com.example.ios"));
        assert_eq!(
            manifest.identifier_for(Platform::Android),
            Some("com.example.android")
        );
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = AppManifest::parse("", Path::new("storecheck.toml")).unwrap();
        assert_eq!(manifest, AppManifest::default());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let err = AppManifest::parse("[app\nversion=", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseManifest { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_invalid_platform() {
        let err = AppManifest::parse("[app]\nplatform = \"windows\"", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseManifest { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppManifest::load(&PathBuf::from("/nonexistent/storecheck.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadManifest { .. }));
    }

    #[test]
    fn test_resolve_from_manifest() {
        let manifest = manifest();
        let resolved = resolve_app(Some(&manifest), None, None, None).unwrap();
        assert_eq!(resolved.platform, Platform::Android);
        assert_eq!(resolved.metadata.installed_version(), "1.4.0");
        assert_eq!(
            resolved.metadata.app_identifier(resolved.platform),
            "com.example.android"
        );
    }

    #[test]
    fn test_resolve_cli_overrides_manifest() {
        let manifest = manifest();
        let resolved =
            resolve_app(Some(&manifest), Some(Platform::Ios), None, Some("1.5.0")).unwrap();
        assert_eq!(resolved.platform, Platform::Ios);
        assert_eq!(resolved.metadata.installed_version(), "1.5.0");
        assert_eq!(
            resolved.metadata.app_identifier(Platform::Ios),
            "com.example.ios"
        );
    }

    #[test]
    fn test_resolve_without_manifest() {
        let resolved =
            resolve_app(None, Some(Platform::Ios), Some("com.cli"), Some("3.0")).unwrap();
        assert_eq!(resolved.metadata, StaticMetadata::new("3.0", "com.cli"));
    }

    #[test]
    fn test_resolve_missing_platform() {
        let err = resolve_app(None, None, Some("com.cli"), Some("1.0")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPlatform));
    }

    #[test]
    fn test_resolve_missing_app_id() {
        let err = resolve_app(None, Some(Platform::Android), None, Some("1.0")).unwrap_err();
        assert!(err.to_string().contains("package name"));
    }

    #[test]
    fn test_resolve_missing_version() {
        let err = resolve_app(None, Some(Platform::Ios), Some("com.cli"), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion));
    }

    #[test]
    fn test_locate_manifest_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        fs::write(&path, FULL_MANIFEST).unwrap();

        assert_eq!(locate_manifest(None, dir.path()), Some(path));
    }

    #[test]
    fn test_locate_manifest_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(locate_manifest(None, dir.path()), None);
    }

    #[test]
    fn test_locate_manifest_explicit_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), FULL_MANIFEST).unwrap();
        let explicit = PathBuf::from("/elsewhere/app.toml");

        assert_eq!(
            locate_manifest(Some(&explicit), dir.path()),
            Some(explicit.clone())
        );
    }

    #[test]
    fn test_locate_manifest_ignores_directory_named_like_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(locate_manifest(None, dir.path()), None);
    }
}
