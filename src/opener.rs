//! Opening the store page

use crate::error::OpenError;
use tracing::debug;

/// Something that can hand a URL to the user (browser, store app, ...)
pub trait UrlOpener {
    /// Open `url`, reporting whether it worked
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opens URLs with the operating system's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// Create a new system opener
    pub fn new() -> Self {
        Self
    }
}

/// Only web links are handed to the system launcher
fn check_scheme(url: &str) -> Result<(), OpenError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(OpenError::UnsupportedUrl {
            url: url.to_string(),
        })
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        check_scheme(url)?;
        debug!(%url, "opening store page");

        open::that(url).map_err(|e| OpenError::Launch {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_scheme_accepts_web_links() {
        assert!(check_scheme("https://apps.apple.com/app/id1").is_ok());
        assert!(check_scheme("http://localhost:8080/x").is_ok());
    }

    #[test]
    fn test_system_opener_rejects_other_schemes() {
        let opener = SystemOpener::new();
        let err = opener.open("file:///etc/passwd").unwrap_err();
        assert!(matches!(err, OpenError::UnsupportedUrl { .. }));

        let err = opener.open("market://details?id=com.example").unwrap_err();
        assert!(err.to_string().contains("market://"));
    }
}
