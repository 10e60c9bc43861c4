//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Colored status line (update available / up to date / not published)
//! - Change type indication (major/minor/patch)
//! - Store link for updates

use crate::domain::{CheckOutcome, CheckStatus};
use crate::error::LookupError;
use crate::output::{error_hint, OutputFormatter, Verbosity};
use crate::version::NormalizedVersion;
use colored::Colorize;
use std::io::Write;

/// Size of the jump between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change
    Major,
    /// Minor version change
    Minor,
    /// Patch version change
    Patch,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        let old = NormalizedVersion::parse(old);
        let new = NormalizedVersion::parse(new);

        if new.major() != old.major() {
            VersionChangeType::Major
        } else if new.minor() != old.minor() {
            VersionChangeType::Minor
        } else {
            VersionChangeType::Patch
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn paint(&self, text: &str, status: CheckStatus) -> String {
        if !self.color {
            return text.to_string();
        }
        match status {
            CheckStatus::UpdateAvailable => text.yellow().bold().to_string(),
            CheckStatus::UpToDate => text.green().to_string(),
            CheckStatus::NotPublished => text.dimmed().to_string(),
        }
    }

    fn change_label(&self, change: VersionChangeType) -> String {
        if self.color {
            change.colored_label()
        } else {
            change.label().to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &CheckOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let status = outcome.status();

        if self.verbosity == Verbosity::Quiet {
            if let (CheckStatus::UpdateAvailable, Some(live)) = (status, &outcome.live_version) {
                writeln!(writer, "{}", live)?;
            }
            return Ok(());
        }

        match (status, outcome.live_version.as_deref()) {
            (CheckStatus::UpdateAvailable, Some(live)) => {
                let change = VersionChangeType::from_versions(&outcome.current_version, live);
                writeln!(
                    writer,
                    "{} {} → {} ({})",
                    self.paint("Update available:", status),
                    outcome.current_version,
                    live,
                    self.change_label(change)
                )?;
                if let Some(url) = &outcome.store_url {
                    writeln!(writer, "  {}", url)?;
                }
            }
            (CheckStatus::UpToDate, Some(live)) => {
                writeln!(
                    writer,
                    "{} {} (store: {})",
                    self.paint("Up to date:", status),
                    outcome.current_version,
                    live
                )?;
            }
            _ => {
                writeln!(
                    writer,
                    "{} no version of {} found on {}",
                    self.paint("Not published:", status),
                    outcome.app_id,
                    outcome.platform.store_name()
                )?;
            }
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(writer, "  platform:   {}", outcome.platform)?;
            writeln!(writer, "  app id:     {}", outcome.app_id)?;
            writeln!(
                writer,
                "  store url:  {}",
                outcome.store_url.as_deref().unwrap_or("-")
            )?;
            writeln!(writer, "  checked at: {}", outcome.checked_at.to_rfc3339())?;
        }

        Ok(())
    }

    fn format_error(&self, error: &LookupError, writer: &mut dyn Write) -> std::io::Result<()> {
        let label = if self.color {
            "Lookup failed:".red().bold().to_string()
        } else {
            "Lookup failed:".to_string()
        };
        writeln!(writer, "{} {}", label, error)?;
        if self.verbosity != Verbosity::Quiet {
            writeln!(writer, "  {}", error_hint(error))?;
        }
        Ok(())
    }
}
