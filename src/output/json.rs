//! JSON output formatter for machine processing

use crate::domain::{CheckOutcome, CheckStatus};
use crate::error::LookupError;
use crate::output::{error_hint, OutputFormatter, Verbosity};
use crate::version::NormalizedVersion;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of a successful check
#[derive(Serialize)]
struct JsonOutcome<'a> {
    status: CheckStatus,
    #[serde(flatten)]
    outcome: &'a CheckOutcome,
    /// Normalized versions (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<JsonNormalized>,
}

#[derive(Serialize)]
struct JsonNormalized {
    current: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    live: Option<String>,
}

/// JSON representation of a failed lookup
#[derive(Serialize)]
struct JsonError {
    error: String,
    connectivity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    http_status: Option<u16>,
    hint: &'static str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &CheckOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let normalized = (self.verbosity == Verbosity::Verbose).then(|| JsonNormalized {
            current: NormalizedVersion::parse(&outcome.current_version).to_string(),
            live: outcome
                .live_version
                .as_deref()
                .map(|v| NormalizedVersion::parse(v).to_string()),
        });

        let output = JsonOutcome {
            status: outcome.status(),
            outcome,
            normalized,
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }

    fn format_error(&self, error: &LookupError, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonError {
            error: error.to_string(),
            connectivity: error.is_connectivity(),
            http_status: error.status(),
            hint: error_hint(error),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
