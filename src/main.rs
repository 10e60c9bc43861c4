//! storecheck - mobile app update checker CLI
//!
//! Compares an installed app version with the one published on:
//! - Apple App Store (iOS)
//! - Google Play (Android)

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use storecheck::checker::{open_store, UpdateChecker};
use storecheck::cli::CliArgs;
use storecheck::logging;
use storecheck::metadata::{locate_manifest, resolve_app, AppManifest};
use storecheck::opener::SystemOpener;
use storecheck::output::{create_formatter, OutputConfig, OutputFormat};
use storecheck::progress::Progress;
use storecheck::store::HttpClient;

/// Exit status when `--exit-code` is set and an update exists
const UPDATE_AVAILABLE_EXIT: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbose, args.quiet);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let manifest = locate_manifest(args.manifest.as_deref(), &cwd)
        .map(|path| AppManifest::load(&path))
        .transpose()?;

    let app = resolve_app(
        manifest.as_ref(),
        args.platform,
        args.app_id.as_deref(),
        args.current.as_deref(),
    )?;

    if args.verbose {
        eprintln!("storecheck v{}", env!("CARGO_PKG_VERSION"));
    }

    let client = HttpClient::with_timeout(args.timeout)?;
    let checker = UpdateChecker::with_client(client, args.endpoints());

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let format = output_config.format;
    let formatter = create_formatter(output_config);

    let mut progress = Progress::new(args.interactive());
    progress.spinner(&format!("Querying {}...", app.platform.store_name()));
    let result = checker.check_installed(&app.metadata, app.platform).await;
    progress.finish_and_clear();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            // JSON consumers read stdout; humans get errors on stderr
            if format == OutputFormat::Json {
                let mut stdout = io::stdout().lock();
                formatter.format_error(&e, &mut stdout)?;
                stdout.flush()?;
            } else {
                let mut stderr = io::stderr().lock();
                formatter.format_error(&e, &mut stderr)?;
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut stdout = io::stdout().lock();
    formatter.format(&outcome, &mut stdout)?;
    stdout.flush()?;
    drop(stdout);

    if args.open && outcome.needs_update {
        if let Err(e) = open_store(&outcome, &SystemOpener::new()) {
            eprintln!("Could not open store page: {}", e);
            if let Some(url) = &outcome.store_url {
                eprintln!("Open this URL manually:");
                eprintln!("  {}", url);
            }
        }
    }

    if args.exit_code && outcome.needs_update {
        return Ok(ExitCode::from(UPDATE_AVAILABLE_EXIT));
    }

    Ok(ExitCode::SUCCESS)
}
