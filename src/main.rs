//! cloudsync - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use cloudsync::{
    api::StorageClient,
    catalog::Catalog,
    cli::Args,
    config::{validate_config, validate_remote_paths, Config},
    error::{exit_codes, Error, Result},
    notify::{spawn_presenter, ConsoleNotifier},
    output::{print_banner, print_info, print_warning},
    sync::{InFlightRegistry, SyncOutcome, SyncRequest, SyncTask},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(RunResult::Synced) => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(RunResult::Failed) => ExitCode::from(exit_codes::SYNC_ERROR as u8),
        Ok(RunResult::Cancelled) => ExitCode::from(exit_codes::CANCELLED as u8),
        Err(e) => {
            cloudsync::output::print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::InvalidRemotePath(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Authentication(_) => ExitCode::from(exit_codes::AUTH_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

enum RunResult {
    Synced,
    Failed,
    Cancelled,
}

async fn run() -> Result<RunResult> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config {
            server: Default::default(),
            options: Default::default(),
        }
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration and requested paths
    validate_config(&config)?;
    validate_remote_paths(&args.paths)?;

    let sync_dir = config.sync_directory();
    print_info(&format!(
        "Syncing {} file(s) into {}",
        args.paths.len(),
        sync_dir.display()
    ));

    // Initialize the storage client
    let client = StorageClient::new(
        Url::parse(&config.server.base_url)?,
        config.server.auth_token.clone(),
        config.server.user_agent.clone(),
    )?;

    // Resolve records from the catalog index, or map paths under the sync
    // directory when no index is configured
    let catalog = match &config.options.catalog_index {
        Some(index) => Catalog::load(index)?,
        None => Catalog::from_remote_paths(&sync_dir, args.paths.iter().map(String::as_str)),
    };

    // Cancel the run promptly on Ctrl-C
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            print_warning("Cancellation requested, stopping after the current file");
            signal_token.cancel();
        }
    });

    // Notifications run on their own presenter task, off the transfer path
    let (notifier, presenter) = spawn_presenter(ConsoleNotifier::new(
        config.options.show_progress,
        config.options.show_skipped,
    ));

    let task = SyncTask::new(
        Arc::new(client),
        Arc::new(catalog),
        notifier,
        InFlightRegistry::new(),
        cancel.clone(),
        config.sync_options(),
    );

    let outcome = task.run(SyncRequest::new(args.paths.clone())).await;

    // Flush remaining notifications before exiting
    drop(task);
    let _ = presenter.await;

    Ok(match outcome {
        SyncOutcome::Success => RunResult::Synced,
        SyncOutcome::Failure if cancel.is_cancelled() => RunResult::Cancelled,
        SyncOutcome::Failure => RunResult::Failed,
    })
}
