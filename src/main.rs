use anyhow::Context;
use clap::Parser;
use profile_view::cli::Cli;
use profile_view::logging::{default_log_path, init_tracing};
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli.resolve_config()?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("profile-view-io")
        .build()
        .context("Failed to start async runtime")?;

    tracing::info!(endpoint = %config.fetch.endpoint, "Starting profile view");
    let result = profile_view::ui::runtime::run(config, runtime.handle().clone());
    if let Err(err) = &result {
        tracing::error!(error = %err, "Profile view exited with error");
    }

    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}
