//! clh - interactive changelog helper

mod args;
mod review;

use console::style;
use dialoguer::Select;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use clh_changelog::OutputTarget;

fn main() -> anyhow::Result<()> {
    let _guard = init_tracing();

    let flags = args::parse_args(std::env::args().skip(1));
    let from = args::flag_value(&flags, "--from");
    let to = args::flag_value(&flags, "--to");

    run(&from, &to)
}

/// Fetch, split, review, render, write.
fn run(from: &str, to: &str) -> anyhow::Result<()> {
    info!(from, to, "starting changelog run");

    let data = clh_git::fetch_log(from, to)?;
    let records = clh_git::split_log(&data);

    println!(
        "{} found {} commits.",
        style("clh").blue(),
        style(records.len()).blue()
    );
    review::divider();

    let accepted = review::review(&records, &mut review::TerminalUi)?;

    let block = clh_changelog::render(to, &accepted);

    println!("Constructing Changelog");
    let target = prompt_destination()?;
    clh_changelog::write_block(&block, target);

    Ok(())
}

/// Ask where the rendered block should go.
fn prompt_destination() -> anyhow::Result<OutputTarget> {
    let choices = ["Disk", "Standard Out"];
    let selection = Select::new()
        .with_prompt("Where do you want to put the output?")
        .items(&choices)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => OutputTarget::Disk,
        _ => OutputTarget::Stdout,
    })
}

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG (default: warn)
/// - File: always debug-level JSON to ~/.clh/logs/
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "clh.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(console_filter),
        )
        .init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".clh").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
