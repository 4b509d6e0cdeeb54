//! baton - live progress line demo
//!
//! Simulates a unit-by-unit workload behind the live line so the bar, the
//! bounce animation, and the console interception can be exercised from a
//! shell.

use anyhow::Result;
use baton_core::{ProgressLogger, ProgressOptions, console};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Drive a simulated workload behind a live progress line.
#[derive(Parser)]
#[command(name = "baton", version, about = "Live terminal progress line demo")]
struct Cli {
    /// Units of simulated work
    #[arg(long, default_value_t = 20)]
    total: u64,

    /// Milliseconds of simulated work per unit
    #[arg(long, default_value_t = 100)]
    step_ms: u64,

    /// Tick period of the render scheduler, in milliseconds
    #[arg(long, default_value_t = 50)]
    throttle_ms: u64,

    /// Label shown with the bar or animation
    #[arg(long, default_value = "working")]
    message: String,

    /// Width of the bar/animation in characters
    #[arg(long, default_value_t = 10)]
    bar_length: usize,

    /// Run the bounce animation instead of a bar (no known total)
    #[arg(long)]
    indeterminate: bool,

    /// Hide the progress bar segment
    #[arg(long)]
    no_bar: bool,

    /// Hide the ETA segment
    #[arg(long)]
    no_eta: bool,

    /// Put the message in front of the bar
    #[arg(long)]
    message_first: bool,

    /// Append average time per unit to the stop summary
    #[arg(long)]
    show_avg: bool,

    /// Print a console line above the live line every N units (0 = never)
    #[arg(long, default_value_t = 0)]
    log_every: u64,

    /// Message written by stop (empty for none)
    #[arg(long, default_value = "done")]
    end_message: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    tracing::debug!(total = cli.total, indeterminate = cli.indeterminate, "starting workload");

    let options = ProgressOptions {
        message: cli.message.clone(),
        total: (!cli.indeterminate).then_some(cli.total as f64),
        show_progress_bar: !cli.no_bar,
        show_eta: !cli.no_eta,
        bar_length: cli.bar_length,
        update_throttle: Duration::from_millis(cli.throttle_ms),
        show_avg_time_per_item: cli.show_avg,
        display_message_first: cli.message_first,
        ..ProgressOptions::default()
    };

    let mut logger = ProgressLogger::start(options)?;
    for unit in 1..=cli.total {
        std::thread::sleep(Duration::from_millis(cli.step_ms));
        logger.increment();
        if cli.log_every > 0 && unit % cli.log_every == 0 {
            console::log(&format!("processed {unit} units"));
        }
    }

    let end_message = (!cli.end_message.is_empty()).then_some(cli.end_message.as_str());
    logger.stop(end_message);
    Ok(())
}
