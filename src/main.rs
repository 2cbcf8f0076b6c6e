//! # Primer Main Entry Point
//!
//! Parses the command line, sets up logging, opens the window sized for the
//! chosen walkthrough and runs it.

use clap::Parser;
use macroquad::prelude::*;
use primer::{run_demo, AppContext, DemoKind, DemoOptions, PrimerResult};
use std::path::PathBuf;
use tracing::{error, info, Level};

/// Command line arguments for the walkthroughs.
#[derive(Parser, Debug)]
#[command(name = "primer")]
#[command(about = "Minimal walkthroughs for windowing, GPU, audio, input and storage")]
#[command(version)]
struct Args {
    /// Walkthrough to run
    #[arg(value_enum)]
    demo: DemoKind,

    /// Asset root holding images/ and audio/ (defaults to the executable's
    /// directory, then the working directory for files missing there)
    #[arg(long)]
    base_path: Option<PathBuf>,

    /// Image file under <base>/images/ for the uv-texture walkthrough
    #[arg(long)]
    image: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Window settings for the selected walkthrough.
///
/// Runs before the window exists, so argument errors are left for `main`
/// to report.
fn window_conf() -> Conf {
    let demo = Args::try_parse().map(|args| args.demo).unwrap_or(DemoKind::Window);
    let (window_width, window_height) = demo.window_size();

    Conf {
        window_title: demo.title().to_string(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> PrimerResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Primer v{}", primer::VERSION);

    let ctx = match &args.base_path {
        Some(path) => AppContext::new(path),
        None => AppContext::from_executable(),
    };
    let options = DemoOptions {
        image: args.image.clone(),
    };

    if let Err(e) = run_demo(args.demo, &ctx, &options).await {
        error!("{:?} failed: {}", args.demo, e);
        return Err(e);
    }

    info!("{:?} ended", args.demo);
    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
