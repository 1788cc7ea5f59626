#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::prelude::*;

mod app;
mod ui;

#[derive(Debug, Parser)]
#[command(name = "project-timeline")]
#[command(author, version, about = "Timeline of project deadlines, maintenance and reports", long_about = None)]
struct Args {
    /// Workspace snapshot (JSON) to display; watched for changes
    #[arg(long, value_name = "FILE", env = "PROJECT_TIMELINE_FEED")]
    feed: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("project_timeline={level}")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::info!(feed = ?args.feed, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("Project Timeline"),
        ..Default::default()
    };

    eframe::run_native(
        "Project Timeline",
        options,
        Box::new(move |cc| Ok(Box::new(app::TimelineApp::new(cc, args.feed)))),
    )
}
