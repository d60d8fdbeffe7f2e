#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Project card the carousel opens on, set from the command line
static INITIAL_PROJECT: OnceLock<usize> = OnceLock::new();

/// Get the initially selected project index (set from command line or 0)
pub fn get_initial_project() -> usize {
    INITIAL_PROJECT.get().copied().unwrap_or(0)
}

/// Neonfolio - cyberpunk portfolio
#[derive(Parser, Debug)]
#[command(name = "neonfolio-desktop")]
#[command(about = "Neonfolio - cyberpunk portfolio desktop app")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Project the carousel opens on (out-of-range values are clamped)
    #[arg(short, long, default_value_t = 0)]
    project: usize,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Store the initial carousel selection globally
    let _ = INITIAL_PROJECT.set(args.project);

    tracing::info!(
        "Starting Neonfolio ({}x{}, project {})",
        args.width,
        args.height,
        args.project
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("NEONFOLIO // SHASHANK K")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
