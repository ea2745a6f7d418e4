// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Textswap - Main Entry Point
//!
//! A small desktop utility for case-insensitive search and replace over typed
//! text. Built with Rust and egui.

mod app;
mod clipboard;
mod config;
mod editor;
mod error;
mod session;
mod theme;
mod ui;

use app::TextswapApp;
use config::{get_config_file_path, load_config, Settings};
use log::{info, warn};

/// Application name constant.
const APP_NAME: &str = "Textswap";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    match get_config_file_path() {
        Ok(path) => info!("Configuration file: {}", path.display()),
        Err(e) => warn!("No configuration location available: {}", e),
    }

    // Load settings to get window configuration
    let settings = load_config();
    let window_size = settings.window_size;

    info!(
        "Window configuration: {}x{}, theme: {:?}",
        window_size.width, window_size.height, settings.theme
    );

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([Settings::MIN_WINDOW_WIDTH, Settings::MIN_WINDOW_HEIGHT]);

    // Apply position if saved
    let viewport = if let (Some(x), Some(y)) = (window_size.x, window_size.y) {
        viewport.with_position([x, y])
    } else {
        viewport
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(TextswapApp::new(cc, settings)))),
    )
}
