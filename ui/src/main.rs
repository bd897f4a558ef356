#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::anyhow;
use log::{info, warn};
use portal_business::BusinessConfig;
use portal_ui::PortalApp;
use portal_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    if let Err(err) = dotenvy::dotenv() {
        warn!("No .env loaded: {err}");
    }

    let config = BusinessConfig::from_env()?;
    let state = State::new(config)?;

    // Commands are spawned on this runtime; the UI thread only enters it.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    info!("Starting user management desk");
    eframe::run_native(
        "User Management",
        native_options,
        Box::new(move |_cc| Ok(Box::new(PortalApp::new(state)))),
    )
    .map_err(|err| anyhow!("eframe exited with an error: {err}"))
}
