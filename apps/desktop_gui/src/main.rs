mod config;
mod controller;
mod ui;

use anyhow::anyhow;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{config::load_settings, ui::ValentineApp};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings()?;
    let copy = settings.copy();
    tracing::info!(recipient = %settings.recipient, seeded = settings.seed.is_some(), "starting card");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(copy.window_title.clone())
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([320.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        &copy.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(ValentineApp::new(&settings)))),
    )
    .map_err(|err| anyhow!("card window failed: {err}"))
}
