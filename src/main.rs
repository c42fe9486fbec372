//! Restwise - bedtime recommendation app
//!
//! Main entry point for the Restwise application.

use anyhow::Result;
use restwise::model;
use restwise::ui::RestwiseApp;
use restwise::PredictorHandle;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restwise=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Restwise");

    // A broken model artifact means the app cannot do anything useful;
    // exit with an error instead of presenting a dead screen.
    let sleep_model = match model::load_default() {
        Ok(m) => m,
        Err(e) => {
            error!("Failed to load sleep model: {}", e);
            return Err(e.into());
        }
    };

    let predictor = PredictorHandle::spawn(Box::new(sleep_model));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 680.0])
            .with_min_inner_size([380.0, 560.0])
            .with_title("Restwise"),
        ..Default::default()
    };

    eframe::run_native(
        "Restwise",
        options,
        Box::new(|cc| Ok(Box::new(RestwiseApp::new(cc, predictor)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run UI: {e}"))
}
