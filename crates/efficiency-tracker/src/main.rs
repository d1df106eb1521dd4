mod bootstrap;

use anyhow::Result;
use tracker_core::settings::Settings;
use tracker_runtime::orchestrator::SessionOrchestrator;
use tracker_runtime::simulator::TICK_INTERVAL;
use tracker_ui::app::{App, Tab};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Efficiency Tracker v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Theme: {}, Timezone: {}",
        settings.view,
        settings.theme,
        settings.timezone
    );

    // Spin up the simulated session loop; the UI only ever sees snapshots.
    let orchestrator = SessionOrchestrator::new(TICK_INTERVAL);
    let (rx, controller) = orchestrator.start();

    let app = App::new(
        &settings.theme,
        Tab::from_name(&settings.view),
        settings.timezone.clone(),
    );

    // Run the TUI event loop. The loop exits on 'q' / Ctrl+C inside the TUI.
    // We also listen for Ctrl+C at the OS level so that signals received
    // while the terminal is in raw mode are handled cleanly.
    tokio::select! {
        result = app.run(rx, &controller) => {
            controller.abort();
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down session loop");
            controller.abort();
        }
    }

    Ok(())
}
