//! Toolbench GUI module using eframe/egui

pub mod app;
pub mod state;
pub mod ui_state;
pub mod views;

use toolbench_core::LoggingDestination;

/// Main entry point for the GUI
pub fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Err(err) = toolbench_core::init_logging(LoggingDestination::FileOnly) {
        eprintln!("Warning: failed to initialize logging: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([860.0, 600.0])
            .with_resizable(true)
            .with_title("Toolbench"),
        ..Default::default()
    };

    eframe::run_native(
        "Toolbench",
        native_options,
        Box::new(|cc| Ok(Box::new(app::ToolbenchApp::new(cc)))),
    )
    .map_err(|err| {
        Box::new(std::io::Error::other(format!("{err:?}")))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(())
}
