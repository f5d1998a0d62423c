//! Per-tool views for the central panel.
//!
//! Every view follows the same convention: `render(ui, state, ui_state)`,
//! reading and writing its own form buffer on [`crate::state::AppState`].

pub mod color;
pub mod encode;
pub mod jsonfmt;
pub mod organize;
pub mod query;
pub mod radix;
pub mod tabular;
pub mod url;

use crate::ui_state::{LogLevel, UiState};

/// Render a read-only result area with Copy and Save actions.
pub(crate) fn output_section(ui: &mut egui::Ui, ui_state: &mut UiState, label: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    ui.add_space(8.0);
    ui.label(label);
    let mut shown = text;
    ui.add(
        egui::TextEdit::multiline(&mut shown)
            .desired_rows(6)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Monospace),
    );
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            ui.ctx().copy_text(text.to_owned());
            ui_state.add_log(LogLevel::Info, "Result copied to clipboard");
        }
        if ui.button("Save…").clicked() {
            if let Some(path) = rfd::FileDialog::new().save_file() {
                match std::fs::write(&path, text) {
                    Ok(()) => ui_state.add_log(
                        LogLevel::Info,
                        format!("Result saved to {}", path.display()),
                    ),
                    Err(err) => ui_state
                        .add_log(LogLevel::Error, format!("Failed to save result: {err}")),
                }
            }
        }
    });
}

/// Render an inline error line when present.
pub(crate) fn error_line(ui: &mut egui::Ui, error: &Option<String>) {
    if let Some(message) = error {
        ui.colored_label(egui::Color32::RED, message);
    }
}
