//! File to base64 view

use std::path::Path;

use toolbench_core::encode::file_to_base64;

use super::{error_line, output_section};
use crate::state::AppState;
use crate::ui_state::{LogLevel, UiState};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, ui_state: &mut UiState) {
    let form = &mut state.encode;

    ui.horizontal(|ui| {
        ui.label("File:");
        ui.add(
            egui::TextEdit::singleline(&mut form.file_path).desired_width(f32::INFINITY),
        );
        if ui.button("Browse…").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_file() {
                form.file_path = path.display().to_string();
            }
        }
    });

    if ui.button("Encode").clicked() {
        match file_to_base64(Path::new(&form.file_path)) {
            Ok(encoded) => {
                form.error = None;
                ui_state.add_log(
                    LogLevel::Info,
                    format!("Encoded {} ({} base64 chars)", form.file_path, encoded.len()),
                );
                form.output = encoded;
            }
            Err(err) => {
                form.output.clear();
                ui_state.add_log(LogLevel::Error, format!("Encoding failed: {err}"));
                form.error = Some(err.to_string());
            }
        }
    }

    error_line(ui, &form.error);
    output_section(ui, ui_state, "Base64:", &form.output);
}
