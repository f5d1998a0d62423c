//! JSON formatter view

use std::fs;

use toolbench_core::jsonfmt::format_json;

use super::{error_line, output_section};
use crate::state::AppState;
use crate::ui_state::{LogLevel, UiState};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, ui_state: &mut UiState) {
    let form = &mut state.jsonfmt;

    ui.label("JSON input:");
    ui.add(
        egui::TextEdit::multiline(&mut form.input)
            .desired_rows(8)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Monospace),
    );

    ui.horizontal(|ui| {
        if ui.button("Load…").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_file() {
                match fs::read_to_string(&path) {
                    Ok(contents) => {
                        form.input = contents;
                        ui_state
                            .add_log(LogLevel::Info, format!("Loaded {}", path.display()));
                    }
                    Err(err) => {
                        ui_state.add_log(
                            LogLevel::Error,
                            format!("Failed to load {}: {err}", path.display()),
                        );
                    }
                }
            }
        }
        if ui.button("Format").clicked() {
            match format_json(&form.input) {
                Ok(formatted) => {
                    form.error = None;
                    ui_state.add_log(LogLevel::Info, "Formatted JSON");
                    form.output = formatted;
                }
                Err(err) => {
                    form.output.clear();
                    ui_state.add_log(LogLevel::Error, format!("Formatting failed: {err}"));
                    form.error = Some(err.to_string());
                }
            }
        }
    });

    error_line(ui, &form.error);
    output_section(ui, ui_state, "Formatted:", &form.output);
}
