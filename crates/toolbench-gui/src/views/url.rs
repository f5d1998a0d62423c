//! URL encoder / decoder view

use toolbench_core::urlenc::{url_decode, url_encode};

use super::{error_line, output_section};
use crate::state::AppState;
use crate::ui_state::{LogLevel, UiState};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, ui_state: &mut UiState) {
    let form = &mut state.url;

    ui.horizontal(|ui| {
        ui.label("Text:");
        ui.add(
            egui::TextEdit::singleline(&mut form.input)
                .hint_text("Text or URL fragment")
                .desired_width(f32::INFINITY),
        );
    });

    ui.horizontal(|ui| {
        if ui.button("Encode").clicked() {
            form.error = None;
            form.output = url_encode(&form.input);
            ui_state.add_log(LogLevel::Info, "URL-encoded input");
        }
        if ui.button("Decode").clicked() {
            match url_decode(&form.input) {
                Ok(decoded) => {
                    form.error = None;
                    ui_state.add_log(LogLevel::Info, "URL-decoded input");
                    form.output = decoded;
                }
                Err(err) => {
                    form.output.clear();
                    ui_state.add_log(LogLevel::Error, format!("URL decoding failed: {err}"));
                    form.error = Some(err.to_string());
                }
            }
        }
    });

    error_line(ui, &form.error);
    output_section(ui, ui_state, "Result:", &form.output);
}
