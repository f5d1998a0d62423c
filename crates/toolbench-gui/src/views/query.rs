//! Query params to JSON view

use toolbench_core::query::query_params_to_json;

use super::{error_line, output_section};
use crate::state::AppState;
use crate::ui_state::{LogLevel, UiState};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, ui_state: &mut UiState) {
    let form = &mut state.query;

    ui.horizontal(|ui| {
        ui.label("Query string:");
        ui.add(
            egui::TextEdit::singleline(&mut form.input)
                .hint_text("foo=bar&baz=qux")
                .desired_width(f32::INFINITY),
        );
    });

    if ui.button("Convert").clicked() {
        match query_params_to_json(&form.input) {
            Ok(json) => {
                form.error = None;
                ui_state.add_log(LogLevel::Info, "Converted query string to JSON");
                form.output = json;
            }
            Err(err) => {
                form.output.clear();
                ui_state.add_log(LogLevel::Error, format!("Query conversion failed: {err}"));
                form.error = Some(err.to_string());
            }
        }
    }

    error_line(ui, &form.error);
    output_section(ui, ui_state, "JSON:", &form.output);
}
