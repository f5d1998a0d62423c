//! Color converter view

use toolbench_core::color;

use super::{error_line, output_section};
use crate::state::{AppState, ColorDirection};
use crate::ui_state::{LogLevel, UiState};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, ui_state: &mut UiState) {
    let form = &mut state.color;

    ui.horizontal(|ui| {
        ui.label("Input:");
        ui.add(
            egui::TextEdit::singleline(&mut form.input)
                .hint_text("#FF5733 or 255, 87, 51")
                .desired_width(f32::INFINITY),
        );
    });

    ui.horizontal(|ui| {
        ui.selectable_value(&mut form.direction, ColorDirection::HexToRgb, "HEX to RGB");
        ui.selectable_value(&mut form.direction, ColorDirection::RgbToHex, "RGB to HEX");
    });

    if ui.button("Convert").clicked() {
        let result = match form.direction {
            ColorDirection::HexToRgb => color::hex_to_rgb(&form.input),
            ColorDirection::RgbToHex => color::rgb_to_hex(&form.input),
        };
        match result {
            Ok(output) => {
                form.error = None;
                ui_state.add_log(LogLevel::Info, format!("Converted color to {output}"));
                form.output = output;
            }
            Err(err) => {
                form.output.clear();
                ui_state.add_log(LogLevel::Error, format!("Color conversion failed: {err}"));
                form.error = Some(err.to_string());
            }
        }
    }

    error_line(ui, &form.error);
    output_section(ui, ui_state, "Result:", &form.output);
}
