//! Number base changer view

use toolbench_core::radix::{Radix, convert_number};

use super::{error_line, output_section};
use crate::state::AppState;
use crate::ui_state::{LogLevel, UiState};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, ui_state: &mut UiState) {
    let form = &mut state.radix;

    ui.horizontal(|ui| {
        ui.label("Number:");
        ui.add(
            egui::TextEdit::singleline(&mut form.input)
                .hint_text("e.g. 1010, FF, 77")
                .desired_width(f32::INFINITY),
        );
    });

    ui.horizontal(|ui| {
        radix_selector(ui, "From base", &mut form.from);
        radix_selector(ui, "To base", &mut form.to);
    });

    if ui.button("Convert").clicked() {
        match convert_number(&form.input, form.from, form.to) {
            Ok(output) => {
                form.error = None;
                ui_state.add_log(
                    LogLevel::Info,
                    format!("Converted {} ({}) to {output}", form.input.trim(), form.from),
                );
                form.output = output;
            }
            Err(err) => {
                form.output.clear();
                ui_state.add_log(LogLevel::Error, format!("Base conversion failed: {err}"));
                form.error = Some(err.to_string());
            }
        }
    }

    error_line(ui, &form.error);
    output_section(ui, ui_state, "Result:", &form.output);
}

fn radix_selector(ui: &mut egui::Ui, label: &str, selection: &mut Radix) {
    egui::ComboBox::from_label(label)
        .selected_text(selection.label())
        .show_ui(ui, |ui| {
            for radix in Radix::ALL {
                ui.selectable_value(selection, radix, radix.label());
            }
        });
}
