//! JSON / CSV / YAML converter view

use std::fs;
use std::path::Path;

use toolbench_core::tabular::{Format, convert_file};

use super::error_line;
use crate::state::AppState;
use crate::ui_state::{LogLevel, UiState};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, ui_state: &mut UiState) {
    let form = &mut state.tabular;

    ui.horizontal(|ui| {
        ui.label("Input file:");
        ui.add(
            egui::TextEdit::singleline(&mut form.input_path).desired_width(f32::INFINITY),
        );
        if ui.button("Browse…").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_file() {
                form.input_path = path.display().to_string();
                form.preview = match fs::read_to_string(&path) {
                    Ok(contents) => contents,
                    Err(err) => format!("Error loading file:\n{err}"),
                };
            }
        }
    });

    if !form.preview.is_empty() {
        let mut shown = form.preview.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut shown)
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        );
    }

    ui.horizontal(|ui| {
        ui.label("Output file:");
        ui.add(
            egui::TextEdit::singleline(&mut form.output_path).desired_width(f32::INFINITY),
        );
        if ui.button("Browse…").clicked() {
            if let Some(path) = rfd::FileDialog::new().save_file() {
                form.output_path = path.display().to_string();
            }
        }
    });

    ui.horizontal(|ui| {
        format_selector(ui, "From", &mut form.from);
        format_selector(ui, "To", &mut form.to);
    });

    if ui.button("Convert").clicked() {
        let result = convert_file(
            Path::new(&form.input_path),
            Path::new(&form.output_path),
            form.from,
            form.to,
        );
        match result {
            Ok(()) => {
                form.error = None;
                form.status = Some("Conversion complete!".to_string());
                ui_state.add_log(
                    LogLevel::Info,
                    format!("Converted {} to {}", form.input_path, form.output_path),
                );
            }
            Err(err) => {
                form.status = None;
                ui_state.add_log(LogLevel::Error, format!("Conversion failed: {err}"));
                form.error = Some(err.to_string());
            }
        }
    }

    if let Some(status) = &form.status {
        ui.label(status);
    }
    error_line(ui, &form.error);
}

fn format_selector(ui: &mut egui::Ui, label: &str, selection: &mut Option<Format>) {
    egui::ComboBox::from_label(label)
        .selected_text(selection.map_or("Auto", Format::label))
        .show_ui(ui, |ui| {
            ui.selectable_value(selection, None, "Auto");
            for format in [Format::Json, Format::Csv, Format::Yaml] {
                ui.selectable_value(selection, Some(format), format.label());
            }
        });
}
