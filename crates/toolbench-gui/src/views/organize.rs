//! File organizer view

use std::path::Path;

use toolbench_core::organize::{TreeNode, organize_directory, preview_tree};

use super::error_line;
use crate::state::AppState;
use crate::ui_state::{LogLevel, UiState};

const PREVIEW_DEPTH: usize = 4;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, ui_state: &mut UiState) {
    let form = &mut state.organize;

    ui.horizontal(|ui| {
        ui.label("Folder:");
        ui.add(egui::TextEdit::singleline(&mut form.dir).desired_width(f32::INFINITY));
        if ui.button("Browse…").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                form.dir = path.display().to_string();
                refresh_tree(form, ui_state);
            }
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Refresh preview").clicked() {
            refresh_tree(form, ui_state);
        }
        if ui.button("Organize files").clicked() {
            match organize_directory(Path::new(&form.dir)) {
                Ok(report) => {
                    form.error = None;
                    form.status = Some(format!("Moved {} file(s).", report.moved.len()));
                    ui_state.add_log(
                        LogLevel::Info,
                        format!("Organized {}: {} file(s) moved", form.dir, report.moved.len()),
                    );
                }
                Err(err) => {
                    form.status = None;
                    ui_state.add_log(LogLevel::Error, format!("Organize failed: {err}"));
                    form.error = Some(err.to_string());
                }
            }
            refresh_tree(form, ui_state);
        }
    });

    if let Some(status) = &form.status {
        ui.label(status);
    }
    error_line(ui, &form.error);

    if let Some(tree) = &form.tree {
        ui.add_space(8.0);
        ui.label("Files and Folders:");
        egui::ScrollArea::vertical()
            .max_height(400.0)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                render_tree(ui, tree);
            });
    }
}

fn refresh_tree(form: &mut crate::state::OrganizeForm, ui_state: &mut UiState) {
    if form.dir.is_empty() {
        return;
    }
    match preview_tree(Path::new(&form.dir), PREVIEW_DEPTH) {
        Ok(tree) => form.tree = Some(tree),
        Err(err) => {
            form.tree = None;
            ui_state.add_log(LogLevel::Error, format!("Failed to read folder: {err}"));
            form.error = Some(err.to_string());
        }
    }
}

fn render_tree(ui: &mut egui::Ui, node: &TreeNode) {
    for child in &node.children {
        if child.is_dir {
            ui.label(format!("📁 {}", child.name));
            ui.indent(child.name.as_str(), |ui| {
                render_tree(ui, child);
            });
        } else {
            ui.label(&child.name);
        }
    }
}
