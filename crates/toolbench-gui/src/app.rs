//! Main application structure for the Toolbench GUI

use std::time::{Duration, Instant};

use toolbench_core::ThemePreference;

use crate::state::{AppState, ToolKind};
use crate::ui_state::{LogLevel, Theme, UiState};
use crate::views;

/// Main application struct implementing eframe::App
pub struct ToolbenchApp {
    /// Domain state
    state: AppState,

    /// UI state
    ui_state: UiState,

    /// Last config save time
    last_save: Instant,

    /// Config dirty flag
    config_dirty: bool,
}

impl ToolbenchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();
        let mut ui_state = UiState::new();
        ui_state.theme = match state.config.ui.theme {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
        };
        ui_state.activity_log_expanded = state.config.ui.activity_log_expanded;

        let mut app = Self {
            state,
            ui_state,
            last_save: Instant::now(),
            config_dirty: false,
        };
        app.ui_state.add_log(LogLevel::Info, "Application started");
        app
    }

    /// Apply theme to egui context
    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.ui_state.theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }

    fn mark_dirty(&mut self) {
        self.config_dirty = true;
    }

    /// Auto-save configuration if dirty and enough time has passed
    fn handle_auto_save(&mut self) {
        if self.config_dirty && self.last_save.elapsed() > Duration::from_millis(300) {
            if let Err(err) = self.state.save_config() {
                self.ui_state
                    .add_log(LogLevel::Error, format!("Failed to save config: {err}"));
            } else {
                self.config_dirty = false;
                self.last_save = Instant::now();
            }
        }
    }

    fn toggle_theme(&mut self) {
        let (theme, preference) = match self.ui_state.theme {
            Theme::Dark => (Theme::Light, ThemePreference::Light),
            Theme::Light => (Theme::Dark, ThemePreference::Dark),
        };
        self.ui_state.theme = theme;
        self.state.config.ui.theme = preference;
        self.mark_dirty();
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Toolbench");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.ui_state.theme {
                        Theme::Dark => "☀ Light",
                        Theme::Light => "🌙 Dark",
                    };
                    if ui.button(theme_label).clicked() {
                        self.toggle_theme();
                    }

                    if self.config_dirty {
                        if ui.button("💾 Save").clicked() {
                            if let Err(err) = self.state.save_config() {
                                self.ui_state.add_log(
                                    LogLevel::Error,
                                    format!("Failed to save: {err}"),
                                );
                            } else {
                                self.ui_state
                                    .add_log(LogLevel::Info, "Configuration saved");
                                self.config_dirty = false;
                            }
                        }
                    }
                });
            });
        });
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("tool_sidebar")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Tools");
                ui.separator();
                for tool in ToolKind::ALL {
                    let selected = self.state.active_tool == tool;
                    if ui.selectable_label(selected, tool.title()).clicked() && !selected {
                        self.state.active_tool = tool;
                        self.state.config.ui.last_tool = Some(tool.id().to_string());
                        self.mark_dirty();
                    }
                }
            });
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading(self.state.active_tool.title());
                    ui.separator();
                    ui.add_space(4.0);

                    match self.state.active_tool {
                        ToolKind::Color => {
                            views::color::render(ui, &mut self.state, &mut self.ui_state)
                        }
                        ToolKind::Tabular => {
                            views::tabular::render(ui, &mut self.state, &mut self.ui_state)
                        }
                        ToolKind::Radix => {
                            views::radix::render(ui, &mut self.state, &mut self.ui_state)
                        }
                        ToolKind::Query => {
                            views::query::render(ui, &mut self.state, &mut self.ui_state)
                        }
                        ToolKind::Url => {
                            views::url::render(ui, &mut self.state, &mut self.ui_state)
                        }
                        ToolKind::Encode => {
                            views::encode::render(ui, &mut self.state, &mut self.ui_state)
                        }
                        ToolKind::Organize => {
                            views::organize::render(ui, &mut self.state, &mut self.ui_state)
                        }
                        ToolKind::JsonFormat => {
                            views::jsonfmt::render(ui, &mut self.state, &mut self.ui_state)
                        }
                    }

                    ui.add_space(16.0);
                    self.render_activity_log(ui);
                });
        });
    }

    fn render_activity_log(&mut self, ui: &mut egui::Ui) {
        let response = egui::CollapsingHeader::new("Activity Log")
            .default_open(self.ui_state.activity_log_expanded)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Entries: {}", self.ui_state.activity_log.len()));
                    if ui.button("Clear").clicked() {
                        self.ui_state.activity_log.clear();
                    }
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &self.ui_state.activity_log {
                            ui.horizontal(|ui| {
                                ui.label(&entry.timestamp);
                                let (color, prefix) = match entry.level {
                                    LogLevel::Info => (egui::Color32::GRAY, "INFO"),
                                    LogLevel::Error => (egui::Color32::RED, "ERROR"),
                                };
                                ui.colored_label(color, prefix);
                                ui.label(&entry.message);
                            });
                        }
                    });
            });
        if response.header_response.clicked() {
            self.ui_state.activity_log_expanded = !self.ui_state.activity_log_expanded;
            self.state.config.ui.activity_log_expanded = self.ui_state.activity_log_expanded;
            self.mark_dirty();
        }
    }
}

impl eframe::App for ToolbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        self.render_top_panel(ctx);
        self.render_sidebar(ctx);
        self.render_central(ctx);

        self.handle_auto_save();
    }
}
