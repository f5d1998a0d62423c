//! UI-specific state (ephemeral)

use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 200;

/// UI-specific state that doesn't need to be persisted
pub struct UiState {
    /// Current theme (dark/light)
    pub theme: Theme,

    /// Activity log visibility
    pub activity_log_expanded: bool,

    /// Activity log entries, oldest first
    pub activity_log: VecDeque<LogEntry>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            theme: Theme::Dark,
            activity_log_expanded: false,
            activity_log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    /// Add a log entry, keeping at most [`MAX_LOG_ENTRIES`] around.
    pub fn add_log(&mut self, level: LogLevel, message: impl Into<String>) {
        if self.activity_log.len() >= MAX_LOG_ENTRIES {
            self.activity_log.pop_front();
        }
        self.activity_log.push_back(LogEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            level,
            message: message.into(),
        });
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Theme selection
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Activity log entry
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Log level for coloring
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}
