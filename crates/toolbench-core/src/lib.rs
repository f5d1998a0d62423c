//! Core library crate exposing shared Toolbench transformation logic.

pub mod color;
pub mod config;
pub mod encode;
pub mod error;
pub mod jsonfmt;
pub mod logging;
pub mod organize;
pub mod query;
pub mod radix;
pub mod tabular;
pub mod urlenc;

pub use color::{hex_to_rgb, rgb_to_hex};
pub use config::{
    ConfigError, ConfigLoadResult, ConfigSource, FileConfig, ThemePreference, UiPreferences,
    config_directory, config_path, load_config, save_config,
};
pub use encode::{bytes_to_base64, file_to_base64};
pub use error::ToolError;
pub use jsonfmt::format_json;
pub use logging::{LoggingDestination, LoggingError, current_log_path, init_logging};
pub use organize::{
    NO_EXTENSION_BUCKET, OrganizeReport, PlannedMove, TreeNode, bucket_for, organize_directory,
    plan_moves, preview_tree,
};
pub use query::query_params_to_json;
pub use radix::{Radix, convert_number};
pub use tabular::{Format, convert_file, convert_str};
pub use urlenc::{url_decode, url_encode};
