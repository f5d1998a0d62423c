//! Application state for the Toolbench GUI.

use toolbench_core::config::FileConfig;
use toolbench_core::organize::TreeNode;
use toolbench_core::radix::Radix;
use toolbench_core::tabular::Format;

/// The tools the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Color,
    Tabular,
    Radix,
    Query,
    Url,
    Encode,
    Organize,
    JsonFormat,
}

impl ToolKind {
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Color,
        ToolKind::Tabular,
        ToolKind::Radix,
        ToolKind::Query,
        ToolKind::Url,
        ToolKind::Encode,
        ToolKind::Organize,
        ToolKind::JsonFormat,
    ];

    /// Title shown in the sidebar and view heading.
    pub fn title(self) -> &'static str {
        match self {
            ToolKind::Color => "Color Converter",
            ToolKind::Tabular => "JSON / CSV / YAML",
            ToolKind::Radix => "Number Base Changer",
            ToolKind::Query => "Query Params to JSON",
            ToolKind::Url => "URL Encoder / Decoder",
            ToolKind::Encode => "File to Base64",
            ToolKind::Organize => "File Organizer",
            ToolKind::JsonFormat => "JSON Formatter",
        }
    }

    /// Stable identifier used for config persistence.
    pub fn id(self) -> &'static str {
        match self {
            ToolKind::Color => "color",
            ToolKind::Tabular => "tabular",
            ToolKind::Radix => "radix",
            ToolKind::Query => "query",
            ToolKind::Url => "url",
            ToolKind::Encode => "encode",
            ToolKind::Organize => "organize",
            ToolKind::JsonFormat => "jsonfmt",
        }
    }

    pub fn from_id(id: &str) -> Option<ToolKind> {
        ToolKind::ALL.iter().copied().find(|tool| tool.id() == id)
    }
}

/// Main application state: persisted config plus per-tool form buffers.
pub struct AppState {
    pub config: FileConfig,
    pub active_tool: ToolKind,
    pub color: ColorForm,
    pub tabular: TabularForm,
    pub radix: RadixForm,
    pub query: QueryForm,
    pub url: UrlForm,
    pub encode: EncodeForm,
    pub organize: OrganizeForm,
    pub jsonfmt: JsonFormatForm,
}

impl AppState {
    pub fn new() -> Self {
        let load = toolbench_core::load_config();
        for warning in &load.warnings {
            eprintln!("Warning: {warning}");
        }

        let active_tool = load
            .config
            .ui
            .last_tool
            .as_deref()
            .and_then(ToolKind::from_id)
            .unwrap_or(ToolKind::Color);

        Self {
            config: load.config,
            active_tool,
            color: ColorForm::default(),
            tabular: TabularForm::default(),
            radix: RadixForm::default(),
            query: QueryForm::default(),
            url: UrlForm::default(),
            encode: EncodeForm::default(),
            organize: OrganizeForm::default(),
            jsonfmt: JsonFormatForm::default(),
        }
    }

    /// Save configuration to disk.
    pub fn save_config(&self) -> Result<(), String> {
        toolbench_core::save_config(&self.config).map_err(|err| err.to_string())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction of a color conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorDirection {
    #[default]
    HexToRgb,
    RgbToHex,
}

#[derive(Default)]
pub struct ColorForm {
    pub input: String,
    pub direction: ColorDirection,
    pub output: String,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct TabularForm {
    pub input_path: String,
    pub output_path: String,
    pub from: Option<Format>,
    pub to: Option<Format>,
    /// Contents of the selected input file, shown read-only.
    pub preview: String,
    pub status: Option<String>,
    pub error: Option<String>,
}

pub struct RadixForm {
    pub input: String,
    pub from: Radix,
    pub to: Radix,
    pub output: String,
    pub error: Option<String>,
}

impl Default for RadixForm {
    fn default() -> Self {
        Self {
            input: String::new(),
            from: Radix::Decimal,
            to: Radix::Hexadecimal,
            output: String::new(),
            error: None,
        }
    }
}

#[derive(Default)]
pub struct QueryForm {
    pub input: String,
    pub output: String,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct UrlForm {
    pub input: String,
    pub output: String,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct EncodeForm {
    pub file_path: String,
    pub output: String,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct OrganizeForm {
    pub dir: String,
    pub tree: Option<TreeNode>,
    pub status: Option<String>,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct JsonFormatForm {
    pub input: String,
    pub output: String,
    pub error: Option<String>,
}
