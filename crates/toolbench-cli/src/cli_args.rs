use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use toolbench_core::radix::Radix;
use toolbench_core::tabular::Format;

/// Top-level CLI entrypoint.
#[derive(Parser, Debug, Clone)]
#[command(name = "toolbench", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands, one per tool.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a color between HEX and RGB representations.
    Color(ColorArgs),
    /// Convert a tabular document between JSON, CSV and YAML.
    Convert(ConvertArgs),
    /// Convert a number between binary, octal, decimal and hexadecimal.
    Radix(RadixArgs),
    /// Convert a URL query string into indented JSON.
    Query(QueryArgs),
    /// URL percent-encoding and decoding.
    #[command(subcommand)]
    Url(UrlCommand),
    /// Encode a file's contents as base64.
    Encode(EncodeArgs),
    /// Move a directory's files into subdirectories named by extension.
    Organize(OrganizeArgs),
    /// Pretty-print JSON text.
    Format(FormatArgs),
}

/// Arguments for color conversion.
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Color value, e.g. `#FF5733` or `rgb(255, 87, 51)`.
    pub value: String,

    /// Representation of the input value.
    #[arg(long = "from", value_enum)]
    pub from: ColorSpace,
}

/// Input representation for the color tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorSpace {
    Hex,
    Rgb,
}

/// Arguments for tabular document conversion.
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Input document path.
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: String,

    /// Output document path.
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: String,

    /// Input format (defaults to the input file extension).
    #[arg(long = "from", value_enum)]
    pub from: Option<FormatArg>,

    /// Output format (defaults to the output file extension).
    #[arg(long = "to", value_enum)]
    pub to: Option<FormatArg>,
}

/// Tabular format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
    #[value(alias = "yml")]
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Format::Json,
            FormatArg::Csv => Format::Csv,
            FormatArg::Yaml => Format::Yaml,
        }
    }
}

/// Arguments for numeric base conversion.
#[derive(Debug, Clone, Args)]
pub struct RadixArgs {
    /// Digit string to convert, e.g. `FF` or `0b1010`.
    pub digits: String,

    /// Base the digits are written in.
    #[arg(long = "from", value_enum)]
    pub from: RadixArg,

    /// Base to render the result in.
    #[arg(long = "to", value_enum)]
    pub to: RadixArg,
}

/// Radix selector with numeric and short aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RadixArg {
    #[value(alias = "2", alias = "bin")]
    Binary,
    #[value(alias = "8", alias = "oct")]
    Octal,
    #[value(alias = "10", alias = "dec")]
    Decimal,
    #[value(alias = "16", alias = "hex")]
    Hexadecimal,
}

impl From<RadixArg> for Radix {
    fn from(value: RadixArg) -> Self {
        match value {
            RadixArg::Binary => Radix::Binary,
            RadixArg::Octal => Radix::Octal,
            RadixArg::Decimal => Radix::Decimal,
            RadixArg::Hexadecimal => Radix::Hexadecimal,
        }
    }
}

/// Arguments for query-string conversion.
#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    /// Query string, e.g. `foo=bar&baz=qux`.
    pub query: String,
}

/// URL encoding subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum UrlCommand {
    /// Percent-encode text.
    Encode {
        /// Text to encode.
        text: String,
    },
    /// Reverse percent-encoding.
    Decode {
        /// Text to decode.
        text: String,
    },
}

/// Arguments for base64 file encoding.
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// File whose contents should be encoded.
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: String,

    /// Write the encoded text to a file instead of stdout.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<String>,
}

/// Arguments for directory organization.
#[derive(Debug, Clone, Args)]
pub struct OrganizeArgs {
    /// Directory whose direct child files should be organized.
    #[arg(value_hint = ValueHint::DirPath)]
    pub dir: String,

    /// Print planned moves without performing them.
    #[arg(long, action = ArgAction::SetTrue)]
    pub dry_run: bool,
}

/// Arguments for JSON pretty-printing.
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// JSON text to format (mutually exclusive with --input).
    pub text: Option<String>,

    /// Read the JSON text from a file.
    #[arg(short, long = "input", value_hint = ValueHint::FilePath)]
    pub input: Option<String>,
}
