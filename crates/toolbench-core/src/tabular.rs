//! JSON ⇄ CSV ⇄ YAML interconversion.
//!
//! Six directed conversions, each a compose of "parse the source into a
//! document value" and "serialize that value into the target format". The
//! tabular rule throughout is schema-by-first-record: the CSV column set is
//! fixed by the first record's keys in their original order. Records missing
//! a key produce an empty cell; keys unique to later records are silently
//! dropped. This is deliberately not a union schema — changing it would
//! change output files.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ToolError;
use crate::jsonfmt::to_pretty_json;

/// The file formats the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
    Yaml,
}

impl Format {
    /// Infer a format from a path's extension (`json`, `csv`, `yaml`/`yml`).
    pub fn from_extension(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "csv" => Some(Format::Csv),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Csv => "CSV",
            Format::Yaml => "YAML",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Convert document text from one format to another.
pub fn convert_str(input: &str, from: Format, to: Format) -> Result<String, ToolError> {
    match (from, to) {
        (Format::Json, Format::Csv) => json_to_csv(input),
        (Format::Csv, Format::Json) => csv_to_json(input),
        (Format::Yaml, Format::Json) => yaml_to_json(input),
        (Format::Json, Format::Yaml) => json_to_yaml(input),
        (Format::Csv, Format::Yaml) => csv_to_yaml(input),
        (Format::Yaml, Format::Csv) => yaml_to_csv(input),
        (same_from, same_to) => Err(ToolError::InvalidFormat(format!(
            "no conversion from {same_from} to {same_to}"
        ))),
    }
}

/// Read `input`, convert, and write the result to `output`.
///
/// Formats default to what the file extensions imply.
pub fn convert_file(
    input: &Path,
    output: &Path,
    from: Option<Format>,
    to: Option<Format>,
) -> Result<(), ToolError> {
    let from = from.or_else(|| Format::from_extension(input)).ok_or_else(|| {
        ToolError::InvalidFormat(format!(
            "cannot infer input format from '{}'",
            input.display()
        ))
    })?;
    let to = to.or_else(|| Format::from_extension(output)).ok_or_else(|| {
        ToolError::InvalidFormat(format!(
            "cannot infer output format from '{}'",
            output.display()
        ))
    })?;

    debug!(input = %input.display(), output = %output.display(), %from, %to, "converting file");
    let text = fs::read_to_string(input)?;
    let converted = convert_str(&text, from, to)?;
    fs::write(output, converted)?;
    Ok(())
}

/// JSON sequence of mappings → CSV.
pub fn json_to_csv(input: &str) -> Result<String, ToolError> {
    let value = parse_json(input)?;
    let records = json_records(&value)?;
    records_to_csv(&records)
}

/// CSV → JSON sequence of mappings (all cell values are strings).
pub fn csv_to_json(input: &str) -> Result<String, ToolError> {
    let records = csv_records(input)?;
    to_pretty_json(&Value::Array(records))
}

/// YAML → JSON, structure-preserving.
pub fn yaml_to_json(input: &str) -> Result<String, ToolError> {
    let value = parse_yaml(input)?;
    to_pretty_json(&value)
}

/// JSON → YAML, structure-preserving. Output is block style.
pub fn json_to_yaml(input: &str) -> Result<String, ToolError> {
    let value = parse_json(input)?;
    emit_yaml(&value)
}

/// CSV → YAML sequence of mappings.
pub fn csv_to_yaml(input: &str) -> Result<String, ToolError> {
    let records = csv_records(input)?;
    emit_yaml(&Value::Array(records))
}

/// YAML → CSV.
///
/// A sequence of mappings converts like JSON does; a single mapping
/// degenerates to a two-row table (header of keys, one row of values). Any
/// other root shape is unsupported.
pub fn yaml_to_csv(input: &str) -> Result<String, ToolError> {
    let value = parse_yaml(input)?;
    match &value {
        Value::Array(items) if !items.is_empty() => {
            let mut records = Vec::with_capacity(items.len());
            for item in items {
                let Value::Object(record) = item else {
                    return Err(ToolError::UnsupportedShape(
                        "YAML sequence items must all be mappings".to_string(),
                    ));
                };
                records.push(record);
            }
            records_to_csv(&records)
        }
        Value::Object(mapping) => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer
                .write_record(mapping.keys())
                .map_err(csv_error)?;
            writer
                .write_record(mapping.values().map(scalar_to_cell))
                .map_err(csv_error)?;
            finish_csv(writer)
        }
        _ => Err(ToolError::UnsupportedShape(
            "YAML root must be a sequence of mappings or a single mapping".to_string(),
        )),
    }
}

fn parse_json(input: &str) -> Result<Value, ToolError> {
    serde_json::from_str(input)
        .map_err(|err| ToolError::InvalidFormat(format!("invalid JSON: {err}")))
}

fn parse_yaml(input: &str) -> Result<Value, ToolError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(input)
        .map_err(|err| ToolError::InvalidFormat(format!("invalid YAML: {err}")))?;
    serde_json::to_value(&yaml)
        .map_err(|err| ToolError::InvalidFormat(format!("YAML is not representable: {err}")))
}

fn emit_yaml(value: &Value) -> Result<String, ToolError> {
    serde_yaml::to_string(value)
        .map_err(|err| ToolError::InvalidFormat(format!("failed to serialize YAML: {err}")))
}

/// Interpret a JSON document as a non-empty sequence of records.
fn json_records(value: &Value) -> Result<Vec<&Map<String, Value>>, ToolError> {
    let Value::Array(items) = value else {
        return Err(ToolError::SchemaError(
            "JSON data must be a list of objects".to_string(),
        ));
    };
    if items.is_empty() {
        return Err(ToolError::SchemaError("JSON list is empty".to_string()));
    }
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(record) = item else {
            return Err(ToolError::SchemaError(
                "every JSON list item must be an object".to_string(),
            ));
        };
        records.push(record);
    }
    Ok(records)
}

/// Parse CSV text into one JSON object per row, keyed by the header row.
///
/// Every cell stays a string; short rows simply omit the trailing columns.
fn csv_records(input: &str) -> Result<Vec<Value>, ToolError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let mut record = Map::new();
        for (key, cell) in headers.iter().zip(row.iter()) {
            record.insert(key.to_string(), Value::String(cell.to_string()));
        }
        records.push(Value::Object(record));
    }
    Ok(records)
}

/// Serialize records against the first record's column set.
fn records_to_csv(records: &[&Map<String, Value>]) -> Result<String, ToolError> {
    let header: Vec<&str> = records[0].keys().map(String::as_str).collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header).map_err(csv_error)?;
    for record in records {
        let row: Vec<String> = header
            .iter()
            .map(|key| record.get(*key).map(scalar_to_cell).unwrap_or_default())
            .collect();
        writer.write_record(&row).map_err(csv_error)?;
    }
    finish_csv(writer)
}

/// Render a record value as a CSV cell.
///
/// Nulls are empty cells; nested sequences/mappings render as compact JSON.
fn scalar_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String, ToolError> {
    let bytes = writer
        .into_inner()
        .map_err(|err| ToolError::Io(err.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|err| ToolError::InvalidEncoding(format!("CSV output is not UTF-8: {err}")))
}

fn csv_error(err: csv::Error) -> ToolError {
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => ToolError::Io(io_err),
        other => ToolError::InvalidFormat(format!("CSV error: {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE_JSON: &str =
        r#"[{"name":"Ada","age":36},{"name":"Grace","age":85}]"#;

    #[test]
    fn json_to_csv_uses_first_record_key_order() {
        let csv = json_to_csv(PEOPLE_JSON).unwrap();
        assert_eq!(csv, "name,age\nAda,36\nGrace,85\n");
    }

    #[test]
    fn missing_keys_become_empty_cells_and_extras_are_dropped() {
        let input = r#"[
            {"name":"Ada","age":36},
            {"name":"Grace"},
            {"name":"Alan","age":41,"field":"logic"}
        ]"#;
        let csv = json_to_csv(input).unwrap();
        assert_eq!(csv, "name,age\nAda,36\nGrace,\nAlan,41\n");
    }

    #[test]
    fn json_to_csv_rejects_non_list_and_empty_input() {
        assert!(matches!(
            json_to_csv(r#"{"name":"Ada"}"#).unwrap_err(),
            ToolError::SchemaError(_)
        ));
        assert!(matches!(
            json_to_csv("[]").unwrap_err(),
            ToolError::SchemaError(_)
        ));
        assert!(matches!(
            json_to_csv("[1, 2]").unwrap_err(),
            ToolError::SchemaError(_)
        ));
    }

    #[test]
    fn json_to_csv_rejects_malformed_json() {
        assert!(matches!(
            json_to_csv("[{").unwrap_err(),
            ToolError::InvalidFormat(_)
        ));
    }

    #[test]
    fn csv_to_json_round_trip_preserves_records() {
        let source = r#"[{"name":"Ada","age":"36"},{"name":"Grace","age":"85"}]"#;
        let csv = json_to_csv(source).unwrap();
        let json = csv_to_json(&csv).unwrap();
        let original: Value = serde_json::from_str(source).unwrap();
        let round_tripped: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn yaml_json_is_structure_preserving() {
        let yaml = "name: Ada\nskills:\n- math\n- engines\n";
        let json = yaml_to_json(yaml).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["skills"][1], "engines");

        let back = json_to_yaml(&json).unwrap();
        assert!(back.contains("name: Ada"));
        assert!(back.contains("- math"));
    }

    #[test]
    fn yaml_single_mapping_degenerates_to_two_rows() {
        let csv = yaml_to_csv("name: Ada\nage: 36\n").unwrap();
        assert_eq!(csv, "name,age\nAda,36\n");
    }

    #[test]
    fn yaml_sequence_of_mappings_converts_like_json() {
        let yaml = "- name: Ada\n  age: 36\n- name: Grace\n  age: 85\n";
        let csv = yaml_to_csv(yaml).unwrap();
        assert_eq!(csv, "name,age\nAda,36\nGrace,85\n");
    }

    #[test]
    fn yaml_other_shapes_are_unsupported() {
        assert!(matches!(
            yaml_to_csv("just a scalar").unwrap_err(),
            ToolError::UnsupportedShape(_)
        ));
        assert!(matches!(
            yaml_to_csv("- 1\n- 2\n").unwrap_err(),
            ToolError::UnsupportedShape(_)
        ));
    }

    #[test]
    fn csv_to_yaml_emits_block_style_records() {
        let yaml = csv_to_yaml("name,age\nAda,36\n").unwrap();
        assert!(yaml.contains("- name: Ada"));
        assert!(yaml.contains("age: '36'"));
    }

    #[test]
    fn null_and_nested_cells_render_sanely() {
        let input = r#"[{"a":null,"b":true,"c":[1,2],"d":"x"}]"#;
        let csv = json_to_csv(input).unwrap();
        assert_eq!(csv, "a,b,c,d\n,true,\"[1,2]\",x\n");
    }

    #[test]
    fn identity_conversion_is_refused() {
        assert!(matches!(
            convert_str("[]", Format::Json, Format::Json).unwrap_err(),
            ToolError::InvalidFormat(_)
        ));
    }

    #[test]
    fn format_inference_from_extensions() {
        assert_eq!(
            Format::from_extension(Path::new("data.json")),
            Some(Format::Json)
        );
        assert_eq!(
            Format::from_extension(Path::new("data.YML")),
            Some(Format::Yaml)
        );
        assert_eq!(Format::from_extension(Path::new("data.txt")), None);
        assert_eq!(Format::from_extension(Path::new("data")), None);
    }
}
