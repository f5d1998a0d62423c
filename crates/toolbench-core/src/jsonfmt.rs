//! JSON pretty-printing.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ToolError;

/// Parse `text` as JSON and re-serialize it with 4-space indentation.
///
/// Object key order is preserved.
pub fn format_json(text: &str) -> Result<String, ToolError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| ToolError::InvalidFormat(format!("invalid JSON: {err}")))?;
    to_pretty_json(&value)
}

/// Serialize a JSON value with 4-space indentation.
pub(crate) fn to_pretty_json(value: &Value) -> Result<String, ToolError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| ToolError::InvalidFormat(format!("failed to serialize JSON: {err}")))?;
    String::from_utf8(buf)
        .map_err(|err| ToolError::InvalidEncoding(format!("serialized JSON is not UTF-8: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_four_space_indent() {
        let formatted = format_json(r#"{"name":"ada","tags":["a","b"]}"#).unwrap();
        assert_eq!(
            formatted,
            "{\n    \"name\": \"ada\",\n    \"tags\": [\n        \"a\",\n        \"b\"\n    ]\n}"
        );
    }

    #[test]
    fn preserves_key_order() {
        let formatted = format_json(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let z = formatted.find("\"z\"").unwrap();
        let a = formatted.find("\"a\"").unwrap();
        let m = formatted.find("\"m\"").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            format_json("{not json").unwrap_err(),
            ToolError::InvalidFormat(_)
        ));
    }

    #[test]
    fn scalars_format_as_themselves() {
        assert_eq!(format_json("42").unwrap(), "42");
        assert_eq!(format_json("\"hi\"").unwrap(), "\"hi\"");
    }
}
