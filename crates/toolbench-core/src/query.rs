//! Query-string to JSON conversion.

use serde_json::{Map, Value};

use crate::error::ToolError;
use crate::jsonfmt::to_pretty_json;

/// Convert a URL query string into an indented JSON object.
///
/// Pairs are split on `&` then once on `=`. Segments without `=` and segments
/// whose value is empty are skipped. For keys that appear more than once the
/// first occurrence wins; later values are silently dropped. `+` decodes to a
/// space and malformed percent-sequences pass through verbatim.
pub fn query_params_to_json(query: &str) -> Result<String, ToolError> {
    let mut params: Map<String, Value> = Map::new();
    for segment in query.trim().split('&') {
        let Some((raw_key, raw_value)) = segment.split_once('=') else {
            continue;
        };
        if raw_value.is_empty() {
            continue;
        }
        let key = decode_component(raw_key)?;
        let value = decode_component(raw_value)?;
        params.entry(key).or_insert(Value::String(value));
    }
    to_pretty_json(&Value::Object(params))
}

fn decode_component(raw: &str) -> Result<String, ToolError> {
    let unplussed = raw.replace('+', " ");
    urlencoding::decode(&unplussed)
        .map(|cow| cow.into_owned())
        .map_err(|err| {
            ToolError::InvalidEncoding(format!(
                "query component is not valid UTF-8 after decoding: {err}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let json = query_params_to_json("a=1&b=2&a=3").unwrap();
        assert_eq!(json, "{\n    \"a\": \"1\",\n    \"b\": \"2\"\n}");
    }

    #[test]
    fn keys_keep_first_appearance_order() {
        let json = query_params_to_json("z=1&a=2").unwrap();
        assert!(json.find("\"z\"").unwrap() < json.find("\"a\"").unwrap());
    }

    #[test]
    fn plus_and_percent_decode() {
        let json = query_params_to_json("name=John+Doe&city=S%C3%A3o%20Paulo").unwrap();
        assert!(json.contains("\"John Doe\""));
        assert!(json.contains("\"S\u{e3}o Paulo\""));
    }

    #[test]
    fn skips_pairs_without_value() {
        let json = query_params_to_json("a=1&flag&b=&c=2").unwrap();
        assert!(json.contains("\"a\""));
        assert!(json.contains("\"c\""));
        assert!(!json.contains("\"flag\""));
        assert!(!json.contains("\"b\""));
    }

    #[test]
    fn malformed_percent_sequences_pass_through() {
        let json = query_params_to_json("a=%GG").unwrap();
        assert!(json.contains("%GG"));
    }

    #[test]
    fn empty_input_is_an_empty_object() {
        assert_eq!(query_params_to_json("").unwrap(), "{}");
    }
}
