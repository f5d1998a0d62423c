//! URL percent-encoding and decoding.

use crate::error::ToolError;

/// Percent-encode every character outside the unreserved set
/// (`A-Z a-z 0-9 - _ . ~`). A space becomes `%20`, never `+`.
pub fn url_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Reverse percent-encoding.
///
/// A `%` that is not followed by two hexadecimal digits is an error, as is a
/// decode that produces invalid UTF-8.
pub fn url_decode(text: &str) -> Result<String, ToolError> {
    validate_percent_sequences(text)?;
    urlencoding::decode(text)
        .map(|cow| cow.into_owned())
        .map_err(|err| {
            ToolError::InvalidEncoding(format!("decoded bytes are not valid UTF-8: {err}"))
        })
}

fn validate_percent_sequences(text: &str) -> Result<(), ToolError> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(ToolError::InvalidEncoding(format!(
                    "malformed percent sequence at byte offset {i}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
