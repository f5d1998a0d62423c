//! Hex and RGB color string conversion.

use crate::error::ToolError;

/// Convert a 6-digit hex color (optionally prefixed with `#`) into an
/// `rgb(r, g, b)` string.
pub fn hex_to_rgb(input: &str) -> Result<String, ToolError> {
    let hex = input.trim().trim_start_matches('#');
    if hex.chars().count() != 6 {
        return Err(ToolError::InvalidFormat(
            "HEX color must be 6 characters long".to_string(),
        ));
    }
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(ToolError::InvalidFormat(format!(
            "'{hex}' is not a valid HEX color code"
        )));
    }

    // All-ASCII at this point, so byte slicing lands on char boundaries.
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|err| {
            ToolError::InvalidFormat(format!("invalid HEX color code: {err}"))
        })
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;

    Ok(format!("rgb({r}, {g}, {b})"))
}

/// Convert an RGB triple such as `255, 87, 51` or `rgb(255, 87, 51)` into an
/// uppercase `#RRGGBB` string.
///
/// The label and punctuation are stripped and whatever remains must be exactly
/// three integer tokens, each in `[0, 255]`.
pub fn rgb_to_hex(input: &str) -> Result<String, ToolError> {
    let cleaned = input
        .replace(['(', ')'], "")
        .replace("rgb", "")
        .replace(',', " ");
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ToolError::InvalidFormat(
            "RGB input must have three components".to_string(),
        ));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: i128 = part.parse().map_err(|_| {
            ToolError::InvalidFormat(format!("'{part}' is not an integer"))
        })?;
        if !(0..=255).contains(&value) {
            return Err(ToolError::OutOfRange(
                "RGB values must be in the range 0-255".to_string(),
            ));
        }
        *slot = value as u8;
    }

    let [r, g, b] = channels;
    Ok(format!("#{r:02X}{g:02X}{b:02X}"))
}
