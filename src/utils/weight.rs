//! Weight input parsing.
//!
//! Weights are stored exactly as typed; they are only parsed when a value is
//! derived from them, so an in-progress or invalid entry never fails a command.

/// Parse a user-entered weight. Accepts a decimal point or a decimal comma
/// ("80.5", "80,5"). Empty, non-numeric or non-finite input yields `None`.
pub fn parse_weight(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Text to show for a stored weight field.
pub fn display_weight(raw: &str) -> String {
    match parse_weight(raw) {
        Some(v) => format!("{} kg", v),
        None if raw.trim().is_empty() => "--".to_string(),
        None => format!("{} (not a number)", raw.trim()),
    }
}
