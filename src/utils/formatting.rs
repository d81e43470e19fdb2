//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Brazilian currency: 950 → "R$ 9,50", 19950 → "R$ 199,50"
pub fn format_brl(cents: u32) -> String {
    format!("R$ {},{:02}", cents / 100, cents % 100)
}

/// Grams as kilograms with a decimal comma: 1750 → "1,75 kg", 5000 → "5 kg"
pub fn format_kg(grams: u32) -> String {
    let kg = grams / 1000;
    let rest = grams % 1000;

    if rest == 0 {
        return format!("{} kg", kg);
    }

    // drop trailing zeros of the fractional part (250 → "25", 500 → "5")
    let frac = format!("{:03}", rest);
    format!("{},{} kg", kg, frac.trim_end_matches('0'))
}

/// Weight delta with one decimal, as shown on the dashboard.
pub fn format_delta(delta: f64) -> String {
    format!("{:.1} kg", delta)
}

/// "3/21", "5/12", ...
pub fn ratio(done: usize, total: usize) -> String {
    format!("{}/{}", done, total)
}
