/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Weight delta color:
/// \>0 → green (weight lost)
/// \<0 → red (weight gained)
/// 0 → reset
pub fn color_for_delta(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Completed meals are green, pending ones grey.
pub fn color_for_completed(completed: bool) -> &'static str {
    if completed { GREEN } else { GREY }
}
