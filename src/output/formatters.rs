//! Formatting utilities for terminal output

use crate::core::{LetterBox, Solution};
use std::time::Duration;

/// Format a solution as an arrow-joined chain
///
/// ```
/// use letterboxed::core::Solution;
/// use letterboxed::output::formatters::format_chain;
///
/// let solution = Solution::from(vec!["upholder".to_string(), "rebuy".to_string()]);
/// assert_eq!(format_chain(&solution), "UPHOLDER → REBUY");
/// ```
#[must_use]
pub fn format_chain(solution: &Solution) -> String {
    solution
        .words()
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Format the sides of a box, upper-cased
#[must_use]
pub fn format_box(letter_box: &LetterBox) -> String {
    letter_box
        .sides()
        .iter()
        .map(|side| {
            side.iter()
                .map(|&letter| char::from(letter.to_ascii_uppercase()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a duration with a unit suited to its size
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_millis(1) {
        format!("{}µs", duration.as_micros())
    } else if duration < Duration::from_secs(1) {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
