//! Status prompt and distance readout shown in the tool panel.

use super::snap::SnapMode;

pub const DISABLED_STATUS: &str = "Tool is disabled. Enable the tool to start measuring.";
pub const NO_DISTANCE: &str = "Distance: -";

/// Prompt for the next click, given the tool state.
pub fn status_text(active: bool, has_pending: bool, mode: SnapMode) -> String {
    if !active {
        return DISABLED_STATUS.to_string();
    }
    let which = if has_pending { "second" } else { "first" };
    format!("Hold Ctrl+Click to place {which} point{}", mode.status_suffix())
}

/// Readout for the most recent completed measurement.
///
/// Stays at `Distance: -` while the tool is off or a pair is half-way done.
pub fn distance_text(active: bool, has_pending: bool, last_distance: Option<f64>) -> String {
    match last_distance {
        Some(d) if active && !has_pending => format!("Distance: {d:.3}m"),
        _ => NO_DISTANCE.to_string(),
    }
}

/// `0 measurements`, `1 measurement`, `N measurements`.
pub fn history_count_text(count: usize) -> String {
    if count == 1 {
        "1 measurement".to_string()
    } else {
        format!("{count} measurements")
    }
}
