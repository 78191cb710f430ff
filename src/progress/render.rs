//! Pure formatting of a single progress line.

use std::time::Duration;

/// Width of the bar in cells.
pub const BAR_WIDTH: i64 = 30;

/// Glyph drawn for completed cells.
pub const FILLED_GLYPH: &str = "█";

/// Glyph drawn for remaining cells.
pub const EMPTY_GLYPH: &str = "░";

/// Upper bound on drawn filled cells when a caller overshoots wildly.
const MAX_DRAWN_CELLS: i64 = 4096;

/// Number of filled cells for the given position: `trunc(30 * current / total)`.
///
/// Not clamped to the bar width. Overshooting yields more than 30, negative
/// progress yields a negative count. `total` must be non-zero.
pub fn filled_cells(current: i64, total: i64) -> i64 {
    // `as` saturates, so absurd inputs cannot overflow
    (BAR_WIDTH as f64 * current as f64 / total as f64) as i64
}

/// Percentage of completion, unclamped.
pub fn percent(current: i64, total: i64) -> f64 {
    current as f64 / total as f64 * 100.0
}

/// Estimated minutes remaining, extrapolating the average step time.
///
/// `None` until at least one step has been recorded. Negative when the
/// caller has overshot `total`.
pub fn eta_minutes(current: i64, total: i64, elapsed: Duration) -> Option<f64> {
    if current <= 0 {
        return None;
    }

    let avg_secs_per_step = elapsed.as_secs_f64() / current as f64;
    let remaining_steps = total as f64 - current as f64;
    Some(avg_secs_per_step * remaining_steps / 60.0)
}

/// Draws the bar body (without brackets).
pub fn bar(current: i64, total: i64) -> String {
    let filled = filled_cells(current, total);
    let drawn_filled = filled.clamp(0, MAX_DRAWN_CELLS) as usize;
    let drawn_empty = BAR_WIDTH.saturating_sub(filled).clamp(0, BAR_WIDTH) as usize;

    FILLED_GLYPH.repeat(drawn_filled) + &EMPTY_GLYPH.repeat(drawn_empty)
}

/// Renders the full line, starting with a carriage return and without a
/// trailing newline.
///
/// Returns `None` when `total == 0`, in which case nothing is displayed.
pub fn render_line(description: &str, current: i64, total: i64, elapsed: Duration) -> Option<String> {
    if total == 0 {
        return None;
    }

    let eta = eta_minutes(current, total, elapsed)
        .map(|minutes| format!(" | ETA: {:.1}min", minutes))
        .unwrap_or_default();

    Some(format!(
        "\r{}: [{}] {:.0}% ({}/{}){}",
        description,
        bar(current, total),
        percent(current, total),
        current,
        total,
        eta
    ))
}
