//! Scoring module - points, levels and gravity speed
//!
//! - Soft drop: 1 point per successful downward step
//! - Hard drop: 1 point per row traversed
//! - Line clear: `level * LINE_SCORES[rows]`
//! - Level: `lines / 10 + 1`, so a fresh game starts at level 1

use std::time::Duration;

use crate::types::{LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `rows` rows with a single lock at `level`.
///
/// Row counts outside 1..=4 score nothing.
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    match LINE_SCORES.get(rows) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Points for a drop of `rows` cells (soft or hard)
pub fn drop_score(rows: u32) -> u32 {
    rows
}

/// Level for a total line count
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Shortest gravity interval; a timer firing at zero intervals would never catch up.
pub const MIN_GRAVITY_INTERVAL: Duration = Duration::from_millis(1);

/// Gravity interval: `base / (level + offset)`, never below [`MIN_GRAVITY_INTERVAL`].
///
/// Division happens on the nanosecond representation, so with the default tuning the interval
/// strictly decreases with the level for any level a game can reach.
pub fn gravity_interval(base: Duration, level: u32, offset: u32) -> Duration {
    (base / level.saturating_add(offset).max(1)).max(MIN_GRAVITY_INTERVAL)
}
