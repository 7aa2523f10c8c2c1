//! Scoring module - line-clear points and level-speed progression
//!
//! Order matters for compatible scores: the points for a clear use the level
//! *before* that clear can promote it.
//! - Points: `score_per_line * lines * level`
//! - Level: one step whenever the cumulative line total reaches `level * lines_per_level`
//! - Gravity: each level-up takes `drop_step_ms` off the interval, floored

/// Points for clearing `lines` rows at `level`
pub fn line_clear_score(lines: u32, level: u32, score_per_line: u32) -> u32 {
    score_per_line.saturating_mul(lines).saturating_mul(level)
}

/// Whether the cumulative line total has reached the next level threshold.
///
/// A single check: a clear that crosses several thresholds still promotes
/// only one level.
pub fn reaches_next_level(total_lines: u32, level: u32, lines_per_level: u32) -> bool {
    total_lines >= level.saturating_mul(lines_per_level)
}

/// Gravity interval after one level-up
pub fn next_drop_interval(current_ms: u32, step_ms: u32, min_ms: u32) -> u32 {
    current_ms.saturating_sub(step_ms).max(min_ms)
}
