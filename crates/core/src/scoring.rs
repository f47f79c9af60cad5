//! Scoring module - line-clear points, level-ups and the speed curve
//!
//! Points are awarded once per lock, from the number of rows that lock cleared:
//! - `line_clear_points` per row (100 by default)
//! - plus `multi_line_bonus` (200) for every row beyond the first
//!
//! | Rows | Points |
//! |------|--------|
//! | 1 | 100 |
//! | 2 | 400 |
//! | 3 | 700 |
//! | 4 | 1000 |
//!
//! The step interval shrinks by `speed_decay` per level and is clamped at `min_step_delay_ms`.

use crate::rules::{LevelUpPolicy, Rules};

/// Outcome of scoring one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points earned by this lock.
    pub points: u32,
    /// Score after the lock (and after any level-up reset).
    pub score: u32,
    /// Level after the lock.
    pub level: u32,
    pub levels_gained: u32,
    /// The board must be emptied for the new level.
    pub wipe_board: bool,
}

/// Points for clearing `lines` rows with a single lock.
pub fn line_clear_points(lines: usize, rules: &Rules) -> u32 {
    if lines == 0 {
        return 0;
    }
    let lines = lines as u32;
    let base = lines.saturating_mul(rules.line_clear_points);
    let bonus = (lines - 1).saturating_mul(rules.multi_line_bonus);
    base.saturating_add(bonus)
}

/// Apply a lock that cleared `lines` rows to the current score and level.
///
/// Locks that clear nothing never change the score or level.
pub fn score_lock(lines: usize, score: u32, level: u32, rules: &Rules) -> ScoreResult {
    let points = line_clear_points(lines, rules);
    let mut result = ScoreResult {
        points,
        score: score.saturating_add(points),
        level,
        levels_gained: 0,
        wipe_board: false,
    };
    if points == 0 {
        return result;
    }

    match rules.level_up {
        LevelUpPolicy::ResetScoreAndBoard => {
            if result.score >= rules.level_up_score {
                result.level = level.saturating_add(1);
                result.levels_gained = 1;
                result.score = 0;
                result.wipe_board = true;
            }
        }
        LevelUpPolicy::Accumulate => {
            let before = score / rules.level_up_score;
            let after = result.score / rules.level_up_score;
            result.levels_gained = after - before;
            result.level = level.saturating_add(result.levels_gained);
        }
    }
    result
}

/// Step interval for `level`: `round(base * decay^(level - 1))`, never below the floor.
pub fn step_delay_ms(level: u32, rules: &Rules) -> u32 {
    let exponent = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    let delay = (rules.base_step_delay_ms as f64 * rules.speed_decay.powi(exponent)).round();
    (delay as u32).max(rules.min_step_delay_ms)
}
