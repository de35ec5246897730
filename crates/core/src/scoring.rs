//! Scoring and progression - line-clear points, level curve, gravity curve.

use blockfall_types::{
    BASE_FALL_MS, FALL_MS_PER_LEVEL, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS,
};

/// Score awarded for clearing `lines` rows in a single lock event at `level`.
///
/// Only 1 to 4 simultaneous rows are in the table; anything else awards
/// nothing. More than 4 is unreachable on a 20-row board since a piece spans
/// at most 4 rows.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines as usize] * level,
        _ => 0,
    }
}

/// Level for a cleared-line total: one level per 10 lines, starting at 1.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, floored at 100ms.
pub fn fall_interval_ms(level: u32) -> u32 {
    BASE_FALL_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(FALL_MS_PER_LEVEL))
        .max(MIN_FALL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_scores_scale_with_level() {
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 300);
        assert_eq!(line_clear_score(3, 1), 500);
        assert_eq!(line_clear_score(4, 1), 800);

        assert_eq!(line_clear_score(1, 3), 300);
        assert_eq!(line_clear_score(4, 5), 4000);
    }

    #[test]
    fn counts_outside_the_table_award_nothing() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(5, 1), 0);
        assert_eq!(line_clear_score(u32::MAX, 9), 0);
    }

    #[test]
    fn level_curve() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn fall_interval_floors_at_100ms() {
        assert_eq!(fall_interval_ms(1), 1000);
        assert_eq!(fall_interval_ms(2), 900);
        assert_eq!(fall_interval_ms(9), 200);
        assert_eq!(fall_interval_ms(10), 100);
        assert_eq!(fall_interval_ms(11), 100);
        assert_eq!(fall_interval_ms(1000), 100);
    }
}
