//! Scoring module - fixed line-clear table
//!
//! A lock that clears N lines adds `LINE_SCORES[min(N, 4)]` to the score.
//! There is no level multiplier, no combo and no drop bonus.

use crate::types::LINE_SCORES;

/// Points awarded for clearing `lines` rows in one lock.
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// New score after a lock that cleared `lines` rows.
///
/// Never decreases; saturates instead of wrapping.
pub fn calculate_score(lines: usize, current_score: u32) -> u32 {
    current_score.saturating_add(line_clear_points(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(calculate_score(0, 0), 0);
        assert_eq!(calculate_score(1, 0), 100);
        assert_eq!(calculate_score(2, 0), 300);
        assert_eq!(calculate_score(3, 0), 500);
        assert_eq!(calculate_score(4, 0), 800);
    }

    #[test]
    fn test_more_than_four_lines_clamps() {
        assert_eq!(line_clear_points(5), 800);
        assert_eq!(line_clear_points(20), 800);
    }

    #[test]
    fn test_score_adds_to_current() {
        assert_eq!(calculate_score(0, 1234), 1234);
        assert_eq!(calculate_score(1, 1234), 1334);
    }

    #[test]
    fn test_score_saturates() {
        assert_eq!(calculate_score(4, u32::MAX - 10), u32::MAX);
    }

    #[test]
    fn test_score_monotonic_in_current() {
        for lines in 0..=6 {
            let mut last = 0;
            for current in (0..5000).step_by(97) {
                let next = calculate_score(lines, current);
                assert!(next >= current);
                assert!(next >= last);
                last = next;
            }
        }
    }
}
