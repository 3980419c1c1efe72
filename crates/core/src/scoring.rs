//! Scoring module
//!
//! A freeze awards `LINE_CLEAR_BASE * lines^2`, so clearing several rows at
//! once is worth more than clearing them one by one. Nothing else scores.

use crate::types::LINE_CLEAR_BASE;

/// Points for clearing `lines` rows in a single freeze
pub fn line_clear_score(lines: usize) -> u32 {
    let lines = lines as u32;
    LINE_CLEAR_BASE.saturating_mul(lines.saturating_mul(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(2), 40);
        assert_eq!(line_clear_score(3), 90);
        assert_eq!(line_clear_score(4), 160);
    }

    #[test]
    fn test_multi_clear_beats_singles() {
        for n in 2..=4 {
            assert!(line_clear_score(n) > n as u32 * line_clear_score(1));
        }
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        assert_eq!(line_clear_score(usize::MAX), u32::MAX);
    }
}
