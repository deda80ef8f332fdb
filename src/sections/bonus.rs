//! Bonus sections - extra points that never produce feedback.

use crate::classifier::count_symbols;
use super::SectionOutcome;

/// Length that earns the long-password bonus.
pub const BONUS_LENGTH: usize = 16;

/// +10 for passwords of 16 characters or more.
pub fn length_bonus_section(password: &str) -> SectionOutcome {
    if password.chars().count() >= BONUS_LENGTH {
        SectionOutcome::Points(10)
    } else {
        SectionOutcome::Skipped
    }
}

/// +5 when at least two symbols appear anywhere in the password.
pub fn symbol_pair_section(password: &str) -> SectionOutcome {
    if count_symbols(password) >= 2 {
        SectionOutcome::Points(5)
    } else {
        SectionOutcome::Skipped
    }
}
