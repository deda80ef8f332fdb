//! Length section - awards points for password length.

use super::SectionOutcome;

/// Minimum length that avoids the length feedback.
pub const MIN_LENGTH: usize = 8;
/// Length that earns the full length score.
pub const STRONG_LENGTH: usize = 12;

/// Scores password length.
///
/// Exactly one branch fires:
/// - `>= 12` characters: +25
/// - `8..12` characters: +15
/// - shorter: feedback, no points
pub fn length_section(password: &str) -> SectionOutcome {
    let len = password.chars().count();
    if len >= STRONG_LENGTH {
        SectionOutcome::Points(25)
    } else if len >= MIN_LENGTH {
        SectionOutcome::Points(15)
    } else {
        SectionOutcome::Feedback(format!(
            "Use at least {} characters ({}+ recommended)",
            MIN_LENGTH, STRONG_LENGTH
        ))
    }
}
