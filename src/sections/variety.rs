//! Character variety sections - one rule per character class.

use crate::classifier::{has_digit, has_lowercase, has_symbol, has_uppercase};
use super::SectionOutcome;

fn class_rule(present: bool, points: u32, feedback: &str) -> SectionOutcome {
    if present {
        SectionOutcome::Points(points)
    } else {
        SectionOutcome::Feedback(feedback.to_string())
    }
}

pub fn lowercase_section(password: &str) -> SectionOutcome {
    class_rule(has_lowercase(password), 15, "Include lowercase letters")
}

pub fn uppercase_section(password: &str) -> SectionOutcome {
    class_rule(has_uppercase(password), 15, "Include uppercase letters")
}

pub fn digit_section(password: &str) -> SectionOutcome {
    class_rule(has_digit(password), 15, "Include numbers")
}

/// Symbols are worth more than the other classes (+20).
pub fn symbol_section(password: &str) -> SectionOutcome {
    class_rule(
        has_symbol(password),
        20,
        "Include special characters (!@#$%^&*)",
    )
}
