//! Password scoring sections
//!
//! Each section scores one rule of the heuristic.

mod bonus;
mod length;
mod variety;

pub use bonus::{length_bonus_section, symbol_pair_section};
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

/// Outcome of a single scoring rule.
///
/// A rule either awards points, reports one feedback line, or (for bonus
/// rules) does nothing. It never does both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    Points(u32),
    Feedback(String),
    Skipped,
}

pub type Section = fn(&str) -> SectionOutcome;
