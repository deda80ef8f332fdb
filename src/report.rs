//! Strength report types returned by the analyzer.

use std::fmt;

/// Upper bound of the clamped score.
pub const MAX_SCORE: u8 = 100;

/// Human-readable strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    NoPassword,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::NoPassword => "No password",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Color tag of a report.
///
/// `Weakest` and `Weak` both render with the [`StrengthLabel::Weak`] label;
/// only the color tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthTier {
    Neutral,
    Weakest,
    Weak,
    Moderate,
    Strong,
    Strongest,
}

impl StrengthTier {
    /// Maps a clamped score to its tier, top-down.
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => StrengthTier::Strongest,
            70..=84 => StrengthTier::Strong,
            50..=69 => StrengthTier::Moderate,
            25..=49 => StrengthTier::Weak,
            _ => StrengthTier::Weakest,
        }
    }

    pub fn label(self) -> StrengthLabel {
        match self {
            StrengthTier::Neutral => StrengthLabel::NoPassword,
            StrengthTier::Weakest | StrengthTier::Weak => StrengthLabel::Weak,
            StrengthTier::Moderate => StrengthLabel::Moderate,
            StrengthTier::Strong => StrengthLabel::Strong,
            StrengthTier::Strongest => StrengthLabel::VeryStrong,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::Neutral => "gray",
            StrengthTier::Weakest => "red",
            StrengthTier::Weak => "orange",
            StrengthTier::Moderate => "yellow",
            StrengthTier::Strong => "light-green",
            StrengthTier::Strongest => "green",
        }
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Clamped score in `0..=100`.
    pub score: u8,
    /// Failed rules, in evaluation order.
    pub feedback: Vec<String>,
    pub label: StrengthLabel,
    pub tier: StrengthTier,
}

impl StrengthReport {
    /// Report for the empty password.
    pub fn empty() -> Self {
        Self {
            score: 0,
            feedback: Vec::new(),
            label: StrengthLabel::NoPassword,
            tier: StrengthTier::Neutral,
        }
    }

    /// Builds a report from a raw rule sum, clamping it to [`MAX_SCORE`].
    pub fn from_raw(raw: u32, feedback: Vec<String>) -> Self {
        let score = raw.min(MAX_SCORE as u32) as u8;
        let tier = StrengthTier::from_score(score);
        Self {
            score,
            feedback,
            label: tier.label(),
            tier,
        }
    }

    /// `true` when no password was analysed.
    pub fn is_empty(&self) -> bool {
        self.tier == StrengthTier::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::Weakest);
        assert_eq!(StrengthTier::from_score(24), StrengthTier::Weakest);
        assert_eq!(StrengthTier::from_score(25), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(49), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(50), StrengthTier::Moderate);
        assert_eq!(StrengthTier::from_score(70), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_score(84), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_score(85), StrengthTier::Strongest);
        assert_eq!(StrengthTier::from_score(100), StrengthTier::Strongest);
    }

    #[test]
    fn test_two_weak_tiers_share_label() {
        assert_eq!(StrengthTier::Weakest.label(), StrengthLabel::Weak);
        assert_eq!(StrengthTier::Weak.label(), StrengthLabel::Weak);
        assert_ne!(StrengthTier::Weakest.color(), StrengthTier::Weak.color());
    }

    #[test]
    fn test_from_raw_clamps() {
        let report = StrengthReport::from_raw(105, Vec::new());
        assert_eq!(report.score, MAX_SCORE);
        assert_eq!(report.label, StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::NoPassword.to_string(), "No password");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn test_empty_report() {
        let report = StrengthReport::empty();
        assert!(report.is_empty());
        assert_eq!(report.tier.color(), "gray");
    }
}
