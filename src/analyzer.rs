//! Password strength analyzer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::report::StrengthReport;
use crate::sections::{
    Section, SectionOutcome, digit_section, length_bonus_section, length_section,
    lowercase_section, symbol_pair_section, symbol_section, uppercase_section,
};

/// Scoring rules in evaluation order. Feedback keeps this order.
const SECTIONS: [(&str, Section); 7] = [
    ("length", length_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
    ("length_bonus", length_bonus_section),
    ("symbol_pair", symbol_pair_section),
];

/// Analyzes password strength and returns a fresh report.
///
/// The empty password short-circuits to [`StrengthReport::empty`]. Any other
/// input is run through every section; the raw sum is clamped to 100.
///
/// # Arguments
/// * `password` - The password to analyze
///
/// # Returns
/// A `StrengthReport` containing score, label, tier and feedback.
pub fn analyze(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthReport::empty();
    }

    let mut raw: u32 = 0;
    let mut feedback = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        match section_fn(pwd) {
            SectionOutcome::Points(points) => raw += points,
            SectionOutcome::Feedback(line) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("section {} failed", _section_name);
                feedback.push(line);
            }
            SectionOutcome::Skipped => {}
        }
    }

    let report = StrengthReport::from_raw(raw, feedback);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "analyzed password of {} chars: score {} ({})",
        pwd.chars().count(),
        report.score,
        report.label
    );

    report
}

/// Debounced analysis for keystroke-driven callers.
///
/// Waits for the configured debounce (see [`crate::config::get_debounce`]).
/// If `token` was cancelled in the meantime, a newer input superseded this
/// one and nothing is sent. Otherwise the report is sent through `tx`.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(crate::config::get_debounce()).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis superseded, skipping");
        return;
    }

    let report = analyze(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::config::DEBOUNCE_ENV;
    use crate::report::StrengthLabel;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_analyze_tx_sends_report() {
        unsafe { std::env::remove_var(DEBOUNCE_ENV); }
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        analyze_tx(&secret("Password1!"), token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.score, 80);
        assert_eq!(report.label, StrengthLabel::Strong);
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_analyze_tx_cancelled_sends_nothing() {
        unsafe { std::env::remove_var(DEBOUNCE_ENV); }
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        analyze_tx(&secret("Password1!"), token, tx).await;

        // Sender was dropped without sending.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_analyze_tx_receiver_dropped() {
        unsafe { std::env::remove_var(DEBOUNCE_ENV); }
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic.
        analyze_tx(&secret("abc"), CancellationToken::new(), tx).await;
    }
}
