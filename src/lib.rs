//! Password strength scoring, generation and improvement
//!
//! This library scores passwords with a fixed rule-based heuristic and
//! generates or improves passwords from a set of character classes.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live analysis with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_ANALYZE_DEBOUNCE_MS`: Debounce delay of live analysis
//!   (default: `300`)
//!
//! # Randomness
//!
//! Every random operation has a `*_with` variant taking any [`rand::Rng`].
//! The plain variants use the thread-local CSPRNG returned by `rand::rng()`.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{analyze, generate_password, improve_password, GenerationOptions};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Password1!".to_string().into());
//! let report = analyze(&password);
//! println!("Score: {} ({})", report.score, report.label);
//! for line in &report.feedback {
//!     println!("- {}", line);
//! }
//!
//! let generated = generate_password(16, &GenerationOptions::default())
//!     .expect("length is not negative");
//! let improved = improve_password(&password).expect("password is not empty");
//! # let _ = (generated, improved);
//! ```

// Internal modules
mod analyzer;
mod charset;
mod classifier;
mod config;
mod error;
mod generator;
mod improver;
mod report;
mod sections;

// Public API
pub use analyzer::analyze;
pub use charset::{CharClass, CharsetBuilder, Charsets, ClassCharset, GenerationOptions};
pub use classifier::{
    SYMBOLS, count_symbols, has_digit, has_lowercase, has_symbol, has_uppercase, is_symbol,
};
pub use config::{DEFAULT_LENGTH, MAX_UI_LENGTH, MIN_UI_LENGTH, get_debounce};
pub use error::PasswordError;
pub use generator::{generate_password, generate_password_with};
pub use improver::{IMPROVED_MIN_LENGTH, improve_password, improve_password_with};
pub use report::{MAX_SCORE, StrengthLabel, StrengthReport, StrengthTier};

#[cfg(feature = "async")]
pub use analyzer::analyze_tx;
