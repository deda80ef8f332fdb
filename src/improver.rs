//! Improvement of an existing password.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use secrecy::{ExposeSecret, SecretString};

use crate::classifier::{has_digit, has_lowercase, has_symbol, has_uppercase};
use crate::error::PasswordError;

/// Minimum length of an improved password.
pub const IMPROVED_MIN_LENGTH: usize = 12;

/// Fixed suffix appended for each missing class, in append order.
const SUFFIXES: [(fn(&str) -> bool, &str); 4] = [
    (has_lowercase, "abc"),
    (has_uppercase, "XYZ"),
    (has_digit, "123"),
    (has_symbol, "!@#"),
];

/// Base-36 alphabet used for padding.
const PADDING: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Improves a password using the thread-local CSPRNG.
///
/// See [`improve_password_with`].
pub fn improve_password(password: &SecretString) -> Result<SecretString, PasswordError> {
    improve_password_with(password, &mut rand::rng())
}

/// Strengthens `password` while keeping every one of its characters.
///
/// Appends `abc`, `XYZ`, `123` or `!@#` for each missing class, pads with
/// random base-36 characters up to 12 characters, then shuffles. The result
/// contains the original characters but not their order.
///
/// # Errors
/// [`PasswordError::EmptyPassword`] if `password` is empty.
pub fn improve_password_with<R: Rng + ?Sized>(
    password: &SecretString,
    rng: &mut R,
) -> Result<SecretString, PasswordError> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("refusing to improve an empty password");
        return Err(PasswordError::EmptyPassword);
    }

    let mut chars: Vec<char> = pwd.chars().collect();
    for (present, suffix) in SUFFIXES {
        if !present(pwd) {
            chars.extend(suffix.chars());
        }
    }

    let missing = IMPROVED_MIN_LENGTH.saturating_sub(chars.len());
    chars.extend((0..missing).filter_map(|_| PADDING.choose(rng).copied()));

    chars.shuffle(rng);

    let improved: String = chars.into_iter().collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "improved password: score {} -> {}, length {} -> {}",
        crate::analyzer::analyze(password).score,
        crate::analyzer::analyze(&SecretString::new(improved.clone().into())).score,
        pwd.chars().count(),
        improved.chars().count()
    );

    Ok(SecretString::new(improved.into()))
}
