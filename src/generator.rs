//! Random password generation.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use secrecy::SecretString;

use crate::charset::{CharsetBuilder, GenerationOptions};
use crate::error::PasswordError;

/// Generates a password using the thread-local CSPRNG.
///
/// See [`generate_password_with`].
pub fn generate_password(
    length: i64,
    options: &GenerationOptions,
) -> Result<SecretString, PasswordError> {
    generate_password_with(length, options, &mut rand::rng())
}

/// Generates a password of `length` characters drawing from `rng`.
///
/// One random character of every enabled class is placed first, the rest is
/// filled from the shared pool, then the whole password is shuffled. When
/// `length` is smaller than the number of enabled classes the class
/// guarantee wins and the password is longer than requested.
///
/// # Errors
/// [`PasswordError::InvalidArgument`] if `length` is negative.
pub fn generate_password_with<R: Rng + ?Sized>(
    length: i64,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<SecretString, PasswordError> {
    let length = usize::try_from(length).map_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::warn!("rejected negative password length {}", length);
        PasswordError::InvalidArgument { length }
    })?;

    let charsets = CharsetBuilder::new(options).build();
    let mut chars = charsets.required_seed(rng);

    let missing = length.saturating_sub(chars.len());
    let available = charsets.available();
    chars.extend((0..missing).filter_map(|_| available.choose(rng).copied()));

    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "generated password of {} chars from {} classes",
        chars.len(),
        charsets.classes().len()
    );

    let password: String = chars.into_iter().collect();
    Ok(SecretString::new(password.into()))
}
