//! Character class predicates shared by the analyzer and the generators.

/// The fixed symbol set recognised as "special characters".
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Returns `true` if `c` belongs to [`SYMBOLS`].
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(password: &str) -> bool {
    password.chars().any(is_symbol)
}

/// Counts the characters of `password` that belong to [`SYMBOLS`].
pub fn count_symbols(password: &str) -> usize {
    password.chars().filter(|&c| is_symbol(c)).count()
}
