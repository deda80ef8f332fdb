//! Character set building for password generation.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::classifier::SYMBOLS;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Visually ambiguous glyphs removed when similar characters are disabled.
const SIMILAR_LOWERCASE: &str = "il1o0";
const SIMILAR_UPPERCASE: &str = "IL1O0";
const SIMILAR_DIGITS: &str = "10";

/// Switches controlling which characters a generated password may contain.
///
/// `include_letters` gates both letter classes: lowercase and uppercase are
/// only used when it and the respective flag are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub include_symbols: bool,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_letters: bool,
    pub include_similar_chars: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_symbols: true,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_letters: true,
            include_similar_chars: true,
        }
    }
}

impl GenerationOptions {
    /// Every flag off. Generation falls back to lowercase letters.
    pub fn none() -> Self {
        Self {
            include_symbols: false,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_letters: false,
            include_similar_chars: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// All classes, in pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Returns `true` if `c` belongs to the unfiltered alphabet of this class.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => SYMBOLS.contains(c),
        }
    }

    fn is_enabled(self, options: &GenerationOptions) -> bool {
        match self {
            CharClass::Lowercase => options.include_letters && options.include_lowercase,
            CharClass::Uppercase => options.include_letters && options.include_uppercase,
            CharClass::Digit => options.include_numbers,
            CharClass::Symbol => options.include_symbols,
        }
    }

    /// The alphabet of this class, optionally without similar characters.
    /// Symbols are never filtered.
    pub fn alphabet(self, include_similar: bool) -> Vec<char> {
        let (base, similar) = match self {
            CharClass::Lowercase => (LOWERCASE, SIMILAR_LOWERCASE),
            CharClass::Uppercase => (UPPERCASE, SIMILAR_UPPERCASE),
            CharClass::Digit => (DIGITS, SIMILAR_DIGITS),
            CharClass::Symbol => (SYMBOLS, ""),
        };
        base.chars()
            .filter(|&c| include_similar || !similar.contains(c))
            .collect()
    }
}

/// One enabled class and the alphabet it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCharset {
    pub class: CharClass,
    pub alphabet: Vec<char>,
}

/// Alphabets selected for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charsets {
    classes: Vec<ClassCharset>,
    available: Vec<char>,
    fallback: bool,
}

impl Charsets {
    /// The enabled classes, in pool order. Never empty.
    pub fn classes(&self) -> &[ClassCharset] {
        &self.classes
    }

    /// Shared pool of every enabled alphabet. Never empty.
    pub fn available(&self) -> &[char] {
        &self.available
    }

    /// `true` when no class was enabled and lowercase was substituted.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Picks one uniformly random character from each enabled class.
    pub fn required_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<char> {
        self.classes
            .iter()
            .filter_map(|charset| charset.alphabet.choose(rng).copied())
            .collect()
    }
}

/// Builds the per-class alphabets and the shared pool from [`GenerationOptions`].
#[derive(Debug, Clone)]
pub struct CharsetBuilder {
    options: GenerationOptions,
}

impl CharsetBuilder {
    pub fn new(options: &GenerationOptions) -> Self {
        Self { options: *options }
    }

    pub fn build(&self) -> Charsets {
        let include_similar = self.options.include_similar_chars;
        let mut classes: Vec<ClassCharset> = CharClass::ALL
            .into_iter()
            .filter(|class| class.is_enabled(&self.options))
            .map(|class| ClassCharset {
                class,
                alphabet: class.alphabet(include_similar),
            })
            .collect();

        let fallback = classes.is_empty();
        if fallback {
            #[cfg(feature = "tracing")]
            tracing::debug!("no character class enabled, falling back to lowercase");
            classes.push(ClassCharset {
                class: CharClass::Lowercase,
                alphabet: CharClass::Lowercase.alphabet(include_similar),
            });
        }

        let available = classes
            .iter()
            .flat_map(|charset| charset.alphabet.iter().copied())
            .collect();

        Charsets {
            classes,
            available,
            fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_pool_sizes() {
        let charsets = CharsetBuilder::new(&GenerationOptions::default()).build();
        assert_eq!(charsets.classes().len(), 4);
        assert_eq!(charsets.available().len(), 26 + 26 + 10 + 20);
        assert!(!charsets.is_fallback());
    }

    #[test]
    fn test_similar_chars_removed() {
        let options = GenerationOptions {
            include_similar_chars: false,
            ..GenerationOptions::default()
        };
        let charsets = CharsetBuilder::new(&options).build();
        for c in ['i', 'l', '1', 'o', '0', 'I', 'L', 'O'] {
            assert!(!charsets.available().contains(&c), "{:?} not filtered", c);
        }
        let sizes: Vec<usize> = charsets.classes().iter().map(|c| c.alphabet.len()).collect();
        assert_eq!(sizes, vec![23, 23, 8, 20]);
    }

    #[test]
    fn test_letters_gate_both_letter_classes() {
        let options = GenerationOptions {
            include_letters: false,
            ..GenerationOptions::default()
        };
        let charsets = CharsetBuilder::new(&options).build();
        let classes: Vec<CharClass> = charsets.classes().iter().map(|c| c.class).collect();
        assert_eq!(classes, vec![CharClass::Digit, CharClass::Symbol]);
    }

    #[test]
    fn test_fallback_when_nothing_enabled() {
        let options = GenerationOptions {
            include_letters: false,
            include_numbers: false,
            include_symbols: false,
            ..GenerationOptions::default()
        };
        let charsets = CharsetBuilder::new(&options).build();
        assert!(charsets.is_fallback());
        assert_eq!(charsets.available().iter().collect::<String>(), LOWERCASE);
    }

    #[test]
    fn test_fallback_respects_similar_filter() {
        let charsets = CharsetBuilder::new(&GenerationOptions::none()).build();
        assert!(charsets.is_fallback());
        assert_eq!(charsets.available().len(), 23);
    }

    #[test]
    fn test_required_seed_one_per_class() {
        let mut rng = StdRng::seed_from_u64(7);
        let charsets = CharsetBuilder::new(&GenerationOptions::default()).build();
        let seed = charsets.required_seed(&mut rng);
        assert_eq!(seed.len(), 4);
        for (c, class) in seed.iter().zip(CharClass::ALL) {
            assert!(class.contains(*c), "{:?} is not {:?}", c, class);
        }
    }
}
