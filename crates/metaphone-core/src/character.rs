// Character classification over canonical (uppercased, mark-free) text

// ---------------------------------------------------------------------------
// Vowels
// ---------------------------------------------------------------------------

/// Vowels as seen by the phonetic rules. `Y` counts as a vowel.
pub const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'Y'];

/// Check whether a canonical character is a vowel.
///
/// Only uppercase characters are recognized: callers are expected to pass
/// canonicalized text, so `'a'` is not a vowel here.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

// ---------------------------------------------------------------------------
// Letter classification
// ---------------------------------------------------------------------------

/// Character type classification for canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// `A`-`Z` after canonicalization.
    Letter,
    /// Word separator inside multi-part names ("VAN HELSING").
    Whitespace,
    /// Anything else: digits, punctuation, letters from other scripts.
    Other,
}

/// Returns the character type for a canonical character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_ascii_uppercase() {
        CharType::Letter
    } else if c.is_whitespace() {
        CharType::Whitespace
    } else {
        CharType::Other
    }
}

/// Check whether a string contains at least one canonical letter.
///
/// Input made only of digits and punctuation encodes to empty codes, which
/// callers usually want to skip rather than index.
pub fn has_letters(s: &str) -> bool {
    s.chars().any(|c| get_char_type(c) == CharType::Letter)
}
