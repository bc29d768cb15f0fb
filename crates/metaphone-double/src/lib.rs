//! Double Metaphone phonetic encoding.
//!
//! Encodes a word or name into a primary and an optional secondary phonetic
//! code. Words that sound alike share at least one code even when they are
//! spelled differently or come from different languages:
//!
//! ```
//! use metaphone_double::encode;
//!
//! assert_eq!(encode("Smith"), ("SM0".to_string(), "XMT".to_string()));
//! assert_eq!(encode("Schmidt"), ("XMT".to_string(), "SMT".to_string()));
//! ```
//!
//! The secondary code is empty when the word has a single reading.
//!
//! # Architecture
//!
//! - [`word`] -- The canonical word and its whole-word flags
//! - [`buffer`] -- Sentinel-padded buffer and the bounded read window
//! - [`rules`] -- Letter-keyed, first-match-wins rule groups
//! - [`outcome`] -- What one rule evaluation appends and how far it advances
//! - [`engine`] -- The scan loop, encoder options and scan trace
//!
//! Canonicalization (accent stripping, uppercasing) comes from
//! [`metaphone_core::normalize`].

pub mod buffer;
mod emitter;
pub mod engine;
pub mod outcome;
pub mod rules;
pub mod word;

pub use engine::{Encoder, EncoderOptions, ScanStep};
pub use metaphone_core::{MatchLevel, PhoneticCode};
pub use outcome::{Fragment, RuleOutcome};
pub use word::CanonicalWord;

/// Encode a word with default options. Returns `(primary, secondary)`;
/// `secondary` is empty when it would equal `primary`.
pub fn encode(word: &str) -> (String, String) {
    Encoder::default().encode(word).into_parts()
}

/// Encode a word that is already canonical (uppercase, no diacritics).
pub fn encode_canonical(word: &str) -> (String, String) {
    Encoder::default().encode_canonical(word).into_parts()
}

/// Compare two words by their codes.
pub fn match_level(a: &str, b: &str) -> MatchLevel {
    let encoder = Encoder::default();
    encoder.encode(a).match_level(&encoder.encode(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(p: &str, s: &str) -> (String, String) {
        (p.to_string(), s.to_string())
    }

    #[test]
    fn smith_and_schmidt_share_a_code() {
        assert_eq!(encode("Smith"), pair("SM0", "XMT"));
        assert_eq!(encode("Schmidt"), pair("XMT", "SMT"));
        assert_eq!(match_level("Smith", "Schmidt"), MatchLevel::Normal);
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(""), pair("", ""));
        assert_eq!(encode_canonical(""), pair("", ""));
    }

    #[test]
    fn non_letters_only() {
        assert_eq!(encode("1234"), pair("", ""));
        assert_eq!(encode("  "), pair("", ""));
    }

    #[test]
    fn leading_x() {
        let (primary, _) = encode("Xavier");
        assert!(primary.starts_with('S'));
        assert_eq!(encode("Xavier"), pair("SF", "SFR"));
    }

    #[test]
    fn silent_starters() {
        assert_eq!(encode("Knight"), encode("Night"));
        assert!(encode("Knight").0.starts_with('N'));
        assert_eq!(encode("Gnome").0, "NM");
        assert_eq!(encode("Pneumatic").0, "NMTK");
        assert_eq!(encode("Wright").0, "RT");
        assert_eq!(encode("Psychology").0, "SXLJ");
    }

    #[test]
    fn accented_input() {
        assert_eq!(encode("Müller"), encode("Muller"));
        assert_eq!(encode("François"), encode("Francois"));
    }

    #[test]
    fn match_levels_between_words() {
        assert_eq!(match_level("Smith", "Smyth"), MatchLevel::Strong);
        assert_eq!(match_level("Arnow", "Arnoff"), MatchLevel::Normal);
        assert_eq!(match_level("Smith", "Jones"), MatchLevel::NoMatch);
    }
}
