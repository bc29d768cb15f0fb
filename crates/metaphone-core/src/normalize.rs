// Input canonicalization: raw text to diacritic-free uppercase
//
// Encoders only ever see canonical text. The steps are:
//   1. decode (bytes only): invalid UTF-8 sequences are dropped, never reported
//   2. NFD decomposition, so "É" becomes "E" + U+0301
//   3. removal of combining marks
//   4. full Unicode uppercasing ("ß" becomes "SS")
//
// Characters without a decomposition (digits, spaces, non-Latin letters)
// pass through unchanged; the encoders treat them as silent.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalize a word for phonetic encoding.
///
/// # Examples
///
/// ```
/// use metaphone_core::canonicalize;
///
/// assert_eq!(canonicalize("Gödel"), "GODEL");
/// assert_eq!(canonicalize("Núñez"), "NUNEZ");
/// ```
pub fn canonicalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.nfd().filter(|&c| !is_combining_mark(c)) {
        out.extend(c.to_uppercase());
    }
    out
}

/// Canonicalize raw bytes, dropping anything that is not valid UTF-8.
///
/// Undecodable sequences are skipped silently; the remaining valid chunks are
/// concatenated and canonicalized as with [`canonicalize`].
pub fn canonicalize_bytes(input: &[u8]) -> String {
    let mut decoded = String::with_capacity(input.len());
    for chunk in input.utf8_chunks() {
        decoded.push_str(chunk.valid());
    }
    canonicalize(&decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_ascii() {
        assert_eq!(canonicalize("smith"), "SMITH");
        assert_eq!(canonicalize("McDonald"), "MCDONALD");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(canonicalize("François"), "FRANCOIS");
        assert_eq!(canonicalize("Müller"), "MULLER");
        assert_eq!(canonicalize("Dvořák"), "DVORAK");
        assert_eq!(canonicalize("Ångström"), "ANGSTROM");
    }

    #[test]
    fn sharp_s_expands() {
        assert_eq!(canonicalize("Strauß"), "STRAUSS");
    }

    #[test]
    fn keeps_spaces_and_digits() {
        assert_eq!(canonicalize("van Dyke"), "VAN DYKE");
        assert_eq!(canonicalize("r2d2"), "R2D2");
    }

    #[test]
    fn empty_input() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize_bytes(b""), "");
    }

    #[test]
    fn bytes_drop_invalid_sequences() {
        assert_eq!(canonicalize_bytes(b"sm\xFFith"), "SMITH");
        assert_eq!(canonicalize_bytes(b"\xC0\x80jos\xC3\xA9"), "JOSE");
    }

    #[test]
    fn bytes_match_str_for_valid_utf8() {
        let word = "Łódź";
        assert_eq!(canonicalize_bytes(word.as_bytes()), canonicalize(word));
    }

    #[test]
    fn idempotent() {
        let once = canonicalize("Zoë Ångström");
        assert_eq!(canonicalize(&once), once);
    }
}
