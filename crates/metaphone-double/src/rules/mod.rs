//! Letter-keyed rule groups.
//!
//! [`evaluate`] dispatches on the letter under the cursor. Inside a group the
//! conditions are checked top to bottom and the first one that holds decides
//! the outcome, so the order of the `if` chains below is part of the
//! algorithm. Every group ends in a default outcome; characters outside all
//! groups are consumed silently.
//!
//! The heavy groups live in their own modules:
//!
//! - [`c`] -- Germanic, Italian, Greek and Slavic readings of `C`
//! - [`g`] -- `GH`, `GN`, soft/hard `G`
//! - [`j`] -- Spanish `J`
//! - [`s`] -- `SH`, `SC`, `SIO`, anglicised Germanic `S`
//! - [`w`] -- Germanic and Polish `W`
//! - [`z`] -- pinyin and Slavic `Z`
//!
//! Everything else is in [`consonants`].

mod c;
mod consonants;
mod g;
mod j;
mod s;
mod w;
mod z;

use metaphone_core::character::is_vowel;

use crate::buffer::Window;
use crate::outcome::RuleOutcome;

/// Two-letter openings whose first letter is not pronounced.
pub const SILENT_STARTERS: &[&str] = &["GN", "KN", "PN", "WR", "PS"];

/// Evaluate the rule group for the letter under the cursor.
pub fn evaluate(w: &Window<'_>) -> RuleOutcome {
    match w.current() {
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => vowel(w),
        'B' => doubled(w, 'B', "P"),
        'C' => c::c(w),
        // Reachable only when raw text bypasses canonicalization.
        '\u{00C7}' => RuleOutcome::both("S", 1),
        'D' => consonants::d(w),
        'F' => doubled(w, 'F', "F"),
        'G' => g::g(w),
        'H' => consonants::h(w),
        'J' => j::j(w),
        'K' => doubled(w, 'K', "K"),
        'L' => consonants::l(w),
        'M' => consonants::m(w),
        'N' => doubled(w, 'N', "N"),
        '\u{00D1}' => RuleOutcome::both("N", 1),
        'P' => consonants::p(w),
        'Q' => doubled(w, 'Q', "K"),
        'R' => consonants::r(w),
        'S' => s::s(w),
        'T' => consonants::t(w),
        'V' => doubled(w, 'V', "F"),
        'W' => w::w(w),
        'X' => consonants::x(w),
        'Z' => z::z(w),
        _ => RuleOutcome::silent(1),
    }
}

/// Word-start rule: skip the silent first letter of `GN-`, `KN-`, `PN-`,
/// `WR-` and `PS-`.
pub fn silent_start(w: &Window<'_>) -> Option<RuleOutcome> {
    w.starts_with_any(SILENT_STARTERS).then_some(RuleOutcome::silent(1))
}

/// Word-start rule: initial `X` sounds like `Z`, which codes as `S`
/// ("Xavier").
pub fn initial_x(w: &Window<'_>) -> Option<RuleOutcome> {
    (w.letter(0) == 'X').then_some(RuleOutcome::both("S", 1))
}

/// Vowels only count at the start of the word, where they all code as `A`.
fn vowel(w: &Window<'_>) -> RuleOutcome {
    if w.at_start() {
        RuleOutcome::both("A", 1)
    } else {
        RuleOutcome::silent(1)
    }
}

/// A letter whose double collapses into one code.
fn doubled(w: &Window<'_>, letter: char, code: &'static str) -> RuleOutcome {
    RuleOutcome::both(code, if w.peek(1) == letter { 2 } else { 1 })
}

/// Shared by several groups: the character at `offset` is a vowel.
fn vowel_at(w: &Window<'_>, offset: isize) -> bool {
    is_vowel(w.peek(offset))
}

/// Germanic words spelled with a `VAN`/`VON` particle or starting with `SCH`.
fn obviously_germanic(w: &Window<'_>) -> bool {
    w.starts_with_any(&["VAN ", "VON "]) || w.starts_with("SCH")
}
