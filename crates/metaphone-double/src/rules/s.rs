// Rule group for S

use metaphone_core::character::is_vowel;

use crate::buffer::Window;
use crate::outcome::RuleOutcome;

pub(super) fn s(w: &Window<'_>) -> RuleOutcome {
    // "island", "isle", "carlisle", "carlysle"
    if w.matches_any(-1, &["ISL", "YSL"]) {
        return RuleOutcome::silent(1);
    }

    if w.at_start() && w.starts_with("SUGAR") {
        return RuleOutcome::split("X", "S", 1);
    }

    if w.matches(0, "SH") {
        // Germanic
        return if w.matches_any(1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
            RuleOutcome::both("S", 2)
        } else {
            RuleOutcome::both("X", 2)
        };
    }

    // Italian and Armenian
    if w.matches_any(0, &["SIO", "SIA"]) || w.matches(0, "SIAN") {
        return if w.is_slavo_germanic() {
            RuleOutcome::both("S", 3)
        } else {
            RuleOutcome::split("S", "X", 3)
        };
    }

    // German and anglicisations: "smith" matches "schmidt", "snider" matches
    // "schneider". Also -SZ- in Slavic languages, though Hungarian reads it S.
    if (w.at_start() && w.peek_is(1, &['M', 'N', 'L', 'W'])) || w.peek(1) == 'Z' {
        let advance = if w.peek(1) == 'Z' { 2 } else { 1 };
        return RuleOutcome::split("S", "X", advance);
    }

    if w.matches(0, "SC") {
        return sc(w);
    }

    // French "resnais", "artois"
    if w.at_end() && w.matches_any(-2, &["AI", "OI"]) {
        return RuleOutcome::split("", "S", 1);
    }

    let advance = if w.peek_is(1, &['S', 'Z']) { 2 } else { 1 };
    RuleOutcome::both("S", advance)
}

/// Schlesinger's rule and the other SC- spellings.
fn sc(w: &Window<'_>) -> RuleOutcome {
    if w.peek(2) == 'H' {
        // Dutch origin: "school", "schooner"
        if w.matches_any(3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
            // "schermerhorn", "schenker"
            return if w.matches_any(3, &["ER", "EN"]) {
                RuleOutcome::split("X", "SK", 3)
            } else {
                RuleOutcome::both("SK", 3)
            };
        }
        return if w.at_start() && !is_vowel(w.letter(3)) && w.letter(3) != 'W' {
            RuleOutcome::split("X", "S", 3)
        } else {
            RuleOutcome::both("X", 3)
        };
    }

    if w.peek_is(2, &['I', 'E', 'Y']) {
        RuleOutcome::both("S", 3)
    } else {
        RuleOutcome::both("SK", 3)
    }
}
