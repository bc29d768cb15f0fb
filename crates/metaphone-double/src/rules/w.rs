// Rule group for W

use super::vowel_at;
use crate::buffer::Window;
use crate::outcome::RuleOutcome;

pub(super) fn w(w: &Window<'_>) -> RuleOutcome {
    // can also be in the middle of a word
    if w.matches(0, "WR") {
        return RuleOutcome::both("R", 2);
    }

    if w.at_start() && (vowel_at(w, 1) || w.matches(0, "WH")) {
        // "Wasserman" should match "Vasserman"
        return if vowel_at(w, 1) {
            RuleOutcome::split("A", "F", 1)
        } else {
            RuleOutcome::both("A", 1)
        };
    }

    // "Arnow" should match "Arnoff"
    if (w.at_end() && vowel_at(w, -1))
        || w.matches_any(-1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || w.starts_with("SCH")
    {
        return RuleOutcome::split("", "F", 1);
    }

    // Polish "filipowicz"
    if w.matches_any(0, &["WICZ", "WITZ"]) {
        return RuleOutcome::split("TS", "FX", 4);
    }

    RuleOutcome::silent(1)
}
