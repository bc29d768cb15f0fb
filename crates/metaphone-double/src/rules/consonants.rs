// Rule groups for the consonants with short rule lists: D H L M P R T X

use super::{obviously_germanic, vowel_at};
use crate::buffer::Window;
use crate::outcome::{Fragment, RuleOutcome};

pub(super) fn d(w: &Window<'_>) -> RuleOutcome {
    if w.matches(0, "DG") {
        if w.peek_is(2, &['I', 'E', 'Y']) {
            // "edge"
            RuleOutcome::both("J", 3)
        } else {
            // "edgar"
            RuleOutcome::both("TK", 2)
        }
    } else if w.matches_any(0, &["DT", "DD"]) {
        RuleOutcome::both("T", 2)
    } else {
        RuleOutcome::both("T", 1)
    }
}

/// H is kept only at the start or after a vowel, and only before a vowel.
/// Also consumes "HH".
pub(super) fn h(w: &Window<'_>) -> RuleOutcome {
    if (w.at_start() || vowel_at(w, -1)) && vowel_at(w, 1) {
        RuleOutcome::both("H", 2)
    } else {
        RuleOutcome::silent(1)
    }
}

pub(super) fn l(w: &Window<'_>) -> RuleOutcome {
    if w.peek(1) != 'L' {
        return RuleOutcome::both("L", 1);
    }
    // Spanish "cabrillo", "gallegos"
    let spanish = (w.pos() + 2 == w.end() && w.matches_any(-1, &["ILLO", "ILLA", "ALLE"]))
        || (w.ends_with_any(&["AS", "OS", "A", "O"]) && w.matches(-1, "ALLE"));
    if spanish {
        RuleOutcome::split("L", "", 2)
    } else {
        RuleOutcome::both("L", 2)
    }
}

pub(super) fn m(w: &Window<'_>) -> RuleOutcome {
    // "dumb", "thumb", "plumber": the B is silent
    if (w.matches(-1, "UMB") && (w.pos() + 1 == w.end() || w.matches(2, "ER")))
        || w.peek(1) == 'M'
    {
        RuleOutcome::both("M", 2)
    } else {
        RuleOutcome::both("M", 1)
    }
}

pub(super) fn p(w: &Window<'_>) -> RuleOutcome {
    match w.peek(1) {
        'H' => RuleOutcome::both("F", 2),
        // also "campbell", "raspberry"
        'P' | 'B' => RuleOutcome::both("P", 2),
        _ => RuleOutcome::both("P", 1),
    }
}

pub(super) fn r(w: &Window<'_>) -> RuleOutcome {
    // French "rogier", but not "hochmeier"
    let fragment = if w.at_end()
        && !w.is_slavo_germanic()
        && w.matches(-2, "IE")
        && !w.matches_any(-4, &["ME", "MA"])
    {
        Fragment::Split("", "R")
    } else {
        Fragment::Both("R")
    };
    RuleOutcome::new(fragment, if w.peek(1) == 'R' { 2 } else { 1 })
}

pub(super) fn t(w: &Window<'_>) -> RuleOutcome {
    if w.matches(0, "TION") || w.matches_any(0, &["TIA", "TCH"]) {
        return RuleOutcome::both("X", 3);
    }

    if w.matches(0, "TH") || w.matches(0, "TTH") {
        // "thomas", "thames", or Germanic
        return if w.matches_any(2, &["OM", "AM"]) || obviously_germanic(w) {
            RuleOutcome::both("T", 2)
        } else {
            RuleOutcome::split("0", "T", 2)
        };
    }

    if w.peek_is(1, &['T', 'D']) {
        RuleOutcome::both("T", 2)
    } else {
        RuleOutcome::both("T", 1)
    }
}

pub(super) fn x(w: &Window<'_>) -> RuleOutcome {
    // French "breaux"
    let silent = w.at_end()
        && (w.matches_any(-3, &["IAU", "EAU"]) || w.matches_any(-2, &["AU", "OU"]));
    let fragment = if silent {
        Fragment::Silent
    } else {
        Fragment::Both("KS")
    };
    RuleOutcome::new(fragment, if w.peek_is(1, &['C', 'X']) { 2 } else { 1 })
}

#[cfg(test)]
mod tests {
    use crate::encode_canonical;

    fn pair(p: &str, s: &str) -> (String, String) {
        (p.to_string(), s.to_string())
    }

    // -- D --

    #[test]
    fn dg() {
        assert_eq!(encode_canonical("EDGE"), pair("AJ", ""));
        assert_eq!(encode_canonical("EDGAR"), pair("ATKR", ""));
    }

    #[test]
    fn dt_dd() {
        assert_eq!(encode_canonical("ADD"), pair("AT", ""));
        assert_eq!(encode_canonical("STADT"), pair("STT", ""));
    }

    // -- H --

    #[test]
    fn h_between_vowels() {
        assert_eq!(encode_canonical("AHOY"), pair("AH", ""));
        assert_eq!(encode_canonical("HAPPY"), pair("HP", ""));
        assert_eq!(encode_canonical("JOHN"), pair("JN", "AN"));
    }

    // -- L --

    #[test]
    fn spanish_ll() {
        assert_eq!(encode_canonical("CABRILLO"), pair("KPRL", "KPR"));
        assert_eq!(encode_canonical("GALLEGOS"), pair("KLKS", "KKS"));
        assert_eq!(encode_canonical("BELL"), pair("PL", ""));
    }

    // -- M --

    #[test]
    fn silent_b_after_m() {
        // UMB is read starting at the U before the M. Read from the letter
        // after the M it can never match, and DUMB would keep its B as TMP.
        assert_eq!(encode_canonical("DUMB"), pair("TM", ""));
        assert_eq!(encode_canonical("PLUMBER"), pair("PLMR", ""));
        assert_eq!(encode_canonical("NUMBERING"), pair("NMRNK", ""));
        assert_eq!(encode_canonical("HAMMER"), pair("HMR", ""));
    }

    // -- P --

    #[test]
    fn ph_and_pb() {
        assert_eq!(encode_canonical("PHILIP"), pair("FLP", ""));
        assert_eq!(encode_canonical("CAMPBELL"), pair("KMPL", ""));
    }

    // -- R --

    #[test]
    fn french_final_r() {
        assert_eq!(encode_canonical("ROGIER"), pair("RJ", "RKR"));
        assert_eq!(encode_canonical("HOCHMEIER"), pair("HKMR", ""));
    }

    // -- T --

    #[test]
    fn tion_tia_tch() {
        assert_eq!(encode_canonical("NATION"), pair("NXN", ""));
        assert_eq!(encode_canonical("BUTCH"), pair("PX", ""));
    }

    #[test]
    fn th() {
        assert_eq!(encode_canonical("THOMAS"), pair("TMS", ""));
        assert_eq!(encode_canonical("THUMB"), pair("0M", "TM"));
        assert_eq!(encode_canonical("MATTHEW"), pair("M0", "MTF"));
    }

    // -- X --

    #[test]
    fn x() {
        assert_eq!(encode_canonical("BREAUX"), pair("PR", ""));
        assert_eq!(encode_canonical("MAXX"), pair("MKS", ""));
        assert_eq!(encode_canonical("ALEXANDER"), pair("ALKSNTR", ""));
    }
}
