// Rule group for C: roughly a hundred contexts collapse into K, S, X or KS

use metaphone_core::character::is_vowel;

use super::obviously_germanic;
use crate::buffer::Window;
use crate::outcome::RuleOutcome;

pub(super) fn c(w: &Window<'_>) -> RuleOutcome {
    // Germanic -ACH- ("bacher", "macher"), but not "-ACHI-" or "-ACHE-"
    if w.after_start(1)
        && !is_vowel(w.peek(-2))
        && w.matches(-1, "ACH")
        && w.peek(2) != 'I'
        && (w.peek(2) != 'E' || w.matches_any(-2, &["BACHER", "MACHER"]))
    {
        return RuleOutcome::both("K", 2);
    }

    if w.at_start() && w.starts_with("CAESAR") {
        return RuleOutcome::both("S", 2);
    }

    // Italian "chianti"
    if w.matches(0, "CHIA") {
        return RuleOutcome::both("K", 2);
    }

    if w.matches(0, "CH") {
        return ch(w);
    }

    // "czerny", but not Polish "-wicz"
    if w.matches(0, "CZ") && !w.matches(-2, "WICZ") {
        return RuleOutcome::split("S", "X", 2);
    }

    // "focaccia"
    if w.matches(1, "CIA") {
        return RuleOutcome::both("X", 3);
    }

    // Double C, except "McClellan"
    if w.matches(0, "CC") && !(w.pos() == w.start() + 1 && w.letter(0) == 'M') {
        return cc(w);
    }

    if w.matches_any(0, &["CK", "CG", "CQ"]) {
        return RuleOutcome::both("K", 2);
    }

    if w.matches_any(0, &["CI", "CE", "CY"]) {
        // Italian vs. English
        return if w.matches_any(0, &["CIO", "CIE", "CIA"]) {
            RuleOutcome::split("S", "X", 2)
        } else {
            RuleOutcome::both("S", 2)
        };
    }

    // Split names: "mac caffrey", "mac gregor"
    if w.matches_any(1, &[" C", " Q", " G"]) {
        return RuleOutcome::both("K", 3);
    }

    if w.peek_is(1, &['C', 'K', 'Q']) && !w.matches_any(1, &["CE", "CI"]) {
        return RuleOutcome::both("K", 2);
    }

    RuleOutcome::both("K", 1)
}

fn ch(w: &Window<'_>) -> RuleOutcome {
    // "michael"
    if w.after_start(0) && w.matches(0, "CHAE") {
        return RuleOutcome::split("K", "X", 2);
    }

    // Greek roots at the start: "character", "charisma", "chorus", "chemistry"
    if w.at_start()
        && (w.matches_any(1, &["HARAC", "HARIS"])
            || w.matches_any(1, &["HOR", "HYM", "HIA", "HEM"]))
        && !w.starts_with("CHORE")
    {
        return RuleOutcome::both("K", 2);
    }

    // Germanic, Greek, or otherwise CH for a KH sound
    if obviously_germanic(w)
        // "architect" but not "arch"; "orchestra", "orchid"
        || w.matches_any(-2, &["ORCHES", "ARCHIT", "ORCHID"])
        || w.peek_is(2, &['T', 'S'])
        // "wachtler", "wechsler", but not "tichner"
        || ((w.peek_is(-1, &['A', 'O', 'U', 'E']) || w.at_start())
            && w.peek_is(2, &['L', 'R', 'N', 'M', 'B', 'H', 'F', 'V', 'W']))
    {
        return RuleOutcome::both("K", 2);
    }

    if w.after_start(0) {
        if w.starts_with("MC") {
            // "mchugh"
            RuleOutcome::both("K", 2)
        } else {
            RuleOutcome::split("X", "K", 2)
        }
    } else {
        RuleOutcome::both("X", 2)
    }
}

fn cc(w: &Window<'_>) -> RuleOutcome {
    // "bellocchio" but not "bacchus"
    if w.peek_is(2, &['I', 'E', 'H']) && !w.matches(2, "HU") {
        // "accident", "accede", "succeed"
        if (w.pos() == w.start() + 1 && w.letter(0) == 'A')
            || w.matches_any(-1, &["UCCEE", "UCCES"])
        {
            RuleOutcome::both("KS", 3)
        } else {
            // "bacci", "bertucci", other Italian
            RuleOutcome::both("X", 3)
        }
    } else {
        RuleOutcome::both("K", 2)
    }
}

#[cfg(test)]
mod tests {
    use crate::encode_canonical;

    fn codes(word: &str) -> (String, String) {
        encode_canonical(word)
    }

    fn pair(p: &str, s: &str) -> (String, String) {
        (p.to_string(), s.to_string())
    }

    #[test]
    fn germanic_ach() {
        assert_eq!(codes("BACHER"), pair("PKR", ""));
        assert_eq!(codes("MACHER"), pair("MKR", ""));
    }

    #[test]
    fn caesar() {
        assert_eq!(codes("CAESAR"), pair("SSR", ""));
    }

    #[test]
    fn italian_chianti() {
        assert_eq!(codes("CHIANTI"), pair("KNT", ""));
    }

    #[test]
    fn michael() {
        assert_eq!(codes("MICHAEL"), pair("MKL", "MXL"));
    }

    #[test]
    fn greek_ch_at_start() {
        assert_eq!(codes("CHARACTER"), pair("KRKTR", ""));
        assert_eq!(codes("CHORUS"), pair("KRS", ""));
        assert_eq!(codes("CHEMISTRY"), pair("KMSTR", ""));
    }

    #[test]
    fn chore_is_not_greek() {
        assert_eq!(codes("CHORE"), pair("XR", ""));
    }

    #[test]
    fn germanic_ch() {
        assert_eq!(codes("ORCHESTRA"), pair("ARKSTR", ""));
        assert_eq!(codes("ARCHITECT"), pair("ARKTKT", ""));
        assert_eq!(codes("WECHSLER"), pair("AKSLR", "FKSLR"));
    }

    #[test]
    fn english_ch() {
        assert_eq!(codes("CHURCH"), pair("XRX", "XRK"));
        assert_eq!(codes("MCHUGH"), pair("MK", ""));
    }

    #[test]
    fn czerny() {
        assert_eq!(codes("CZERNY"), pair("SRN", "XRN"));
    }

    #[test]
    fn focaccia() {
        assert_eq!(codes("FOCACCIA"), pair("FKX", ""));
    }

    #[test]
    fn double_c() {
        assert_eq!(codes("ACCIDENT"), pair("AKSTNT", ""));
        assert_eq!(codes("SUCCEED"), pair("SKST", ""));
        assert_eq!(codes("BACCI"), pair("PX", ""));
        assert_eq!(codes("BACCHUS"), pair("PKS", ""));
        assert_eq!(codes("MCCLELLAN"), pair("MKLLN", ""));
    }

    #[test]
    fn soft_c() {
        assert_eq!(codes("CIAO"), pair("S", "X"));
        assert_eq!(codes("CELL"), pair("SL", ""));
    }

    #[test]
    fn split_mac_names() {
        assert_eq!(codes("MAC CAFFREY"), pair("MKFR", ""));
        assert_eq!(codes("MAC GREGOR"), pair("MKRKR", ""));
    }
}
