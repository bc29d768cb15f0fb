// Rule group for J: English J, Spanish J (H), and J dropped before consonants

use super::vowel_at;
use crate::buffer::Window;
use crate::outcome::{Fragment, RuleOutcome};

pub(super) fn j(w: &Window<'_>) -> RuleOutcome {
    let fragment = if w.matches(0, "JOSE") || w.starts_with("SAN ") {
        // Obviously Spanish: "jose", "san jacinto"
        if (w.at_start() && w.peek(4) == ' ') || w.starts_with("SAN ") {
            Fragment::Both("H")
        } else {
            Fragment::Split("J", "H")
        }
    } else if w.at_start() {
        // "Yankelovich" / "Jankelowicz"
        Fragment::Split("J", "A")
    } else if vowel_at(w, -1) && !w.is_slavo_germanic() && w.peek_is(1, &['A', 'O']) {
        // Spanish pronunciation of e.g. "bajador"
        Fragment::Split("J", "H")
    } else if w.at_end() {
        Fragment::Split("J", "")
    } else if !w.peek_is(1, &['L', 'T', 'K', 'S', 'N', 'M', 'B', 'Z'])
        && !w.peek_is(-1, &['S', 'K', 'L'])
    {
        Fragment::Both("J")
    } else {
        Fragment::Silent
    };

    RuleOutcome::new(fragment, if w.peek(1) == 'J' { 2 } else { 1 })
}

#[cfg(test)]
mod tests {
    use crate::encode_canonical;

    fn pair(p: &str, s: &str) -> (String, String) {
        (p.to_string(), s.to_string())
    }

    #[test]
    fn jose() {
        assert_eq!(encode_canonical("JOSE"), pair("JS", "HS"));
        assert_eq!(encode_canonical("JOSE LUIS"), pair("HSLS", ""));
    }

    #[test]
    fn san_prefix() {
        assert_eq!(encode_canonical("SAN JACINTO"), pair("SNHSNT", ""));
    }

    #[test]
    fn initial_j() {
        assert_eq!(encode_canonical("JONES"), pair("JNS", "ANS"));
        assert_eq!(encode_canonical("JANKELOWICZ"), pair("JNKLTS", "ANKLFX"));
    }

    #[test]
    fn spanish_medial_j() {
        assert_eq!(encode_canonical("BAJADOR"), pair("PJTR", "PHTR"));
    }

    #[test]
    fn final_j_only_in_primary() {
        // The secondary gets nothing for a final J, not a space: ("HJ", "H"),
        // never ("HJ", "H ").
        assert_eq!(encode_canonical("HAJ"), pair("HJ", "H"));
    }

    #[test]
    fn j_before_consonant_dropped() {
        assert_eq!(encode_canonical("SJOSTROM"), pair("SSTRM", ""));
        assert_eq!(encode_canonical("DJKSTRA"), pair("TKSTR", ""));
    }

    #[test]
    fn double_j() {
        assert_eq!(encode_canonical("HAJJI"), pair("HJ", ""));
    }
}
