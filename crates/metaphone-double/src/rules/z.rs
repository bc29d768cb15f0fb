// Rule group for Z

use crate::buffer::Window;
use crate::outcome::{Fragment, RuleOutcome};

pub(super) fn z(w: &Window<'_>) -> RuleOutcome {
    // Chinese pinyin: "zhao"
    if w.peek(1) == 'H' {
        return RuleOutcome::both("J", 2);
    }

    let fragment = if w.matches_any(1, &["ZO", "ZI", "ZA"])
        || (w.is_slavo_germanic() && w.after_start(0) && w.peek(-1) != 'T')
    {
        Fragment::Split("S", "TS")
    } else {
        Fragment::Both("S")
    };

    RuleOutcome::new(fragment, if w.peek(1) == 'Z' { 2 } else { 1 })
}
