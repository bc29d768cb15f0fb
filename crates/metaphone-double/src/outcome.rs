// Rule outcome: what one rule evaluation contributes to the codes

use std::fmt;

/// Code text appended to the two readings by one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Nothing is appended to either reading.
    Silent,
    /// The same code is appended to both readings.
    Both(&'static str),
    /// Primary and secondary readings diverge. Either side may be `""`,
    /// meaning the letter is dropped from that reading.
    Split(&'static str, &'static str),
}

impl Fragment {
    /// The text appended to the primary reading.
    pub fn primary(self) -> &'static str {
        match self {
            Fragment::Silent => "",
            Fragment::Both(code) | Fragment::Split(code, _) => code,
        }
    }

    /// The text appended to the secondary reading.
    pub fn secondary(self) -> &'static str {
        match self {
            Fragment::Silent => "",
            Fragment::Both(code) | Fragment::Split(_, code) => code,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |s: &str| if s.is_empty() { "_".to_string() } else { s.to_string() };
        match self {
            Fragment::Silent => f.write_str("-"),
            Fragment::Both(code) => f.write_str(code),
            Fragment::Split(p, s) => write!(f, "{}|{}", show(p), show(s)),
        }
    }
}

/// The result of evaluating one rule group at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleOutcome {
    pub fragment: Fragment,
    /// Buffer positions consumed. Always at least 1.
    pub advance: usize,
}

impl RuleOutcome {
    pub const fn new(fragment: Fragment, advance: usize) -> Self {
        debug_assert!(advance >= 1);
        Self { fragment, advance }
    }

    pub const fn both(code: &'static str, advance: usize) -> Self {
        Self::new(Fragment::Both(code), advance)
    }

    pub const fn split(primary: &'static str, secondary: &'static str, advance: usize) -> Self {
        Self::new(Fragment::Split(primary, secondary), advance)
    }

    pub const fn silent(advance: usize) -> Self {
        Self::new(Fragment::Silent, advance)
    }
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{}", self.fragment, self.advance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_sides() {
        assert_eq!(Fragment::Both("K").primary(), "K");
        assert_eq!(Fragment::Both("K").secondary(), "K");
        assert_eq!(Fragment::Split("", "R").primary(), "");
        assert_eq!(Fragment::Split("", "R").secondary(), "R");
        assert_eq!(Fragment::Silent.secondary(), "");
    }

    #[test]
    fn display() {
        assert_eq!(RuleOutcome::both("KS", 3).to_string(), "KS +3");
        assert_eq!(RuleOutcome::split("J", "", 1).to_string(), "J|_ +1");
        assert_eq!(RuleOutcome::silent(2).to_string(), "- +2");
    }
}
