// Code emitter: accumulates fragments into the primary and secondary readings

use metaphone_core::PhoneticCode;

use crate::outcome::Fragment;

#[derive(Debug, Default)]
pub(crate) struct CodeEmitter {
    primary: String,
    secondary: String,
}

impl CodeEmitter {
    pub(crate) fn push(&mut self, fragment: Fragment) {
        self.primary.push_str(fragment.primary());
        self.secondary.push_str(fragment.secondary());
    }

    /// Finish the scan. An unambiguous word reports an empty secondary.
    pub(crate) fn finish(self) -> PhoneticCode {
        PhoneticCode::new(self.primary, self.secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_readings_collapse() {
        let mut e = CodeEmitter::default();
        e.push(Fragment::Both("T"));
        e.push(Fragment::Silent);
        e.push(Fragment::Both("M"));
        let code = e.finish();
        assert_eq!(code.primary(), "TM");
        assert_eq!(code.secondary(), "");
    }

    #[test]
    fn split_fragments_diverge() {
        let mut e = CodeEmitter::default();
        e.push(Fragment::Both("S"));
        e.push(Fragment::Split("0", "T"));
        e.push(Fragment::Split("", "F"));
        let code = e.finish();
        assert_eq!(code.primary(), "S0");
        assert_eq!(code.secondary(), "STF");
    }

    #[test]
    fn empty_scan() {
        assert!(CodeEmitter::default().finish().is_empty());
    }
}
