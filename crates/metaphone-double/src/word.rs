// Canonical word: the engine's immutable input

/// Letter sequences that mark a word as Slavic or Germanic in origin.
const SLAVO_GERMANIC_MARKERS: &[&str] = &["W", "K", "CZ", "WITZ"];

/// A canonicalized word and the whole-word facts the rules depend on.
///
/// The letters are taken as given; run raw input through
/// [`metaphone_core::canonicalize`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalWord {
    letters: Vec<char>,
    slavo_germanic: bool,
}

impl CanonicalWord {
    pub fn new(canonical: &str) -> Self {
        Self {
            letters: canonical.chars().collect(),
            slavo_germanic: SLAVO_GERMANIC_MARKERS
                .iter()
                .any(|m| canonical.contains(m)),
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether the word looks Slavic or Germanic (contains `W`, `K`, `CZ`
    /// or `WITZ`). Several rules switch to a harder pronunciation on this.
    pub fn is_slavo_germanic(&self) -> bool {
        self.slavo_germanic
    }
}
