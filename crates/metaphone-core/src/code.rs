// Phonetic code pair and match levels

use std::fmt;

/// The result of encoding one word: a primary code and an optional secondary.
///
/// The secondary is stored empty when it would equal the primary, so a pair
/// never carries the same code twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhoneticCode {
    primary: String,
    secondary: String,
}

impl PhoneticCode {
    /// Build a code pair, collapsing the secondary when it equals the primary.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        let primary = primary.into();
        let mut secondary = secondary.into();
        if secondary == primary {
            secondary.clear();
        }
        Self { primary, secondary }
    }

    /// The primary (most likely) reading.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The secondary reading, or `""` when there is only one reading.
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// The secondary reading if it differs from the primary.
    pub fn alternate(&self) -> Option<&str> {
        if self.secondary.is_empty() {
            None
        } else {
            Some(&self.secondary)
        }
    }

    /// True when both readings are empty (no encodable letters).
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Iterate over the distinct, non-empty codes: the primary first, then the
    /// alternate if there is one.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        [self.primary.as_str(), self.secondary.as_str()]
            .into_iter()
            .filter(|c| !c.is_empty())
    }

    /// Truncate both readings to at most `max_len` characters.
    ///
    /// Readings that only differed past the cut collapse into one.
    pub fn truncated(&self, max_len: usize) -> Self {
        let cut = |s: &str| s.chars().take(max_len).collect::<String>();
        Self::new(cut(&self.primary), cut(&self.secondary))
    }

    /// Compare two code pairs.
    ///
    /// | level | condition |
    /// |-------|-----------|
    /// | `Strong` | primaries are equal |
    /// | `Normal` | one primary equals the other's secondary |
    /// | `Minimal` | secondaries are equal |
    /// | `NoMatch` | none of the above |
    ///
    /// Empty codes never match anything.
    pub fn match_level(&self, other: &PhoneticCode) -> MatchLevel {
        let eq = |a: &str, b: &str| !a.is_empty() && a == b;
        if eq(&self.primary, &other.primary) {
            MatchLevel::Strong
        } else if eq(&self.primary, &other.secondary) || eq(&self.secondary, &other.primary) {
            MatchLevel::Normal
        } else if eq(&self.secondary, &other.secondary) {
            MatchLevel::Minimal
        } else {
            MatchLevel::NoMatch
        }
    }

    /// Consume the pair into `(primary, secondary)`.
    pub fn into_parts(self) -> (String, String) {
        (self.primary, self.secondary)
    }
}

impl fmt::Display for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alternate() {
            Some(alt) => write!(f, "{}/{}", self.primary, alt),
            None => f.write_str(&self.primary),
        }
    }
}

impl From<PhoneticCode> for (String, String) {
    fn from(code: PhoneticCode) -> Self {
        code.into_parts()
    }
}

/// How strongly two code pairs overlap, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchLevel {
    Strong,
    Normal,
    Minimal,
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NoMatch,
}

impl MatchLevel {
    /// True for every level except [`MatchLevel::NoMatch`].
    pub fn is_match(self) -> bool {
        self != MatchLevel::NoMatch
    }

    /// Lowercase name used in CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchLevel::Strong => "strong",
            MatchLevel::Normal => "normal",
            MatchLevel::Minimal => "minimal",
            MatchLevel::NoMatch => "none",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
