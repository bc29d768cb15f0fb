// Encoder: drives the cursor over the padded buffer and collects the codes
//
// One scan per call. The scan owns the cursor and the accumulators; rules only
// ever see a read-only `Window` and hand back a `RuleOutcome`, which the scan
// applies. Nothing is shared between calls.

use metaphone_core::{PhoneticCode, canonicalize, canonicalize_bytes};

use crate::buffer::{PaddedBuffer, Window};
use crate::emitter::CodeEmitter;
use crate::outcome::RuleOutcome;
use crate::rules;
use crate::word::CanonicalWord;

/// Encoder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Truncate both codes to at most this many characters. `None` (the
    /// default) keeps the full codes.
    pub max_length: Option<usize>,
}

/// One iteration of the scan, as reported by [`Encoder::trace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    /// Cursor position in the padded buffer.
    pub position: usize,
    /// Character under the cursor.
    pub letter: char,
    /// What the rule at this position emitted and how far it moved the cursor.
    pub outcome: RuleOutcome,
}

/// Double Metaphone encoder.
///
/// Stateless apart from its options: one encoder can be shared freely
/// between threads.
///
/// ```
/// use metaphone_double::{Encoder, EncoderOptions};
///
/// let encoder = Encoder::new(EncoderOptions { max_length: Some(4) });
/// let code = encoder.encode("Schwarzenegger");
/// assert!(code.primary().len() <= 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncoderOptions,
}

impl Encoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Canonicalize and encode a word.
    pub fn encode(&self, word: &str) -> PhoneticCode {
        self.encode_canonical(&canonicalize(word))
    }

    /// Encode raw bytes. Invalid UTF-8 is dropped before encoding.
    pub fn encode_bytes(&self, word: &[u8]) -> PhoneticCode {
        self.encode_canonical(&canonicalize_bytes(word))
    }

    /// Encode a word that is already canonical (uppercase, no diacritics).
    pub fn encode_canonical(&self, word: &str) -> PhoneticCode {
        let canonical = CanonicalWord::new(word);
        let code = Scan::new(&canonical).run(|_| {});
        let code = match self.options.max_length {
            Some(max) => code.truncated(max),
            None => code,
        };
        log::debug!("encoded {word:?} as {code}");
        code
    }

    /// Canonicalize a word and return every scan step, word-start rules
    /// included.
    pub fn trace(&self, word: &str) -> Vec<ScanStep> {
        self.trace_canonical(&canonicalize(word))
    }

    pub fn trace_canonical(&self, word: &str) -> Vec<ScanStep> {
        let canonical = CanonicalWord::new(word);
        let mut steps = Vec::with_capacity(canonical.len());
        Scan::new(&canonical).run(|step| steps.push(step));
        steps
    }
}

/// Per-call scan state.
struct Scan {
    buffer: PaddedBuffer,
    slavo_germanic: bool,
    cursor: usize,
    emitter: CodeEmitter,
}

impl Scan {
    fn new(word: &CanonicalWord) -> Self {
        let buffer = PaddedBuffer::new(word);
        let cursor = buffer.start_index();
        Self {
            buffer,
            slavo_germanic: word.is_slavo_germanic(),
            cursor,
            emitter: CodeEmitter::default(),
        }
    }

    fn window(&self) -> Window<'_> {
        Window::new(&self.buffer, self.cursor, self.slavo_germanic)
    }

    fn run(mut self, mut observe: impl FnMut(ScanStep)) -> PhoneticCode {
        if self.buffer.word_len() == 0 {
            return self.emitter.finish();
        }

        let silent = rules::silent_start(&self.window());
        if let Some(outcome) = silent {
            self.apply(outcome, &mut observe);
        }
        let initial_x = rules::initial_x(&self.window());
        if let Some(outcome) = initial_x {
            self.apply(outcome, &mut observe);
        }

        while self.cursor <= self.buffer.end_index() {
            let outcome = rules::evaluate(&self.window());
            self.apply(outcome, &mut observe);
        }

        self.emitter.finish()
    }

    fn apply(&mut self, outcome: RuleOutcome, observe: &mut impl FnMut(ScanStep)) {
        let step = ScanStep {
            position: self.cursor,
            letter: self.buffer.get(self.cursor as isize),
            outcome,
        };
        log::trace!("{} {:?} -> {}", step.position, step.letter, step.outcome);
        observe(step);
        self.emitter.push(outcome.fragment);
        self.cursor += outcome.advance;
    }
}
