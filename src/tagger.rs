//! The tagging collaborator boundary.
//!
//! The statistical tagger/dependency parser lives outside this crate. The
//! core consumes its contract only: given raw text, it yields per-sentence
//! token streams with position, part-of-speech tag, dependency label and
//! governor indices. The core never corrects tagger output; malformed byte
//! sequences are the adapter's responsibility to coerce to safe placeholder
//! characters before tagging.

use crate::error::Result;
use crate::token::Sentence;

/// Trait for tagging adapters.
///
/// Implementations wrap an external tagger process or model. The tagger is
/// invoked at most once per document; it is the dominant-latency step of the
/// pipeline.
pub trait Tagger: Send + Sync {
    /// Tag raw text into dependency-parsed sentences.
    fn tag(&self, text: &str) -> Result<Vec<Sentence>>;

    /// Get the adapter name/identifier.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

/// A mock tagging adapter for testing.
///
/// Returns pre-built sentences regardless of input, so pipeline and
/// discourse behavior can be exercised without an external tagger.
///
/// # Example
///
/// ```rust
/// use parlance::{MockTagger, Sentence, Token, PosTag, DepLabel, Tagger};
///
/// let tagger = MockTagger::new().with_sentences(vec![Sentence::new(vec![
///     Token::new("John", 0, PosTag::ProperNoun, DepLabel::Subject, vec![1]),
///     Token::new("slept", 1, PosTag::VerbPast, DepLabel::Root, vec![]),
/// ])]);
///
/// let sentences = tagger.tag("John slept.").unwrap();
/// assert_eq!(sentences.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    sentences: Vec<Sentence>,
}

impl MockTagger {
    /// Create a mock tagger that yields no sentences.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sentences: Vec::new(),
        }
    }

    /// Set the sentences to return on every call.
    #[must_use]
    pub fn with_sentences(mut self, sentences: Vec<Sentence>) -> Self {
        self.sentences = sentences;
        self
    }
}

impl Tagger for MockTagger {
    fn tag(&self, _text: &str) -> Result<Vec<Sentence>> {
        Ok(self.sentences.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
