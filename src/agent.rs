//! The fact-teaching flow.
//!
//! Every stored fact passes through the classifier gates: a question or an
//! imperative is a conversational turn, a verbless sentence carries
//! nothing to learn, and a sentence with at most one index-worthy token is
//! too thin to ever find again. Gate outcomes are data, not errors; a
//! question is a normal turn, not a failure.

use uuid::Uuid;

use crate::anaphora::resolve_first_and_second_person;
use crate::classify::{has_verb, is_imperative, is_question};
use crate::error::Result;
use crate::filter::remove_undesirables;
use crate::pipeline::Parser;
use crate::store::Store;
use crate::tagger::Tagger;

/// Maximum length of a teachable text, in bytes.
pub const MAX_TEACH_BYTES: usize = 255;

/// Default display name the agent substitutes for second-person pronouns.
pub const DEFAULT_AGENT_NAME: &str = "Sage";

/// Outcome of one teaching attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TeachOutcome {
    /// The fact was stored under this id.
    Stored {
        /// Identifier of the stored factoid.
        id: Uuid,
    },
    /// Empty or whitespace-only input; the pipeline never ran.
    Empty,
    /// Input exceeded [`MAX_TEACH_BYTES`].
    TextTooLarge,
    /// More than one sentence; facts are taught one sentence at a time.
    MultipleSentences,
    /// The sentence is a question, not information.
    Question,
    /// The sentence is a request or command.
    Imperative,
    /// The sentence has no verb.
    NoVerb,
    /// Too few index-worthy tokens survive the undesirable filter.
    TooLittleInformation,
}

impl TeachOutcome {
    /// Did this attempt store a fact?
    #[must_use]
    pub const fn is_stored(&self) -> bool {
        matches!(self, TeachOutcome::Stored { .. })
    }

    /// A conversational reply describing the outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            TeachOutcome::Stored { id } => {
                format!("ok, got that and stored it away as factoid \"{id}\".")
            }
            TeachOutcome::Empty => {
                "Please teach me something, this looks like an empty sentence.".to_string()
            }
            TeachOutcome::TextTooLarge => "Text message empty or too large.".to_string(),
            TeachOutcome::MultipleSentences => {
                "Teach me using simple single sentences please.".to_string()
            }
            TeachOutcome::Question => {
                "That looks like a question, not something I can learn from.".to_string()
            }
            TeachOutcome::Imperative => {
                "That looks like a request or a command rather than information.".to_string()
            }
            TeachOutcome::NoVerb => {
                "I don't understand your statement, can you please change it?".to_string()
            }
            TeachOutcome::TooLittleInformation => {
                "There is something wrong with this sentence, please rephrase it.".to_string()
            }
        }
    }
}

/// A conversational knowledge agent: parses taught text through the
/// pipeline, gates it on the sentence classifiers, and stores what
/// survives.
///
/// # Example
///
/// ```rust,ignore
/// use parlance::{KnowledgeAgent, MemoryStore, Parser};
///
/// let mut agent = KnowledgeAgent::new(parser, MemoryStore::new());
/// let outcome = agent.teach("alice", "I like grilled fish")?;
/// assert!(outcome.is_stored());
/// ```
pub struct KnowledgeAgent<T: Tagger, S: Store> {
    parser: Parser<T>,
    store: S,
    name: String,
}

impl<T: Tagger, S: Store> KnowledgeAgent<T, S> {
    /// Create an agent with the default display name.
    #[must_use]
    pub fn new(parser: Parser<T>, store: S) -> Self {
        Self {
            parser,
            store,
            name: DEFAULT_AGENT_NAME.to_string(),
        }
    }

    /// Set the agent's display name, substituted for second-person
    /// pronouns in taught facts.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Teach the agent one fact on behalf of `user`.
    ///
    /// The user's name replaces first-person pronouns and the agent's name
    /// replaces second-person pronouns before the gates run, so "I like
    /// fish" stores who actually said it.
    pub fn teach(&mut self, user: &str, text: &str) -> Result<TeachOutcome> {
        if text.trim().is_empty() {
            return Ok(TeachOutcome::Empty);
        }
        if text.len() >= MAX_TEACH_BYTES {
            return Ok(TeachOutcome::TextTooLarge);
        }
        log::info!("teach[{user}]: {text}");

        let sentences = self.parser.parse_document(text)?;
        let mut sentences = sentences.into_iter();
        let Some(sentence) = sentences.next() else {
            return Ok(TeachOutcome::Empty);
        };
        if sentences.next().is_some() {
            return Ok(TeachOutcome::MultipleSentences);
        }

        let mut tokens = sentence.tokens;
        resolve_first_and_second_person(user, &self.name, &mut tokens);

        if is_question(&tokens) {
            return Ok(TeachOutcome::Question);
        }
        if is_imperative(&tokens) {
            return Ok(TeachOutcome::Imperative);
        }
        if !has_verb(&tokens) {
            return Ok(TeachOutcome::NoVerb);
        }
        if remove_undesirables(&tokens).len() <= 1 {
            return Ok(TeachOutcome::TooLittleInformation);
        }

        let id = Uuid::new_v4();
        self.store.store(id, &tokens, user)?;
        log::info!("stored factoid {id} for {user}");
        Ok(TeachOutcome::Stored { id })
    }

    /// Remove a previously taught factoid owned by `user`.
    pub fn forget(&mut self, user: &str, id: Uuid) -> Result<()> {
        log::info!("forget[{user}]: {id}");
        self.store.delete(id, user)
    }
}
