//! # parlance
//!
//! Linguistic analysis core for a conversational knowledge agent.
//!
//! Ingests free text, normalizes it linguistically, and either stores it
//! as a fact or classifies it as a question/command. The hard core is the
//! pipeline that turns tagged, dependency-parsed sentences into a
//! discourse-resolved, normalized token stream:
//!
//! - **Anaphora resolution**: salience-weighted pronoun resolution over a
//!   per-document discourse model
//! - **Compound-noun merging**: greedy longest-match merging of adjacent
//!   noun tokens and multi-word lexicon entries
//! - **Sentence classifiers**: is-question / is-imperative / has-verb,
//!   gating every stored fact
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │ Tagging adapter (external collaborator)            │
//! │ raw text → tagged, dependency-parsed sentences     │
//! ├────────────────────────────────────────────────────┤
//! │ Space removal + semantic annotation                │
//! ├────────────────────────────────────────────────────┤
//! │ Anaphora resolution (document-wide, in order)      │
//! ├────────────────────────────────────────────────────┤
//! │ Compound-noun merge (per sentence)                 │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use parlance::{MockTagger, Parser, Sentence, Token, PosTag, DepLabel};
//!
//! let tagger = MockTagger::new().with_sentences(vec![
//!     Sentence::new(vec![
//!         Token::new("Mary", 0, PosTag::ProperNoun, DepLabel::Subject, vec![1]),
//!         Token::new("sang", 1, PosTag::VerbPast, DepLabel::Root, vec![]),
//!     ]),
//!     Sentence::new(vec![
//!         Token::new("She", 0, PosTag::Pronoun, DepLabel::Subject, vec![1]),
//!         Token::new("smiled", 1, PosTag::VerbPast, DepLabel::Root, vec![]),
//!     ]),
//! ]);
//!
//! let parser = Parser::new(tagger);
//! let sentences = parser.parse_document("Mary sang. She smiled.").unwrap();
//! assert_eq!(sentences[1].tokens[0].text, "Mary");
//! ```
//!
//! ## Design
//!
//! - **Closed tag domain**: free-form tagger strings map to [`PosTag`] /
//!   [`DepLabel`] at the adapter boundary; the core matches on variants,
//!   never raw strings.
//! - **Arena-style links**: governor links are integer indices into an
//!   immutable sentence, never live references.
//! - **Immutable shared state**: the stopword set and semantic lexicon
//!   load once and are read-only thereafter; document workers share them
//!   freely.
//! - **Owned discourse state**: the discourse model is scoped to one
//!   resolution call and never crosses documents.

#![warn(missing_docs)]

pub mod agent;
pub mod anaphora;
pub mod classify;
pub mod compound;
mod error;
pub mod filter;
pub mod lexicon;
pub mod pipeline;
pub mod store;
pub mod tagger;
mod token;

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use parlance::prelude::*;
    //!
    //! let parser = Parser::new(MockTagger::new());
    //! assert!(parser.parse_document("").unwrap().is_empty());
    //! ```
    pub use crate::agent::{KnowledgeAgent, TeachOutcome};
    pub use crate::anaphora::{resolve_pronouns, AnaphoraResolver};
    pub use crate::classify::{has_verb, is_imperative, is_question};
    pub use crate::compound::merge_compounds;
    pub use crate::error::{Error, Result};
    pub use crate::filter::{is_undesirable, remove_undesirables};
    pub use crate::lexicon::SemanticLexicon;
    pub use crate::pipeline::Parser;
    pub use crate::store::{MemoryStore, Store};
    pub use crate::tagger::{MockTagger, Tagger};
    pub use crate::token::{DepLabel, PosTag, Sentence, Token, TokenRef};
}

// Re-exports
pub use agent::{KnowledgeAgent, TeachOutcome, DEFAULT_AGENT_NAME, MAX_TEACH_BYTES};
pub use anaphora::{
    resolve_first_and_second_person, resolve_pronouns, AnaphoraResolver, DISCOURSE_WINDOW,
};
pub use classify::{has_verb, is_imperative, is_question};
pub use compound::merge_compounds;
pub use error::{Error, Result};
pub use filter::{is_undesirable, remove_undesirables};
pub use lexicon::SemanticLexicon;
pub use pipeline::Parser;
pub use store::{MemoryStore, Store};
pub use tagger::{MockTagger, Tagger};
pub use token::{DepLabel, GrammaticalRole, PosTag, Sentence, Token, TokenRef};
