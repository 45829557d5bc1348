//! The document pipeline.
//!
//! Sequences tagging → space removal → semantic annotation → document-wide
//! anaphora resolution → per-sentence compound merge, producing the final
//! token stream consumed by storage and indexing. Single-threaded per
//! document: discourse state is strictly sequential. Independent documents
//! may be processed concurrently by separate workers: the lexicon is
//! immutable shared state and each `parse_document` call owns its own
//! discourse model.

use crate::anaphora::AnaphoraResolver;
use crate::compound::merge_compounds;
use crate::error::{Error, Result};
use crate::lexicon::SemanticLexicon;
use crate::tagger::Tagger;
use crate::token::Sentence;

/// The text parser: tags a document and normalizes it into a
/// discourse-resolved, compound-merged token stream.
///
/// # Example
///
/// ```rust
/// use parlance::{MockTagger, Parser, Sentence, Token, PosTag, DepLabel};
///
/// let tagger = MockTagger::new().with_sentences(vec![Sentence::new(vec![
///     Token::new("John", 0, PosTag::ProperNoun, DepLabel::Subject, vec![1]),
///     Token::new("slept", 1, PosTag::VerbPast, DepLabel::Root, vec![]),
/// ])]);
///
/// let parser = Parser::new(tagger);
/// let sentences = parser.parse_document("John slept.").unwrap();
/// assert_eq!(sentences.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Parser<T: Tagger> {
    tagger: T,
    lexicon: SemanticLexicon,
    resolver: AnaphoraResolver,
}

impl<T: Tagger> Parser<T> {
    /// Create a parser with an empty lexicon and the default resolver.
    #[must_use]
    pub fn new(tagger: T) -> Self {
        Self {
            tagger,
            lexicon: SemanticLexicon::new(),
            resolver: AnaphoraResolver::default(),
        }
    }

    /// Set the semantic lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: SemanticLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Set the anaphora resolver configuration.
    #[must_use]
    pub fn with_resolver(mut self, resolver: AnaphoraResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The semantic lexicon in use.
    #[must_use]
    pub fn lexicon(&self) -> &SemanticLexicon {
        &self.lexicon
    }

    /// Parse a document into post-resolution, post-merge sentences.
    ///
    /// Empty or whitespace-only input short-circuits to an empty sentence
    /// list before the tagger runs. The tagger is invoked at most once.
    /// A tagger output that breaks the adapter contract is an
    /// unrecoverable [`Error::ContractViolation`].
    pub fn parse_document(&self, text: &str) -> Result<Vec<Sentence>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tagged = self.tagger.tag(text)?;
        validate_contract(&tagged)?;

        let mut sentences: Vec<Sentence> = tagged
            .into_iter()
            .map(|s| self.annotate_semantics(remove_spaces(s)))
            .collect();

        self.resolver.resolve(&mut sentences);

        let merged: Vec<Sentence> = sentences
            .into_iter()
            .map(|s| Sentence::new(merge_compounds(&s.tokens, Some(&self.lexicon))))
            .collect();
        log::debug!("parsed document into {} sentences", merged.len());
        Ok(merged)
    }

    /// Populate semantic categories for noun-tagged tokens present in the
    /// lexicon. Other tokens keep an empty category.
    fn annotate_semantics(&self, mut sentence: Sentence) -> Sentence {
        for token in &mut sentence.tokens {
            if token.semantic.is_empty() && token.tag.is_noun() {
                if let Some(category) = self.lexicon.lookup(&token.text) {
                    token.semantic = category.to_string();
                }
            }
        }
        sentence
    }
}

/// Drop pure-whitespace tokens from a sentence.
fn remove_spaces(sentence: Sentence) -> Sentence {
    Sentence::new(
        sentence
            .tokens
            .into_iter()
            .filter(|t| !t.is_whitespace())
            .collect(),
    )
}

/// Validate the tagging adapter's output contract: token indices strictly
/// increasing within each sentence, every ancestor pointing at another
/// token of the same sentence. A violation indicates an upstream bug, not
/// a linguistic edge case, and is never retried.
fn validate_contract(sentences: &[Sentence]) -> Result<()> {
    for (sentence_idx, sentence) in sentences.iter().enumerate() {
        let mut previous: Option<usize> = None;
        for token in &sentence.tokens {
            if let Some(prev) = previous {
                if token.index <= prev {
                    return Err(Error::contract_violation(format!(
                        "token indices not increasing in sentence {sentence_idx}: {} after {prev}",
                        token.index
                    )));
                }
            }
            previous = Some(token.index);
        }

        for token in &sentence.tokens {
            for &ancestor in &token.ancestors {
                if ancestor == token.index {
                    return Err(Error::contract_violation(format!(
                        "token {} in sentence {sentence_idx} lists itself as ancestor",
                        token.index
                    )));
                }
                if sentence.token_at(ancestor).is_none() {
                    return Err(Error::contract_violation(format!(
                        "ancestor {ancestor} of token {} points outside sentence {sentence_idx}",
                        token.index
                    )));
                }
            }
        }
    }
    Ok(())
}
