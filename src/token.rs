//! Token and sentence structures for the linguistic pipeline.
//!
//! Free-form tagger strings are mapped at the adapter boundary into the
//! closed [`PosTag`] / [`DepLabel`] domains; everything downstream matches
//! on enum variants, never on raw strings. Ancestor links are stored as
//! integer indices into the owning sentence's token sequence, never as
//! live references; a sentence, once produced, is only mutated by the
//! controlled pronoun-substitution step.

use serde::{Deserialize, Serialize};

/// Part-of-speech category (Penn tagset subset consumed by the core).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PosTag {
    /// Singular or mass noun (NN)
    Noun,
    /// Plural noun (NNS)
    NounPlural,
    /// Singular proper noun (NNP)
    ProperNoun,
    /// Plural proper noun (NNPS)
    ProperNounPlural,
    /// Personal pronoun (PRP)
    Pronoun,
    /// Possessive pronoun (PRP$)
    PossessivePronoun,
    /// Verb, base form (VB)
    VerbBase,
    /// Verb, past tense (VBD)
    VerbPast,
    /// Verb, gerund or present participle (VBG)
    VerbGerund,
    /// Verb, past participle (VBN)
    VerbPastParticiple,
    /// Verb, non-3rd-person present (VBP)
    VerbPresent,
    /// Verb, 3rd-person singular present (VBZ)
    VerbThirdPerson,
    /// Wh-determiner (WDT)
    WhDeterminer,
    /// Wh-pronoun (WP)
    WhPronoun,
    /// Determiner (DT)
    Determiner,
    /// Any other tag, kept verbatim
    Other(String),
}

impl PosTag {
    /// Convert to the standard Penn label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Pronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::VerbBase => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbPastParticiple => "VBN",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbThirdPerson => "VBZ",
            PosTag::WhDeterminer => "WDT",
            PosTag::WhPronoun => "WP",
            PosTag::Determiner => "DT",
            PosTag::Other(s) => s.as_str(),
        }
    }

    /// Parse from a Penn label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "NN" => PosTag::Noun,
            "NNS" => PosTag::NounPlural,
            "NNP" => PosTag::ProperNoun,
            "NNPS" => PosTag::ProperNounPlural,
            "PRP" => PosTag::Pronoun,
            "PRP$" => PosTag::PossessivePronoun,
            "VB" => PosTag::VerbBase,
            "VBD" => PosTag::VerbPast,
            "VBG" => PosTag::VerbGerund,
            "VBN" => PosTag::VerbPastParticiple,
            "VBP" => PosTag::VerbPresent,
            "VBZ" => PosTag::VerbThirdPerson,
            "WDT" => PosTag::WhDeterminer,
            "WP" => PosTag::WhPronoun,
            "DT" => PosTag::Determiner,
            other => PosTag::Other(other.to_string()),
        }
    }

    /// Is this any noun form (NN, NNS, NNP, NNPS)?
    #[must_use]
    pub const fn is_noun(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::NounPlural | PosTag::ProperNoun | PosTag::ProperNounPlural
        )
    }

    /// Is this a plural noun form (NNS, NNPS)?
    #[must_use]
    pub const fn is_plural_noun(&self) -> bool {
        matches!(self, PosTag::NounPlural | PosTag::ProperNounPlural)
    }

    /// Is this a proper noun form (NNP, NNPS)?
    #[must_use]
    pub const fn is_proper_noun(&self) -> bool {
        matches!(self, PosTag::ProperNoun | PosTag::ProperNounPlural)
    }

    /// Is this any verb form (VB, VBD, VBG, VBN, VBP, VBZ)?
    #[must_use]
    pub const fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VerbBase
                | PosTag::VerbPast
                | PosTag::VerbGerund
                | PosTag::VerbPastParticiple
                | PosTag::VerbPresent
                | PosTag::VerbThirdPerson
        )
    }

    /// Is this a pronoun form (PRP, PRP$)?
    #[must_use]
    pub const fn is_pronoun(&self) -> bool {
        matches!(self, PosTag::Pronoun | PosTag::PossessivePronoun)
    }

    /// Is this a wh-word (WDT, WP)?
    #[must_use]
    pub const fn is_wh(&self) -> bool {
        matches!(self, PosTag::WhDeterminer | PosTag::WhPronoun)
    }
}

impl From<String> for PosTag {
    fn from(label: String) -> Self {
        PosTag::from_label(&label)
    }
}

impl From<PosTag> for String {
    fn from(tag: PosTag) -> Self {
        tag.as_label().to_string()
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Grammatical relation of a token to its governor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DepLabel {
    /// Nominal subject (nsubj)
    Subject,
    /// Passive nominal subject (nsubjpass)
    PassiveSubject,
    /// Direct object (dobj)
    DirectObject,
    /// Indirect object (iobj, dative)
    IndirectObject,
    /// Sentence root (ROOT)
    Root,
    /// Any other relation, kept verbatim
    Other(String),
}

impl DepLabel {
    /// Convert to the standard dependency label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            DepLabel::Subject => "nsubj",
            DepLabel::PassiveSubject => "nsubjpass",
            DepLabel::DirectObject => "dobj",
            DepLabel::IndirectObject => "iobj",
            DepLabel::Root => "ROOT",
            DepLabel::Other(s) => s.as_str(),
        }
    }

    /// Parse from a dependency label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "nsubj" => DepLabel::Subject,
            "nsubjpass" => DepLabel::PassiveSubject,
            "dobj" | "obj" => DepLabel::DirectObject,
            "iobj" | "dative" => DepLabel::IndirectObject,
            "ROOT" | "root" => DepLabel::Root,
            other => DepLabel::Other(other.to_string()),
        }
    }

    /// The grammatical role this relation fills, for salience ranking.
    #[must_use]
    pub const fn role(&self) -> GrammaticalRole {
        match self {
            DepLabel::Subject | DepLabel::PassiveSubject => GrammaticalRole::Subject,
            DepLabel::DirectObject => GrammaticalRole::DirectObject,
            DepLabel::IndirectObject => GrammaticalRole::IndirectObject,
            DepLabel::Root | DepLabel::Other(_) => GrammaticalRole::Other,
        }
    }
}

impl From<String> for DepLabel {
    fn from(label: String) -> Self {
        DepLabel::from_label(&label)
    }
}

impl From<DepLabel> for String {
    fn from(dep: DepLabel) -> Self {
        dep.as_label().to_string()
    }
}

impl std::fmt::Display for DepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Grammatical role of a mention, ordered by discourse prominence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalRole {
    /// Subject of its clause
    Subject,
    /// Direct object
    DirectObject,
    /// Indirect object
    IndirectObject,
    /// Anything else (obliques, modifiers, possessives)
    Other,
}

impl GrammaticalRole {
    /// Fixed salience weight for this role: subject > direct object >
    /// indirect object > other.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        match self {
            GrammaticalRole::Subject => 80,
            GrammaticalRole::DirectObject => 50,
            GrammaticalRole::IndirectObject => 40,
            GrammaticalRole::Other => 20,
        }
    }
}

/// A document position: sentence ordinal plus token index within it.
///
/// Token indices are sentence-scoped, so a cross-sentence antecedent
/// reference must carry the sentence ordinal too. Document order is the
/// derived lexicographic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenRef {
    /// Sentence ordinal within the document.
    pub sentence: usize,
    /// Token index within the sentence.
    pub index: usize,
}

impl TokenRef {
    /// Create a new document position.
    #[must_use]
    pub const fn new(sentence: usize, index: usize) -> Self {
        Self { sentence, index }
    }
}

/// A tagged, dependency-parsed token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text (replaced by the antecedent's on pronoun resolution).
    pub text: String,
    /// Zero-based position within the owning sentence. Unique and
    /// monotonically increasing; survives filtering and merging unchanged.
    pub index: usize,
    /// Part-of-speech category.
    pub tag: PosTag,
    /// Grammatical relation to the governor.
    pub dependency: DepLabel,
    /// Governor indices within the same sentence, nearest first. The root
    /// token has an empty list; a token never lists its own index.
    pub ancestors: Vec<usize>,
    /// Semantic category, populated only for noun-tagged tokens present in
    /// the lexicon; empty otherwise.
    #[serde(default)]
    pub semantic: String,
    /// Document position of the antecedent this token was resolved to.
    /// Absent for non-pronouns and unresolved pronouns. Set exactly once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_reference: Option<TokenRef>,
}

impl Token {
    /// Create a new token with no semantic category.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        index: usize,
        tag: PosTag,
        dependency: DepLabel,
        ancestors: Vec<usize>,
    ) -> Self {
        Self {
            text: text.into(),
            index,
            tag,
            dependency,
            ancestors,
            semantic: String::new(),
            resolved_reference: None,
        }
    }

    /// Set the semantic category.
    #[must_use]
    pub fn with_semantic(mut self, semantic: impl Into<String>) -> Self {
        self.semantic = semantic.into();
        self
    }

    /// Is the surface text pure whitespace?
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }

    /// The grammatical role of this token.
    #[must_use]
    pub const fn role(&self) -> GrammaticalRole {
        self.dependency.role()
    }
}

/// An ordered sequence of tokens. Position within its document is implicit
/// in list order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence {
    /// The tokens, in surface order.
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a sentence from its tokens.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the sentence empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Find the token with the given sentence-scoped index.
    #[must_use]
    pub fn token_at(&self, index: usize) -> Option<&Token> {
        self.tokens.iter().find(|t| t.index == index)
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_roundtrip() {
        let tags = [
            PosTag::Noun,
            PosTag::NounPlural,
            PosTag::ProperNoun,
            PosTag::ProperNounPlural,
            PosTag::Pronoun,
            PosTag::PossessivePronoun,
            PosTag::VerbBase,
            PosTag::VerbPast,
            PosTag::VerbGerund,
            PosTag::VerbPastParticiple,
            PosTag::VerbPresent,
            PosTag::VerbThirdPerson,
            PosTag::WhDeterminer,
            PosTag::WhPronoun,
            PosTag::Determiner,
        ];

        for t in tags {
            let label = t.as_label().to_string();
            assert_eq!(t, PosTag::from_label(&label));
        }
    }

    #[test]
    fn test_dep_label_roundtrip() {
        let deps = [
            DepLabel::Subject,
            DepLabel::PassiveSubject,
            DepLabel::DirectObject,
            DepLabel::IndirectObject,
            DepLabel::Root,
        ];

        for d in deps {
            let label = d.as_label().to_string();
            assert_eq!(d, DepLabel::from_label(&label));
        }
    }

    #[test]
    fn test_dative_maps_to_indirect_object() {
        assert_eq!(DepLabel::from_label("dative"), DepLabel::IndirectObject);
        assert_eq!(DepLabel::from_label("obj"), DepLabel::DirectObject);
    }

    #[test]
    fn test_role_weights_descend() {
        assert!(GrammaticalRole::Subject.weight() > GrammaticalRole::DirectObject.weight());
        assert!(GrammaticalRole::DirectObject.weight() > GrammaticalRole::IndirectObject.weight());
        assert!(GrammaticalRole::IndirectObject.weight() > GrammaticalRole::Other.weight());
    }

    #[test]
    fn test_tag_predicates() {
        assert!(PosTag::ProperNoun.is_noun());
        assert!(!PosTag::Pronoun.is_noun());
        assert!(PosTag::NounPlural.is_plural_noun());
        assert!(!PosTag::Noun.is_plural_noun());
        assert!(PosTag::ProperNounPlural.is_proper_noun());
        assert!(!PosTag::Noun.is_proper_noun());
        assert!(PosTag::VerbThirdPerson.is_verb());
        assert!(!PosTag::Determiner.is_verb());
        assert!(PosTag::PossessivePronoun.is_pronoun());
        assert!(PosTag::WhDeterminer.is_wh());
    }

    #[test]
    fn test_token_ref_document_order() {
        let earlier = TokenRef::new(0, 7);
        let later = TokenRef::new(1, 2);
        assert!(earlier < later);
        assert!(TokenRef::new(1, 1) < TokenRef::new(1, 2));
    }

    #[test]
    fn test_token_serialization_shape() {
        let token = Token::new("keys", 3, PosTag::NounPlural, DepLabel::DirectObject, vec![1])
            .with_semantic("object");
        let json = serde_json::to_value(&token).unwrap();

        assert_eq!(json["text"], "keys");
        assert_eq!(json["index"], 3);
        assert_eq!(json["tag"], "NNS");
        assert_eq!(json["dependency"], "dobj");
        assert_eq!(json["ancestors"][0], 1);
        assert_eq!(json["semantic"], "object");
        // unresolved tokens do not carry a reference field
        assert!(json.get("resolved_reference").is_none());
    }

    #[test]
    fn test_token_whitespace() {
        let space = Token::new(" ", 0, PosTag::Other("SP".into()), DepLabel::Other("".into()), vec![]);
        assert!(space.is_whitespace());
        let word = Token::new("cat", 0, PosTag::Noun, DepLabel::Root, vec![]);
        assert!(!word.is_whitespace());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pos_tag_label_roundtrip(label in "[A-Z$]{2,5}") {
            let tag = PosTag::from_label(&label);
            let back = PosTag::from_label(tag.as_label());
            prop_assert_eq!(tag, back);
        }

        #[test]
        fn dep_label_roundtrip(label in "[a-z]{3,10}") {
            let dep = DepLabel::from_label(&label);
            let back = DepLabel::from_label(dep.as_label());
            prop_assert_eq!(dep, back);
        }
    }
}
