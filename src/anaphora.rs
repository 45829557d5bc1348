//! Salience-weighted anaphora resolution.
//!
//! Resolves third-person pronouns to their antecedents across one
//! document. The discourse model tracks every noun mention introduced in
//! the current sentence so far and in a bounded window of preceding
//! sentences; each pronoun is resolved against the surviving candidates by
//! a weighted sum of salience factors:
//!
//! - grammatical role (subject > direct object > indirect object > other),
//! - recency (geometric decay per sentence of distance),
//! - role parallelism between candidate and pronoun,
//! - an indefiniteness penalty for candidates introduced by `a`/`an`/`some`,
//! - a frequency bonus for entities mentioned more than once in the window.
//!
//! Hard agreement filters run before scoring: grammatical number, person,
//! derivable gender, and syntactic binding (a reflexive must corefer with
//! its own sentence's subject or a governor; a non-reflexive never
//! corefers with a token it directly governs).
//!
//! Discourse state lives only for the duration of one [`AnaphoraResolver::resolve`]
//! call and never crosses documents. A resolved pronoun keeps its index
//! but takes the antecedent's surface text and semantic category; the
//! reference is set exactly once, never to the pronoun itself, and never
//! to a later document position.

use crate::token::{GrammaticalRole, PosTag, Sentence, Token, TokenRef};

/// Number of preceding sentences searched for antecedent candidates.
pub const DISCOURSE_WINDOW: usize = 4;

/// Base recency weight, halved per sentence of distance.
const RECENCY_BASE: u32 = 100;
/// Bonus when the candidate fills the same grammatical role as the pronoun.
const PARALLELISM_BONUS: u32 = 35;
/// Penalty for candidates introduced by an indefinite determiner.
const INDEFINITE_PENALTY: u32 = 25;
/// Bonus for entities mentioned more than once in the discourse window.
const FREQUENCY_BONUS: u32 = 20;

/// Determiners that mark an indefinite introduction.
const INDEFINITE_DETERMINERS: &[&str] = &["a", "an", "some"];

/// Semantic categories naming animate referents. A gendered pronoun never
/// resolves to a candidate whose category is known and not one of these.
const ANIMATE_CATEGORIES: &[&str] = &["male", "female", "person", "human"];

// =============================================================================
// Pronoun classification
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Number {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PronounClass {
    person: Person,
    number: Number,
    gender: Gender,
    reflexive: bool,
}

impl PronounClass {
    const fn new(person: Person, number: Number, gender: Gender, reflexive: bool) -> Self {
        Self {
            person,
            number,
            gender,
            reflexive,
        }
    }
}

/// Classify a pronoun by its surface text.
fn classify_pronoun(text: &str) -> Option<PronounClass> {
    use Gender::*;
    use Number::*;
    use Person::*;

    let class = match text.to_lowercase().as_str() {
        "i" | "me" | "my" | "mine" => PronounClass::new(First, Singular, Unknown, false),
        "myself" => PronounClass::new(First, Singular, Unknown, true),
        "we" | "us" | "our" | "ours" => PronounClass::new(First, Plural, Unknown, false),
        "ourselves" => PronounClass::new(First, Plural, Unknown, true),
        "you" | "your" | "yours" => PronounClass::new(Second, Singular, Unknown, false),
        "yourself" => PronounClass::new(Second, Singular, Unknown, true),
        "yourselves" => PronounClass::new(Second, Plural, Unknown, true),
        "he" | "him" | "his" => PronounClass::new(Third, Singular, Masculine, false),
        "himself" => PronounClass::new(Third, Singular, Masculine, true),
        "she" | "her" | "hers" => PronounClass::new(Third, Singular, Feminine, false),
        "herself" => PronounClass::new(Third, Singular, Feminine, true),
        "it" | "its" => PronounClass::new(Third, Singular, Neuter, false),
        "itself" => PronounClass::new(Third, Singular, Neuter, true),
        "they" | "them" | "their" | "theirs" => PronounClass::new(Third, Plural, Unknown, false),
        "themselves" => PronounClass::new(Third, Plural, Unknown, true),
        _ => return None,
    };
    Some(class)
}

// =============================================================================
// Discourse model
// =============================================================================

/// A tracked antecedent candidate, built from one noun mention. Valid only
/// within one document's processing; the model is rebuilt fresh per call
/// and discarded afterwards.
#[derive(Debug, Clone)]
struct DiscourseEntity {
    /// Representative surface form (the antecedent text substituted into
    /// resolved pronouns).
    text: String,
    /// Lower-cased surface form, the frequency key.
    key: String,
    /// Document position of the mention.
    position: TokenRef,
    /// Grammatical role the mention fills in its sentence.
    role: GrammaticalRole,
    number: Number,
    gender: Gender,
    /// Semantic category copied from the mention, empty when unknown.
    semantic: String,
    /// Index of the mention's direct governor, if any.
    governor: Option<usize>,
    /// Introduced by an indefinite determiner.
    indefinite: bool,
}

/// Per-document discourse state. Owned by one `resolve` invocation;
/// strictly sequential, never shared.
#[derive(Debug, Default)]
struct DiscourseModel {
    entities: Vec<DiscourseEntity>,
}

impl DiscourseModel {
    /// Record a noun mention.
    fn observe_noun(&mut self, token: &Token, position: TokenRef, indefinite: bool) {
        let gender = match token.semantic.as_str() {
            "male" => Gender::Masculine,
            "female" => Gender::Feminine,
            _ => Gender::Unknown,
        };
        let number = if token.tag.is_plural_noun() {
            Number::Plural
        } else {
            Number::Singular
        };
        self.entities.push(DiscourseEntity {
            text: token.text.clone(),
            key: token.text.to_lowercase(),
            position,
            role: token.role(),
            number,
            gender,
            semantic: token.semantic.clone(),
            governor: token.ancestors.first().copied(),
            indefinite,
        });
    }

    /// Record a resolved pronoun as a further mention of its antecedent,
    /// at the pronoun's own position and role.
    fn observe_resolution(&mut self, antecedent: &DiscourseEntity, token: &Token, position: TokenRef) {
        self.entities.push(DiscourseEntity {
            text: antecedent.text.clone(),
            key: antecedent.key.clone(),
            position,
            role: token.role(),
            number: antecedent.number,
            gender: antecedent.gender,
            semantic: antecedent.semantic.clone(),
            governor: token.ancestors.first().copied(),
            indefinite: false,
        });
    }

    /// Mentions within `window` sentences of sentence `current`.
    fn in_window(&self, current: usize, window: usize) -> impl Iterator<Item = &DiscourseEntity> {
        self.entities
            .iter()
            .filter(move |e| current - e.position.sentence <= window)
    }

    /// Number of in-window mentions sharing an entity key.
    fn frequency(&self, key: &str, current: usize, window: usize) -> u32 {
        self.in_window(current, window)
            .filter(|e| e.key == key)
            .count() as u32
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// The anaphora resolution engine.
///
/// Stateless between calls: each [`resolve`](Self::resolve) owns a fresh
/// discourse model, so independent documents may be processed concurrently
/// by separate resolver instances (or one shared instance, since it holds only
/// configuration).
///
/// # Example
///
/// ```rust
/// use parlance::{AnaphoraResolver, Sentence, Token, PosTag, DepLabel};
///
/// let mut doc = vec![
///     Sentence::new(vec![
///         Token::new("John", 0, PosTag::ProperNoun, DepLabel::Subject, vec![1]),
///         Token::new("slept", 1, PosTag::VerbPast, DepLabel::Root, vec![]),
///     ]),
///     Sentence::new(vec![
///         Token::new("He", 0, PosTag::Pronoun, DepLabel::Subject, vec![1]),
///         Token::new("snored", 1, PosTag::VerbPast, DepLabel::Root, vec![]),
///     ]),
/// ];
///
/// AnaphoraResolver::default().resolve(&mut doc);
/// assert_eq!(doc[1].tokens[0].text, "John");
/// ```
#[derive(Debug, Clone)]
pub struct AnaphoraResolver {
    window: usize,
}

impl Default for AnaphoraResolver {
    fn default() -> Self {
        Self {
            window: DISCOURSE_WINDOW,
        }
    }
}

impl AnaphoraResolver {
    /// Create a resolver with the default discourse window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the discourse window (number of preceding sentences searched).
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Resolve pronouns across one document, in place.
    ///
    /// Sentences are processed strictly in order; resolving sentence *k*
    /// uses entities established in sentences *< k* and earlier in *k*.
    /// Tokens already carrying a `resolved_reference` are skipped, so the
    /// call is idempotent with respect to already-resolved tokens.
    /// Pronouns with no surviving candidate are left unchanged; that is a
    /// normal outcome, not an error.
    pub fn resolve(&self, sentences: &mut [Sentence]) {
        let mut model = DiscourseModel::default();

        for sentence_idx in 0..sentences.len() {
            for token_idx in 0..sentences[sentence_idx].tokens.len() {
                let token = &sentences[sentence_idx].tokens[token_idx];
                let position = TokenRef::new(sentence_idx, token.index);

                if token.tag.is_noun() {
                    let indefinite = token_idx > 0
                        && is_indefinite_determiner(&sentences[sentence_idx].tokens[token_idx - 1]);
                    model.observe_noun(token, position, indefinite);
                    continue;
                }

                if !token.tag.is_pronoun() || token.resolved_reference.is_some() {
                    continue;
                }
                let Some(class) = classify_pronoun(&token.text) else {
                    continue;
                };
                if class.person != Person::Third {
                    continue;
                }

                if let Some(antecedent) =
                    self.select_antecedent(&model, token, position, class)
                {
                    log::debug!(
                        "resolved '{}' at {:?} to '{}' at {:?}",
                        token.text,
                        position,
                        antecedent.text,
                        antecedent.position
                    );
                    let token = &mut sentences[sentence_idx].tokens[token_idx];
                    token.text = antecedent.text.clone();
                    token.semantic = antecedent.semantic.clone();
                    token.resolved_reference = Some(antecedent.position);
                    let token = &sentences[sentence_idx].tokens[token_idx];
                    model.observe_resolution(&antecedent, token, position);
                }
            }
        }
    }

    /// Gather, filter and score candidates for one pronoun; pick the best.
    fn select_antecedent(
        &self,
        model: &DiscourseModel,
        pronoun: &Token,
        position: TokenRef,
        class: PronounClass,
    ) -> Option<DiscourseEntity> {
        let pronoun_role = pronoun.role();
        let mut best: Option<(u32, usize, &DiscourseEntity)> = None;

        for entity in model.in_window(position.sentence, self.window) {
            if !agreement_holds(entity, pronoun, position, class) {
                continue;
            }

            let distance = position.sentence - entity.position.sentence;
            let recency = RECENCY_BASE.checked_shr(distance as u32).unwrap_or(0);
            let mut score = recency + entity.role.weight();
            if entity.role == pronoun_role {
                score += PARALLELISM_BONUS;
            }
            if model.frequency(&entity.key, position.sentence, self.window) > 1 {
                score += FREQUENCY_BONUS;
            }
            if entity.indefinite {
                score = score.saturating_sub(INDEFINITE_PENALTY);
            }

            let better = match best {
                None => true,
                Some((best_score, best_distance, best_entity)) => {
                    score > best_score
                        || (score == best_score && distance < best_distance)
                        || (score == best_score
                            && distance == best_distance
                            && entity.position.index < best_entity.position.index)
                }
            };
            if better {
                best = Some((score, distance, entity));
            }
        }

        best.map(|(_, _, entity)| entity.clone())
    }
}

/// Resolve pronouns across one document with the default engine.
pub fn resolve_pronouns(sentences: &mut [Sentence]) {
    AnaphoraResolver::default().resolve(sentences);
}

/// Hard agreement and binding filters. Candidates that fail any are
/// discarded before scoring.
fn agreement_holds(
    entity: &DiscourseEntity,
    pronoun: &Token,
    position: TokenRef,
    class: PronounClass,
) -> bool {
    if entity.number != class.number {
        return false;
    }
    if gender_conflicts(class.gender, entity) {
        return false;
    }

    let same_sentence = entity.position.sentence == position.sentence;
    if class.reflexive {
        // A reflexive corefers only with its own sentence's subject or a
        // token that governs the reflexive.
        same_sentence
            && (entity.role == GrammaticalRole::Subject
                || pronoun.ancestors.contains(&entity.position.index))
    } else {
        // A non-reflexive never corefers with a token it directly governs.
        !(same_sentence && entity.governor == Some(pronoun.index))
    }
}

/// A gender mismatch must be derivable: both sides definite and differing,
/// or a gendered pronoun against a candidate with a known inanimate
/// category.
fn gender_conflicts(pronoun_gender: Gender, entity: &DiscourseEntity) -> bool {
    match pronoun_gender {
        Gender::Masculine => {
            entity.gender == Gender::Feminine || known_inanimate(&entity.semantic)
        }
        Gender::Feminine => {
            entity.gender == Gender::Masculine || known_inanimate(&entity.semantic)
        }
        Gender::Neuter => matches!(entity.gender, Gender::Masculine | Gender::Feminine),
        Gender::Unknown => false,
    }
}

fn known_inanimate(semantic: &str) -> bool {
    !semantic.is_empty() && !ANIMATE_CATEGORIES.contains(&semantic)
}

fn is_indefinite_determiner(token: &Token) -> bool {
    token.tag == PosTag::Determiner
        && INDEFINITE_DETERMINERS.contains(&token.text.to_lowercase().as_str())
}

// =============================================================================
// First/second person substitution
// =============================================================================

/// Replace first-person pronouns with the user's name and second-person
/// pronouns with the agent's name.
///
/// Applied when a fact is taught: "I like fish" stores who actually said
/// it. Both substitutions take the `person` semantic category. No
/// `resolved_reference` is set; these are not discourse anaphora.
pub fn resolve_first_and_second_person(user: &str, agent: &str, tokens: &mut [Token]) {
    for token in tokens.iter_mut() {
        if !token.tag.is_pronoun() {
            continue;
        }
        let replacement = match classify_pronoun(&token.text).map(|c| c.person) {
            Some(Person::First) => user,
            Some(Person::Second) => agent,
            _ => continue,
        };
        token.text = replacement.to_string();
        token.semantic = "person".to_string();
    }
}

// =============================================================================
// Tests
// =============================================================================
