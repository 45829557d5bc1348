//! Undesirable-token filter.
//!
//! Removes function words, punctuation and whitespace noise from token
//! lists by case-insensitive set membership. The set is fixed at compile
//! time and materialized once per process into immutable state; it is safe
//! for concurrent read-only access across document workers. Pure and
//! idempotent: `remove_undesirables(remove_undesirables(x)) ==
//! remove_undesirables(x)`.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::token::Token;

/// Articles.
const ARTICLES: &[&str] = &["the", "a", "an"];

/// One-off noise: negation particle and single letters, except "c" (the
/// language).
const ONE_OFFS: &[&str] = &[
    "not", "b", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

/// Conjunctions, single- and multi-word.
const CONJUNCTIONS: &[&str] = &[
    "although", "and", "as", "as far as", "as how", "as if", "as long as", "as soon as",
    "as though", "as well as", "because", "before", "both", "but", "either", "even if", "even",
    "though", "for", "how", "however", "if only", "in case", "in order that", "neither", "nor",
    "now", "once", "only", "or", "provided", "rather", "than", "since", "so", "so that", "that",
    "till", "unless", "until", "when", "whenever", "where", "whereas", "wherever", "whether",
    "while", "yet",
];

/// Determiners.
const DETERMINERS: &[&str] = &[
    "my", "his", "her", "our", "your", "its", "their", "what", "whose", "which", "these", "some",
    "a few", "a little", "all", "another", "any", "both", "each", "either", "enough", "every",
    "few", "fewer", "less", "little", "many", "more", "most", "much", "neither", "no", "other",
    "several",
];

/// Modal verbs and their contractions.
const MODALS: &[&str] = &[
    "can", "can't", "could", "couldn't", "may", "might", "mightn't", "must", "mustn't", "shall",
    "shan't", "should", "shouldn't", "will", "won't", "would", "wouldn't", "ought", "oughtn't",
    "dare", "daren't", "need", "needen't", "had better", "used to",
];

/// Prepositions.
const PREPOSITIONS: &[&str] = &[
    "aboard", "about", "above", "across", "after", "against", "along", "amid", "among", "anti",
    "around", "at", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
    "concerning", "considering", "despite", "down", "during", "except", "excepting", "excluding",
    "following", "from", "in", "inside", "into", "like", "minus", "near", "of", "off", "on",
    "onto", "opposite", "outside", "over", "past", "per", "plus", "regarding", "round", "save",
    "through", "to", "toward", "towards", "under", "underneath", "unlike", "up", "upon",
    "versus", "via", "with", "within", "without", "out", "away",
];

/// Pronoun function words used only as noise once anaphora resolution has
/// replaced the referential ones.
const NOISE_PRONOUNS: &[&str] = &[
    "none", "everything", "anybody", "anyone", "anything", "nothing", "one", "somebody",
    "someone", "something", "others", "you", "yours", "yourself", "yourselves", "me", "them",
    "they", "she", "he", "him", "us", "we", "it", "whatever", "whichever", "who", "whoever",
    "whom", "whomever", "herself", "himself", "itself", "myself", "each other", "everybody",
    "everyone", "hers", "mine", "no one", "nobody", "one another", "ours", "ourselves", "theirs",
    "themselves", "this", "those", "why",
];

/// Residual punctuation marks and tokenizer fragments.
const MARKS: &[&str] = &[
    "n't", "''", "`", "!", "?", ",", ":", ";", "_", "%", "$", "#", "@", "^", "&", "*", "(", ")",
    "[", "{", "]", "}", "<", ">", "/", "\\", "=", "+", "|", "\"",
];

/// Full-stop variants across scripts.
const FULL_STOPS: &[&str] = &[
    "\u{002e}", "\u{06d4}", "\u{0701}", "\u{0702}", "\u{fe12}", "\u{fe52}", "\u{ff0e}",
    "\u{ff61}",
];

/// Single-quote variants.
const SINGLE_QUOTES: &[&str] = &[
    "'", "\u{02bc}", "\u{055a}", "\u{07f4}", "\u{07f5}", "\u{2019}", "\u{ff07}", "\u{2018}",
    "\u{201a}", "\u{201b}", "\u{275b}", "\u{275c}",
];

/// Double-quote variants.
const DOUBLE_QUOTES: &[&str] = &[
    "\u{201c}", "\u{201d}", "\u{201e}", "\u{201f}", "\u{2039}", "\u{203a}", "\u{275d}",
    "\u{276e}", "\u{2760}", "\u{276f}",
];

/// Hyphen variants.
const HYPHENS: &[&str] = &["\u{002d}", "\u{207b}", "\u{208b}", "\u{fe63}", "\u{ff0d}"];

/// Whitespace and control-character noise.
const WHITESPACE: &[&str] = &[
    " ", "\t", "\r", "\n", "\u{0008}", "\u{feff}", "\u{303f}", "\u{3000}", "\u{2420}",
    "\u{2408}", "\u{202f}", "\u{205f}", "\u{2000}", "\u{2002}", "\u{2003}", "\u{2004}",
    "\u{2005}", "\u{2006}", "\u{2007}", "\u{2008}", "\u{2009}", "\u{200a}", "\u{200b}",
];

static UNDESIRABLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ARTICLES,
        ONE_OFFS,
        CONJUNCTIONS,
        DETERMINERS,
        MODALS,
        PREPOSITIONS,
        NOISE_PRONOUNS,
        MARKS,
        FULL_STOPS,
        SINGLE_QUOTES,
        DOUBLE_QUOTES,
        HYPHENS,
        WHITESPACE,
    ]
    .iter()
    .flat_map(|group| group.iter().copied())
    .collect()
});

/// Is this surface text an undesirable token?
#[must_use]
pub fn is_undesirable(text: &str) -> bool {
    UNDESIRABLES.contains(text.to_lowercase().as_str())
}

/// Remove all undesirable tokens from a token list.
#[must_use]
pub fn remove_undesirables(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| !is_undesirable(&t.text))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{DepLabel, PosTag};

    fn word(text: &str) -> Token {
        Token::new(text, 0, PosTag::Noun, DepLabel::Other("".into()), vec![])
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        assert!(is_undesirable("The"));
        assert!(is_undesirable("AND"));
        assert!(is_undesirable("Wouldn't"));
        assert!(!is_undesirable("keys"));
        assert!(!is_undesirable("Paris"));
    }

    #[test]
    fn test_punctuation_and_whitespace_removed() {
        assert!(is_undesirable("?"));
        assert!(is_undesirable("."));
        assert!(is_undesirable("\u{2019}"));
        assert!(is_undesirable(" "));
        assert!(is_undesirable("\u{200b}"));
    }

    #[test]
    fn test_remove_undesirables_keeps_content_words() {
        let tokens = vec![word("the"), word("cat"), word("sat"), word("."), word("?")];
        let filtered = remove_undesirables(&tokens);
        let texts: Vec<&str> = filtered.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["cat", "sat"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let tokens = vec![word("a"), word("dog"), word("chased"), word("it")];
        let once = remove_undesirables(&tokens);
        let twice = remove_undesirables(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(remove_undesirables(&[]).is_empty());
    }
}
