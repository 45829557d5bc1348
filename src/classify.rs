//! Rule-based sentence classifiers.
//!
//! These gate every stored fact: a question or an imperative is a
//! conversational turn, not information, and a sentence without a verb
//! carries nothing to learn. All three classifiers require more than one
//! token; shorter sentences classify false across the board.

use crate::token::{PosTag, Token};

/// Auxiliary verbs that open a question ("Do you...", "Is it...").
const AUXILIARY_VERBS: &[&str] = &["do", "did", "does", "are", "is", "was", "have", "had"];

/// Is the sentence a question?
///
/// True when the final token is `?`, when the sentence opens with an
/// auxiliary verb, or when any token carries a wh-determiner or wh-pronoun
/// tag.
#[must_use]
pub fn is_question(tokens: &[Token]) -> bool {
    if tokens.len() <= 1 {
        return false;
    }
    if tokens[tokens.len() - 1].text == "?" {
        return true;
    }

    let first = &tokens[0];
    if first.tag.is_verb() && AUXILIARY_VERBS.contains(&first.text.to_lowercase().as_str()) {
        return true;
    }

    tokens.iter().any(|t| t.tag.is_wh())
}

/// Is the sentence an imperative (a command or request)?
///
/// Never true for a question: the two classifiers are mutually exclusive
/// by construction. Otherwise true when the sentence opens with a base or
/// present-tense verb form.
#[must_use]
pub fn is_imperative(tokens: &[Token]) -> bool {
    if tokens.len() <= 1 {
        return false;
    }
    if is_question(tokens) {
        return false;
    }

    matches!(&tokens[0].tag, PosTag::VerbBase | PosTag::VerbPresent)
}

/// Does the sentence contain any verb form?
#[must_use]
pub fn has_verb(tokens: &[Token]) -> bool {
    if tokens.len() <= 1 {
        return false;
    }
    tokens.iter().any(|t| t.tag.is_verb())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{DepLabel, PosTag, Token};

    fn tok(text: &str, tag: PosTag) -> Token {
        Token::new(text, 0, tag, DepLabel::Other("".into()), vec![])
    }

    fn punct(text: &str) -> Token {
        tok(text, PosTag::Other("PUNCT".into()))
    }

    #[test]
    fn test_question_by_final_mark() {
        let tokens = vec![
            tok("john", PosTag::ProperNoun),
            tok("left", PosTag::VerbPast),
            punct("?"),
        ];
        assert!(is_question(&tokens));
        assert!(!is_imperative(&tokens));
    }

    #[test]
    fn test_question_by_leading_auxiliary() {
        let tokens = vec![
            tok("Is", PosTag::VerbThirdPerson),
            tok("john", PosTag::ProperNoun),
            tok("tall", PosTag::Other("JJ".into())),
        ];
        assert!(is_question(&tokens));
    }

    #[test]
    fn test_question_by_wh_word() {
        let tokens = vec![
            tok("what", PosTag::WhPronoun),
            tok("john", PosTag::ProperNoun),
            tok("said", PosTag::VerbPast),
        ];
        assert!(is_question(&tokens));
    }

    #[test]
    fn test_leading_verb_without_aux_text_is_not_question() {
        let tokens = vec![
            tok("ran", PosTag::VerbPast),
            tok("home", PosTag::Noun),
        ];
        assert!(!is_question(&tokens));
    }

    #[test]
    fn test_imperative() {
        let tokens = vec![
            tok("open", PosTag::VerbBase),
            tok("window", PosTag::Noun),
            punct("."),
        ];
        assert!(is_imperative(&tokens));
        assert!(!is_question(&tokens));
    }

    #[test]
    fn test_imperative_never_true_for_question() {
        // opens with a base verb AND an auxiliary: question wins
        let tokens = vec![
            tok("do", PosTag::VerbBase),
            tok("dishes", PosTag::NounPlural),
        ];
        assert!(is_question(&tokens));
        assert!(!is_imperative(&tokens));

        // trailing question mark beats the leading verb
        let trailing = vec![
            tok("open", PosTag::VerbBase),
            tok("window", PosTag::Noun),
            punct("?"),
        ];
        assert!(!is_imperative(&trailing));
    }

    #[test]
    fn test_question_and_imperative_mutually_exclusive() {
        let samples = vec![
            vec![tok("do", PosTag::VerbBase), tok("it", PosTag::Pronoun)],
            vec![tok("run", PosTag::VerbBase), tok("fast", PosTag::Other("RB".into()))],
            vec![tok("john", PosTag::ProperNoun), tok("runs", PosTag::VerbThirdPerson)],
            vec![tok("where", PosTag::WhDeterminer), tok("now", PosTag::Other("RB".into())), punct("?")],
        ];
        for tokens in samples {
            assert!(
                !(is_question(&tokens) && is_imperative(&tokens)),
                "both classifiers true for {:?}",
                tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_has_verb() {
        let with = vec![tok("john", PosTag::ProperNoun), tok("sleeps", PosTag::VerbThirdPerson)];
        assert!(has_verb(&with));

        let without = vec![tok("red", PosTag::Other("JJ".into())), tok("door", PosTag::Noun)];
        assert!(!has_verb(&without));
    }

    #[test]
    fn test_short_sentences_classify_false() {
        let one = vec![tok("go", PosTag::VerbBase)];
        assert!(!is_question(&one));
        assert!(!is_imperative(&one));
        assert!(!has_verb(&one));

        assert!(!is_question(&[]));
        assert!(!is_imperative(&[]));
        assert!(!has_verb(&[]));
    }
}
