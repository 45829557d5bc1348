//! Compound-noun merging.
//!
//! Greedy longest-match, left-to-right, non-overlapping scan: at each
//! unconsumed position the longest run of contiguous noun-tagged tokens
//! (or tokens forming a known multi-word lexicon entry) merges into one
//! compound token. The merged token takes the space-joined text; tag,
//! dependency, ancestors and index come from the run's rightmost (head)
//! token. Ties between equal-length runs resolve to the earliest start,
//! then the longest length, both guaranteed by the scan order. Re-running
//! the merger on already-merged output is a no-op.

use crate::lexicon::SemanticLexicon;
use crate::token::Token;

/// Merge adjacent noun runs and multi-word lexicon entries into compound
/// tokens. Non-qualifying tokens pass through unchanged.
#[must_use]
pub fn merge_compounds(tokens: &[Token], lexicon: Option<&SemanticLexicon>) -> Vec<Token> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let end = run_end(tokens, i, lexicon);
        if end - i > 1 {
            merged.push(merge_run(&tokens[i..end], lexicon));
        } else {
            merged.push(tokens[i].clone());
        }
        i = end;
    }
    merged
}

/// Exclusive end of the maximal mergeable run starting at `start`.
///
/// The run grows to a fixpoint: a noun-headed run absorbs following noun
/// tokens, and any prefix matching a longer multi-word lexicon entry
/// extends the run to cover that entry. Growing to the fixpoint in one
/// pass is what makes the merger idempotent: anything a second pass
/// could join, this pass already joined.
fn run_end(tokens: &[Token], start: usize, lexicon: Option<&SemanticLexicon>) -> usize {
    let mut end = if tokens[start].tag.is_noun() {
        start + 1
    } else {
        start
    };

    loop {
        let before = end;

        if end > start && tokens[end - 1].tag.is_noun() {
            while end < tokens.len() && tokens[end].tag.is_noun() {
                end += 1;
            }
        }

        if let Some(lex) = lexicon {
            // An entry of W words spans at most W tokens.
            let cap = tokens.len().min(start + lex.longest_multiword());
            let floor = end.max(start + 1);
            let mut m = cap;
            while m > floor {
                if lex.contains_multiword(&join_texts(&tokens[start..m])) {
                    end = m;
                    break;
                }
                m -= 1;
            }
        }

        if end == before {
            break;
        }
    }

    end.max(start + 1)
}

fn join_texts(run: &[Token]) -> String {
    run.iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn merge_run(run: &[Token], lexicon: Option<&SemanticLexicon>) -> Token {
    let head = &run[run.len() - 1];
    let text = join_texts(run);
    let semantic = lexicon
        .and_then(|lex| lex.lookup(&text))
        .map(str::to_string)
        .unwrap_or_else(|| head.semantic.clone());

    Token {
        text,
        index: head.index,
        tag: head.tag.clone(),
        dependency: head.dependency.clone(),
        ancestors: head.ancestors.clone(),
        semantic,
        resolved_reference: head.resolved_reference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{DepLabel, PosTag};

    fn noun(text: &str, index: usize) -> Token {
        Token::new(text, index, PosTag::Noun, DepLabel::Other("compound".into()), vec![])
    }

    fn proper(text: &str, index: usize, dep: DepLabel, ancestors: Vec<usize>) -> Token {
        Token::new(text, index, PosTag::ProperNoun, dep, ancestors)
    }

    fn verb(text: &str, index: usize) -> Token {
        Token::new(text, index, PosTag::VerbPast, DepLabel::Root, vec![])
    }

    #[test]
    fn test_adjacent_nouns_merge() {
        let tokens = vec![noun("front", 0), noun("door", 1), verb("opened", 2)];
        let merged = merge_compounds(&tokens, None);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].text, "front door");
        assert_eq!(merged[0].index, 1);
        assert_eq!(merged[1].text, "opened");
    }

    #[test]
    fn test_head_attributes_inherited() {
        let tokens = vec![
            proper("New", 0, DepLabel::Other("compound".into()), vec![2]),
            proper("York", 1, DepLabel::Other("compound".into()), vec![2]),
            proper("City", 2, DepLabel::Subject, vec![3]),
        ];
        let merged = merge_compounds(&tokens, None);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "New York City");
        assert_eq!(merged[0].index, 2);
        assert_eq!(merged[0].dependency, DepLabel::Subject);
        assert_eq!(merged[0].ancestors, vec![3]);
        assert_eq!(merged[0].tag, PosTag::ProperNoun);
    }

    #[test]
    fn test_non_nouns_pass_through() {
        let tokens = vec![verb("ran", 0), verb("jumped", 1)];
        let merged = merge_compounds(&tokens, None);
        assert_eq!(merged, tokens);
    }

    #[test]
    fn test_single_noun_unchanged() {
        let tokens = vec![noun("cat", 0), verb("sat", 1), noun("mat", 2)];
        let merged = merge_compounds(&tokens, None);
        assert_eq!(merged, tokens);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let tokens = vec![
            noun("kitchen", 0),
            noun("door", 1),
            verb("slammed", 2),
            noun("key", 3),
            noun("ring", 4),
        ];
        let once = merge_compounds(&tokens, None);
        let twice = merge_compounds(&once, None);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_lexicon_entry_with_non_noun_member() {
        let mut lexicon = SemanticLexicon::new();
        lexicon.insert("rocking chair", "object");

        // "rocking" is a gerund, so the noun-run rule alone would not merge
        let tokens = vec![
            Token::new("rocking", 0, PosTag::VerbGerund, DepLabel::Other("amod".into()), vec![1]),
            noun("chair", 1),
        ];
        let merged = merge_compounds(&tokens, Some(&lexicon));

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "rocking chair");
        assert_eq!(merged[0].semantic, "object");
    }

    #[test]
    fn test_lexicon_merge_extends_noun_run_to_fixpoint() {
        let mut lexicon = SemanticLexicon::new();
        lexicon.insert("grand piano", "instrument");

        // the lexicon entry ends on a noun head, so the following noun
        // joins the same run in the same pass
        let tokens = vec![
            Token::new("grand", 0, PosTag::Other("JJ".into()), DepLabel::Other("amod".into()), vec![1]),
            noun("piano", 1),
            noun("stool", 2),
        ];
        let once = merge_compounds(&tokens, Some(&lexicon));

        assert_eq!(once.len(), 1);
        assert_eq!(once[0].text, "grand piano stool");

        let twice = merge_compounds(&once, Some(&lexicon));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merged_semantic_from_lexicon() {
        let mut lexicon = SemanticLexicon::new();
        lexicon.insert("guide dog", "animal");

        let tokens = vec![noun("guide", 0), noun("dog", 1)];
        let merged = merge_compounds(&tokens, Some(&lexicon));
        assert_eq!(merged[0].semantic, "animal");
    }

    #[test]
    fn test_earliest_start_wins() {
        // "security door lock": the scan starts at "security" and takes the
        // whole run, never the later "door lock" alternative
        let tokens = vec![noun("security", 0), noun("door", 1), noun("lock", 2)];
        let merged = merge_compounds(&tokens, None);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "security door lock");
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_compounds(&[], None).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::token::{DepLabel, PosTag};
    use proptest::prelude::*;

    fn arbitrary_token(text: String, noun: bool, index: usize) -> Token {
        let tag = if noun { PosTag::Noun } else { PosTag::VerbBase };
        Token::new(text, index, tag, DepLabel::Root, vec![])
    }

    proptest! {
        #[test]
        fn merge_idempotent(spec in proptest::collection::vec(("[a-z]{1,6}", any::<bool>()), 0..16)) {
            let tokens: Vec<Token> = spec
                .into_iter()
                .enumerate()
                .map(|(i, (text, noun))| arbitrary_token(text, noun, i))
                .collect();
            let once = merge_compounds(&tokens, None);
            let twice = merge_compounds(&once, None);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn merge_never_increases_token_count(spec in proptest::collection::vec(("[a-z]{1,6}", any::<bool>()), 0..16)) {
            let tokens: Vec<Token> = spec
                .into_iter()
                .enumerate()
                .map(|(i, (text, noun))| arbitrary_token(text, noun, i))
                .collect();
            let merged = merge_compounds(&tokens, None);
            prop_assert!(merged.len() <= tokens.len());
        }
    }
}
