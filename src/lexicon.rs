//! Semantic-category lexicon.
//!
//! Loaded once at process start from a directory of comma-separated
//! records, then immutable: safe for concurrent read-only access by every
//! document-processing worker. Each record is `term1,term2,...,category`;
//! every term maps to the lower-cased category. Multi-word terms double as
//! compound-noun entries for the merger.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// An immutable noun-to-category lexicon.
///
/// # Example
///
/// ```rust
/// use parlance::SemanticLexicon;
///
/// let mut lexicon = SemanticLexicon::new();
/// lexicon.insert("keys", "object");
/// lexicon.insert("front door", "object");
///
/// assert_eq!(lexicon.lookup("keys"), Some("object"));
/// assert_eq!(lexicon.lookup("door"), None);
/// assert_eq!(lexicon.longest_multiword(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SemanticLexicon {
    entries: HashMap<String, String>,
    /// Word count of the longest multi-word entry, 0 when there are none.
    longest_multiword: usize,
}

impl SemanticLexicon {
    /// Create an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every record file in a directory.
    ///
    /// Lines that are empty or start with `#` are skipped. Lines with fewer
    /// than two comma-separated fields are skipped with a warning: the
    /// loader is lenient about malformed records, strict about IO.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut lexicon = Self::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let fields: Vec<&str> = line.split(',').collect();
                if fields.len() < 2 {
                    log::warn!("skipping malformed lexicon record in {}: {line}", path.display());
                    continue;
                }
                let category = fields[fields.len() - 1].trim();
                for term in &fields[..fields.len() - 1] {
                    lexicon.insert(term.trim(), category);
                }
            }
        }

        log::info!("loaded {} lexicon entries from {}", lexicon.len(), dir.display());
        Ok(lexicon)
    }

    /// Insert a term with its category. The category is stored lower-cased.
    pub fn insert(&mut self, term: impl Into<String>, category: impl Into<String>) {
        let term = term.into();
        let words = term.split_whitespace().count();
        if words > 1 {
            self.longest_multiword = self.longest_multiword.max(words);
        }
        self.entries
            .insert(term.to_lowercase(), category.into().to_lowercase());
    }

    /// Look up the semantic category for a noun, case-insensitively.
    #[must_use]
    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.entries.get(term.to_lowercase().as_str()).map(String::as_str)
    }

    /// Does the lexicon contain this exact multi-word term?
    #[must_use]
    pub fn contains_multiword(&self, joined: &str) -> bool {
        joined.contains(' ') && self.entries.contains_key(joined.to_lowercase().as_str())
    }

    /// Word count of the longest multi-word entry (0 when none exist).
    #[must_use]
    pub fn longest_multiword(&self) -> usize {
        self.longest_multiword
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the lexicon empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut lexicon = SemanticLexicon::new();
        lexicon.insert("John", "Male");
        lexicon.insert("keys", "object");

        assert_eq!(lexicon.lookup("john"), Some("male"));
        assert_eq!(lexicon.lookup("John"), Some("male"));
        assert_eq!(lexicon.lookup("keys"), Some("object"));
        assert_eq!(lexicon.lookup("doors"), None);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_multiword_tracking() {
        let mut lexicon = SemanticLexicon::new();
        assert_eq!(lexicon.longest_multiword(), 0);

        lexicon.insert("city", "location");
        assert_eq!(lexicon.longest_multiword(), 0);

        lexicon.insert("new york city", "location");
        assert_eq!(lexicon.longest_multiword(), 3);
        assert!(lexicon.contains_multiword("New York City"));
        assert!(!lexicon.contains_multiword("city"));
    }

    #[test]
    fn test_load_dir() {
        let dir = std::env::temp_dir().join("parlance-lexicon-test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("animals.csv"),
            "# animal terms\ncat,dog,horse,animal\n\nmalformed-line\nguide dog,animal\n",
        )
        .unwrap();

        let lexicon = SemanticLexicon::load_dir(&dir).unwrap();
        assert_eq!(lexicon.lookup("cat"), Some("animal"));
        assert_eq!(lexicon.lookup("horse"), Some("animal"));
        assert_eq!(lexicon.lookup("guide dog"), Some("animal"));
        assert_eq!(lexicon.lookup("malformed-line"), None);
        assert_eq!(lexicon.longest_multiword(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_dir_is_io_error() {
        let missing = std::env::temp_dir().join("parlance-no-such-dir");
        assert!(SemanticLexicon::load_dir(&missing).is_err());
    }

    #[test]
    fn test_category_lowercased() {
        let mut lexicon = SemanticLexicon::new();
        lexicon.insert("Mary", "FEMALE");
        assert_eq!(lexicon.lookup("mary"), Some("female"));
    }
}
