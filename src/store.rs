//! The storage collaborator boundary.
//!
//! Persistent storage (and its sharded inverted index) lives outside this
//! crate; the core consumes an opaque store/retrieve/delete contract keyed
//! by factoid id and owner topic. [`MemoryStore`] backs tests and small
//! deployments.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::token::Token;

/// Trait for factoid storage backends.
pub trait Store: Send {
    /// Persist a token list under an id, owned by a topic.
    fn store(&mut self, id: Uuid, tokens: &[Token], owner_topic: &str) -> Result<()>;

    /// Fetch a token list by id.
    fn retrieve(&self, id: Uuid) -> Result<Option<Vec<Token>>>;

    /// Delete a factoid. Fails unless `owner_topic` owns it.
    fn delete(&mut self, id: Uuid, owner_topic: &str) -> Result<()>;
}

/// An in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    facts: HashMap<Uuid, (String, Vec<Token>)>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored factoids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Is the store empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Store for MemoryStore {
    fn store(&mut self, id: Uuid, tokens: &[Token], owner_topic: &str) -> Result<()> {
        self.facts
            .insert(id, (owner_topic.to_string(), tokens.to_vec()));
        Ok(())
    }

    fn retrieve(&self, id: Uuid) -> Result<Option<Vec<Token>>> {
        Ok(self.facts.get(&id).map(|(_, tokens)| tokens.clone()))
    }

    fn delete(&mut self, id: Uuid, owner_topic: &str) -> Result<()> {
        match self.facts.get(&id) {
            Some((topic, _)) if topic == owner_topic => {
                self.facts.remove(&id);
                Ok(())
            }
            Some(_) => Err(Error::storage(format!(
                "factoid {id} is not owned by topic '{owner_topic}'"
            ))),
            None => Err(Error::storage(format!("no factoid {id}"))),
        }
    }
}
