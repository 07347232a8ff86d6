//! Topic/test DTOs derived from the tree listing.
//!
//! - `TestReference`: display name + original path, used to fetch content
//! - `Topic`: display name + ordered test list
//! - `Topics`: topic-key → `Topic` map that serializes in first-seen order
//! - `TopicsResponse`: `{ success: true, data: ... }` envelope

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TestReference {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub tests: Vec<TestReference>,
}

/// Mapping from raw topic key to `Topic`.
///
/// The frontend renders topics in the order the repository lists them, so
/// this keeps entries in a `Vec` and serializes as a JSON object in
/// insertion order. Lookups scan linearly; a repository has tens of topics,
/// not thousands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topics {
    entries: Vec<(String, Topic)>,
}

impl Topics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the topic for `key`, creating it with `make` on first sight.
    ///
    /// An existing topic is returned untouched, so the display name chosen
    /// when the key was first seen is never overwritten.
    pub fn get_or_insert_with(
        &mut self,
        key: &str,
        make: impl FnOnce() -> Topic,
    ) -> &mut Topic {
        let pos = match self.entries.iter().position(|(k, _)| k == key) {
            Some(pos) => pos,
            None => {
                self.entries.push((key.to_string(), make()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }

    pub fn get(&self, key: &str) -> Option<&Topic> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, topic)| topic)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Topic)> {
        self.entries.iter().map(|(k, topic)| (k.as_str(), topic))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Topics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, topic) in &self.entries {
            map.serialize_entry(key, topic)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub success: bool,
    pub data: Topics,
}
