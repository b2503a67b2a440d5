//! Tag store: current value, quality, and identity for every known point.
//!
//! Client identifiers are assigned on first reference, in reference order,
//! and never change for the lifetime of the store. Snapshot order equals
//! first-reference order; both properties are part of the wire contract.

use std::collections::HashMap;

use synlink_proto::{QualityFlags, TagItem, TagParameters, TagRecord, TagValue};

#[derive(Debug, Clone, PartialEq)]
struct TagEntry {
    name: String,
    client_id: u32,
    value: TagValue,
    quality: QualityFlags,
    description: String,
}

impl TagEntry {
    fn record(&self) -> TagRecord {
        TagRecord {
            path: self.name.clone(),
            value: self.value.clone(),
            // Polarity inversion: internal failed bit set means transmitted
            // quality false.
            quality: !self.quality.is_failed(),
            kind: self.value.kind(),
            parameters: TagParameters {
                value: TagItem {
                    client_id: self.client_id,
                    alarmed: self.quality.is_alarmed(),
                    description: self.description.clone(),
                },
            },
        }
    }
}

/// Holds every known tag in first-reference order.
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    entries: Vec<TagEntry>,
    index: HashMap<String, usize>,
}

impl TagStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a tag.
    ///
    /// Unseen names get the next client identifier in sequence; known names
    /// keep their identifier and have value/quality/description updated in
    /// place. Passing `None` for the description keeps the existing one (or
    /// defaults a new entry's description to the tag name). An empty name is
    /// a no-op and returns `None`.
    pub fn upsert(
        &mut self,
        name: &str,
        value: TagValue,
        quality: QualityFlags,
        description: Option<&str>,
    ) -> Option<u32> {
        if name.is_empty() {
            return None;
        }

        if let Some(&slot) = self.index.get(name) {
            let entry = &mut self.entries[slot];
            entry.value = value;
            entry.quality = quality;
            if let Some(description) = description {
                entry.description = description.to_owned();
            }
            return Some(entry.client_id);
        }

        let client_id = (self.entries.len() as u32) + 1;
        self.entries.push(TagEntry {
            name: name.to_owned(),
            client_id,
            value,
            quality,
            description: description.unwrap_or(name).to_owned(),
        });
        self.index.insert(name.to_owned(), self.entries.len() - 1);
        Some(client_id)
    }

    /// Bulk-store `(name, value)` pairs with quality cleared to good.
    ///
    /// Descriptions are left untouched. Empty names are skipped.
    pub fn bulk_store<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = (String, TagValue)>,
    {
        for (name, value) in values {
            self.upsert(&name, value, QualityFlags::empty(), None);
        }
    }

    /// Current value of a tag, if known.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.index.get(name).map(|&slot| &self.entries[slot].value)
    }

    /// Number of known tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tags are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all tags and restart the identifier sequence at one.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// One wire record per known tag, in first-reference order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TagRecord> {
        self.entries.iter().map(TagEntry::record).collect()
    }

    /// The wire record for a single tag, if known.
    #[must_use]
    pub fn record_for(&self, name: &str) -> Option<TagRecord> {
        self.index.get(name).map(|&slot| self.entries[slot].record())
    }
}
