// src/domain/tag.rs
use crate::constants::MAX_TAG_LENGTH;
use crate::domain::ValidationError;
use serde::Serialize;
use tracing::{debug, instrument};

/// A skill tag on a draft record.
///
/// `id` stays empty until the containing record is persisted by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: String,
    pub value: String,
}

impl Tag {
    fn pending(value: String) -> Self {
        Self {
            id: String::new(),
            value,
        }
    }
}

/// Draft tag collection of one record being authored.
///
/// Tags are kept in insertion order and are unique case-insensitively.
/// Count limits are a submission concern of the owning draft, see
/// [`crate::application::draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<Tag>,
    max_len: usize,
}

impl Default for TagSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSet {
    pub fn new() -> Self {
        Self::with_max_len(MAX_TAG_LENGTH)
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            tags: Vec::new(),
            max_len,
        }
    }

    /// Seed from persisted tag strings, e.g. when editing an existing record.
    ///
    /// Persisted values are trusted as-is and not re-validated.
    pub fn with_persisted<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = values
            .into_iter()
            .map(|v| Tag::pending(v.into()))
            .collect();
        self
    }

    /// Add a comma separated batch of tags.
    ///
    /// Pieces are trimmed and lowercased, empty pieces dropped and repeats
    /// within the batch collapsed. The batch is all-or-nothing: any tag
    /// longer than the limit or already present rejects every tag in it.
    #[instrument(level = "debug", skip(self), fields(existing = self.tags.len()))]
    pub fn add_tags(&mut self, raw_input: &str) -> Result<Vec<Tag>, ValidationError> {
        let batch = normalize_batch(raw_input);

        let too_long: Vec<String> = batch
            .iter()
            .filter(|t| t.chars().count() > self.max_len)
            .cloned()
            .collect();
        if !too_long.is_empty() {
            debug!(?too_long, "Rejecting tag batch");
            return Err(ValidationError::TagTooLong {
                tags: too_long,
                max: self.max_len,
            });
        }

        let duplicates: Vec<String> = batch
            .iter()
            .filter(|t| self.contains(t))
            .cloned()
            .collect();
        if !duplicates.is_empty() {
            debug!(?duplicates, "Rejecting tag batch");
            return Err(ValidationError::DuplicateTag(duplicates));
        }

        let added: Vec<Tag> = batch.into_iter().map(Tag::pending).collect();
        self.tags.extend(added.iter().cloned());
        debug!(added = added.len(), "Tag batch accepted");
        Ok(added)
    }

    /// Remove the tag at `index`; out of range is a no-op.
    pub fn remove_tag(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, value: &str) -> bool {
        let needle = value.to_lowercase();
        self.tags.iter().any(|t| t.value.to_lowercase() == needle)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Display values in insertion order, as sent to the API.
    pub fn values(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.value.clone()).collect()
    }
}

fn normalize_batch(raw_input: &str) -> Vec<String> {
    let mut batch: Vec<String> = Vec::new();
    for piece in raw_input.split(',') {
        let tag = piece.trim().to_lowercase();
        if !tag.is_empty() && !batch.contains(&tag) {
            batch.push(tag);
        }
    }
    batch
}
