//! Note domain model.
//!
//! # Responsibility
//! - Define the note entity owned by `NoteService`.
//! - Validate title/text presence on every write.
//! - Keep the tag set normalized (trimmed, lowercase, unique).
//!
//! # Invariants
//! - `id` and `creation_date` never change after construction.
//! - Equality and hashing consider `id` only.
//! - Mutation is crate-private; callers outside the service only read.

use crate::model::tag::normalize_tag;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Service-assigned note identifier. Starts at 1 and is never reused.
pub type NoteId = u64;

pub type NoteResult<T> = Result<T, NoteError>;

/// Validation error for note writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// A required argument was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// One titled, dated text record with a tag set.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    id: NoteId,
    title: String,
    text: String,
    /// Local calendar date at construction, serialized as `YYYY-MM-DD`.
    creation_date: NaiveDate,
    tags: BTreeSet<String>,
}

impl Note {
    /// Creates a note dated today with an empty tag set.
    ///
    /// # Errors
    /// - `NoteError::InvalidArgument` when `title` or `text` is absent.
    pub(crate) fn new(id: NoteId, title: Option<&str>, text: Option<&str>) -> NoteResult<Self> {
        let (Some(title), Some(text)) = (title, text) else {
            return Err(NoteError::InvalidArgument("title and text must not be absent"));
        };

        Ok(Self {
            id,
            title: title.to_string(),
            text: text.to_string(),
            creation_date: Local::now().date_naive(),
            tags: BTreeSet::new(),
        })
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// Read-only view of the normalized tag set.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Case-insensitive tag membership check. Blank input is never a member.
    pub fn has_tag(&self, tag: &str) -> bool {
        normalize_tag(tag).is_some_and(|tag| self.tags.contains(&tag))
    }

    /// Returns whether `query` occurs in title or text, ignoring case.
    ///
    /// An empty query matches every note.
    pub fn matches_text(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.text.to_lowercase().contains(&needle)
    }

    pub(crate) fn set_title(&mut self, title: Option<&str>) -> NoteResult<()> {
        let title = title.ok_or(NoteError::InvalidArgument("title must not be absent"))?;
        self.title = title.to_string();
        Ok(())
    }

    pub(crate) fn set_text(&mut self, text: Option<&str>) -> NoteResult<()> {
        let text = text.ok_or(NoteError::InvalidArgument("text must not be absent"))?;
        self.text = text.to_string();
        Ok(())
    }

    /// Adds a tag; absent, empty and blank values are ignored.
    pub(crate) fn add_tag(&mut self, tag: Option<&str>) {
        if let Some(tag) = tag.and_then(normalize_tag) {
            self.tags.insert(tag);
        }
    }

    /// Removes a tag, returning whether it was present.
    pub(crate) fn remove_tag(&mut self, tag: &str) -> bool {
        normalize_tag(tag).is_some_and(|tag| self.tags.remove(&tag))
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
