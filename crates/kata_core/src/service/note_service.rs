//! Note use-case service.
//!
//! # Responsibility
//! - Own every `Note` and issue ids.
//! - Provide create/get/list/update/delete, tagging and search APIs.
//!
//! # Invariants
//! - Every key in `notes` equals the stored note's `id`.
//! - `next_id` is strictly greater than any id ever issued; ids are never
//!   reused, even after deletion.
//! - Not-found is reported through `Option`/`bool`, never as an error.
//! - Log lines carry ids and counts only, never note content.

use crate::model::note::{Note, NoteId, NoteResult};
use crate::model::tag::normalize_tag;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

const FIRST_NOTE_ID: NoteId = 1;

/// In-memory note repository with tagging and linear-scan search.
#[derive(Debug)]
pub struct NoteService {
    notes: BTreeMap<NoteId, Note>,
    next_id: NoteId,
}

impl Default for NoteService {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteService {
    /// Creates an empty service whose first note gets id 1.
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            next_id: FIRST_NOTE_ID,
        }
    }

    /// Creates and stores a note, returning a snapshot of it.
    ///
    /// `tags == None` means "no tags". Blank tag values are skipped.
    ///
    /// # Errors
    /// - `NoteError::InvalidArgument` when `title` or `text` is absent. The id
    ///   counter does not advance in that case.
    pub fn add_note(
        &mut self,
        title: Option<&str>,
        text: Option<&str>,
        tags: Option<&[&str]>,
    ) -> NoteResult<Note> {
        let id = self.next_id;
        let mut note = Note::new(id, title, text)?;
        for tag in tags.unwrap_or_default().iter().copied() {
            note.add_tag(Some(tag));
        }

        self.next_id += 1;
        self.notes.insert(id, note.clone());
        debug!(
            "event=note_add module=notes status=ok id={} tag_count={}",
            id,
            note.tags().len()
        );
        Ok(note)
    }

    /// Gets one note by id.
    pub fn get_note_by_id(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    /// Returns a snapshot of all notes in ascending id order.
    pub fn get_all_notes(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }

    /// Replaces title and text of an existing note.
    ///
    /// Returns `Ok(false)` when the note does not exist.
    ///
    /// # Errors
    /// - `NoteError::InvalidArgument` when either value is absent. Both values
    ///   are checked before the note is touched.
    pub fn update_note_text(
        &mut self,
        id: NoteId,
        new_title: Option<&str>,
        new_text: Option<&str>,
    ) -> NoteResult<bool> {
        let Some(note) = self.notes.get_mut(&id) else {
            debug!("event=note_update module=notes status=not_found id={id}");
            return Ok(false);
        };

        let mut updated = note.clone();
        updated.set_title(new_title)?;
        updated.set_text(new_text)?;
        *note = updated;
        debug!("event=note_update module=notes status=ok id={id}");
        Ok(true)
    }

    /// Adds a tag only if the note exists and does not already carry it.
    ///
    /// Returns `false` for a missing note, an already-present tag (compared
    /// case-insensitively) and a blank tag alike; callers that need to tell
    /// these apart must check `get_note_by_id` first.
    pub fn add_tag_to_note(&mut self, id: NoteId, tag: &str) -> bool {
        let Some(note) = self.notes.get_mut(&id) else {
            return false;
        };
        if normalize_tag(tag).is_none() || note.has_tag(tag) {
            return false;
        }

        note.add_tag(Some(tag));
        debug!("event=note_tag_add module=notes status=ok id={id}");
        true
    }

    /// Removes a tag if the note exists and carries it.
    pub fn remove_tag_from_note(&mut self, id: NoteId, tag: &str) -> bool {
        let removed = self
            .notes
            .get_mut(&id)
            .is_some_and(|note| note.remove_tag(tag));
        if removed {
            debug!("event=note_tag_remove module=notes status=ok id={id}");
        }
        removed
    }

    /// Deletes a note, returning whether it existed.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let existed = self.notes.remove(&id).is_some();
        debug!(
            "event=note_delete module=notes status={} id={}",
            if existed { "ok" } else { "not_found" },
            id
        );
        existed
    }

    /// Finds notes whose title or text contains `query`, ignoring case.
    ///
    /// An empty query matches every note.
    pub fn find_notes_by_text(&self, query: &str) -> Vec<Note> {
        let hits: Vec<Note> = self
            .notes
            .values()
            .filter(|note| note.matches_text(query))
            .cloned()
            .collect();
        debug!(
            "event=note_search module=notes mode=text status=ok hits={}",
            hits.len()
        );
        hits
    }

    /// Finds notes carrying every tag in `search_tags`, ignoring case.
    ///
    /// An empty search set returns no notes rather than all of them. A blank
    /// search tag can never be satisfied, so it also yields no notes.
    pub fn find_notes_by_tags<S: AsRef<str>>(&self, search_tags: &[S]) -> Vec<Note> {
        if search_tags.is_empty() {
            return Vec::new();
        }

        let Some(wanted) = search_tags
            .iter()
            .map(|tag| normalize_tag(tag.as_ref()))
            .collect::<Option<BTreeSet<String>>>()
        else {
            return Vec::new();
        };

        let hits: Vec<Note> = self
            .notes
            .values()
            .filter(|note| wanted.is_subset(note.tags()))
            .cloned()
            .collect();
        debug!(
            "event=note_search module=notes mode=tags status=ok tag_count={} hits={}",
            wanted.len(),
            hits.len()
        );
        hits
    }

    /// Returns the union of tags across all stored notes.
    pub fn get_all_tags(&self) -> BTreeSet<String> {
        self.notes
            .values()
            .flat_map(|note| note.tags().iter().cloned())
            .collect()
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
