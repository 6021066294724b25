//! Domain model for the note service.
//!
//! # Responsibility
//! - Define the note entity and its validation rules.
//! - Own tag normalization shared by model and service.
//!
//! # Invariants
//! - Every note is identified by a service-issued `NoteId`.
//! - Deletion is a hard delete; ids are still never reissued.

pub mod note;
pub mod tag;
