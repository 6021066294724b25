//! Core use-case services.
//!
//! # Responsibility
//! - Expose CRUD, tagging and search over in-memory notes.
//! - Keep callers decoupled from the storage map.

pub mod note_service;
