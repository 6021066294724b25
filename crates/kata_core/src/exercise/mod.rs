//! Stand-alone TDD exercises.
//!
//! Each module is independent of the note service and of each other.

pub mod discount;
pub mod sum;
pub mod text;
