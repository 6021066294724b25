//! TDD exercises: an in-memory note service with tagging and search, plus
//! small calculator and string utilities.

pub mod exercise;
pub mod logging;
pub mod model;
pub mod service;

pub use exercise::discount::{discount_rate, discounted_price, DiscountError};
pub use exercise::sum::{sum_ignoring_over_limit, SUM_CEILING};
pub use exercise::text::reverse;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteError, NoteId, NoteResult};
pub use model::tag::{normalize_tag, normalize_tags};
pub use service::note_service::NoteService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
