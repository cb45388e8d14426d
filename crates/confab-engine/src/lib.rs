//! Availability and recurrence engine for meeting-assist scheduling.
//!
//! Two independent computation paths share the `confab-core` data model:
//!
//! - **Series creation**: [`recurrence::expand_windows`] turns a recurring
//!   meeting template into future negotiation windows,
//!   [`recurrence::expand_occurrences`] materializes occurrence templates,
//!   and [`recurrence::clone_series`] clones attendees and their preferred
//!   time ranges onto each occurrence.
//! - **Availability query**: [`availability::plan_availability`] resolves a
//!   host's working hours per day, quantizes them into fixed-duration slots
//!   in the viewer's timezone, and removes slots that collide with busy
//!   intervals.
//!
//! Every function is pure and synchronous; the only non-determinism is id
//! generation, injected through `confab_core::id::IdGenerator`.

pub mod availability;
pub mod error;
pub mod recurrence;
pub mod timezone;

pub use error::{EngineError, EngineResult};
