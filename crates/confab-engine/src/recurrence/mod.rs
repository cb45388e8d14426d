//! Series creation: recurrence expansion and attendee cloning.

mod cloner;
mod expander;

pub use cloner::{clone_series, ClonedSeries};
pub use expander::{expand_occurrences, expand_windows, MAX_OCCURRENCES};
