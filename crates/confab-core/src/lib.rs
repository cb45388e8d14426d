//! Shared data model for the confab availability and recurrence engine.
//!
//! This crate holds plain records only: meeting templates, attendees,
//! preferences, busy intervals, and slots. All timezone math and recurrence
//! evaluation lives in `confab-engine`.

pub mod error;
pub mod id;
pub mod model;
