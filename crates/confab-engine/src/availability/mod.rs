//! Availability query path: work-window resolution, slot generation,
//! conflict filtering, and the per-day planner that orchestrates them.

mod conflict;
mod planner;
mod slots;
mod window;

pub use conflict::filter_conflicts;
pub use planner::{plan_availability, AvailabilityPlan, AvailabilityRequest};
pub use slots::generate_slots;
pub use window::{custom_work_times, resolve_work_window, CustomWorkTimes, WorkWindow};
