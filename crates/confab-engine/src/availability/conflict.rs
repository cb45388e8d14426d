//! Removal of candidate slots that collide with busy intervals.

use chrono::{DateTime, TimeZone};
use confab_core::model::{BusyInterval, Slot};

/// Unix timestamp floored to the minute; conflict checks ignore seconds.
fn minute_floor<T: TimeZone>(dt: &DateTime<T>) -> i64 {
    let ts = dt.timestamp();
    ts - ts.rem_euclid(60)
}

fn conflicts(slot: &Slot, busy: &BusyInterval) -> bool {
    let slot_start = minute_floor(&slot.start);
    let slot_end = minute_floor(&slot.end);
    let busy_start = minute_floor(&busy.start);
    let busy_end = minute_floor(&busy.end);

    // The one-minute shrink lets a slot touch a busy interval's boundary
    // without being rejected.
    let shrunk_start = busy_start + 60;
    let shrunk_end = busy_end - 60;

    let end_inside = slot_end >= shrunk_start && slot_end <= shrunk_end;
    let start_inside = slot_start >= shrunk_start && slot_start <= shrunk_end;
    let exact_match = slot_start == busy_start && slot_end == busy_end;

    end_inside || start_inside || exact_match
}

/// ## Summary
/// Drops candidate slots that overlap any busy interval, preserving the
/// relative order of the survivors.
///
/// A slot is removed when its start or end falls inside the busy interval
/// shrunk by one minute on each side, or when it matches the busy interval
/// exactly. Comparison is at minute precision.
#[must_use]
pub fn filter_conflicts(candidates: Vec<Slot>, busy: &[BusyInterval]) -> Vec<Slot> {
    if busy.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|slot| {
            let blocked = busy.iter().any(|interval| conflicts(slot, interval));
            if blocked {
                tracing::trace!(slot_start = %slot.start, slot_end = %slot.end, "Slot blocked by busy interval");
            }
            !blocked
        })
        .collect()
}
