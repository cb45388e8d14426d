//! Quantization of a resolved work window into fixed-duration slots.

use chrono::Duration;
use confab_core::id::IdGenerator;
use confab_core::model::Slot;

use super::window::WorkWindow;

/// ## Summary
/// Emits candidate slots of `slot_duration` minutes covering the window.
///
/// Slots start at `window.start + k * slot_duration` for every `k` with
/// `k * slot_duration < total workable minutes`, so they are contiguous,
/// non-overlapping and chronological; the final slot may extend past a
/// window end that is not a slot multiple. A non-positive window yields no
/// slots.
#[must_use]
pub fn generate_slots(window: &WorkWindow, slot_duration: u32, ids: &dyn IdGenerator) -> Vec<Slot> {
    let total_minutes = (window.end - window.start).num_minutes();
    if total_minutes <= 0 {
        tracing::trace!(
            start = %window.start,
            end = %window.end,
            "Empty or inverted work window, no slots"
        );
        return Vec::new();
    }

    let step = i64::from(slot_duration);
    let mut slots = Vec::with_capacity(usize::try_from(total_minutes / step + 1).unwrap_or(0));
    let mut offset = 0;
    while offset < total_minutes {
        let start = window.start + Duration::minutes(offset);
        slots.push(Slot {
            id: ids.next_id(),
            start: start.fixed_offset(),
            end: (start + Duration::minutes(step)).fixed_offset(),
        });
        offset += step;
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use confab_core::id::SequenceIds;
    use uuid::Uuid;

    fn window(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> WorkWindow {
        let tz = chrono_tz::UTC;
        WorkWindow {
            start: tz.with_ymd_and_hms(2026, 3, 4, start_h, start_m, 0).unwrap(),
            end: tz.with_ymd_and_hms(2026, 3, 4, end_h, end_m, 0).unwrap(),
            day_of_week: 3,
        }
    }

    #[test]
    fn full_work_day_is_fully_quantized() {
        // 8 hours at 30 minutes: 16 slots, not 1. Guards against bounding
        // the loop by the slot duration instead of total minutes.
        let ids = SequenceIds::starting_at(0);
        let slots = generate_slots(&window(9, 0, 17, 0), 30, &ids);

        assert_eq!(slots.len(), 16);
        for pair in slots.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(slots[0].start.hour(), 9);
        assert_eq!(slots[15].end.hour(), 17);
    }

    #[test]
    fn slot_ids_come_from_the_injected_generator() {
        let ids = SequenceIds::starting_at(40);
        let slots = generate_slots(&window(9, 0, 10, 0), 30, &ids);
        assert_eq!(slots[0].id, Uuid::from_u128(40));
        assert_eq!(slots[1].id, Uuid::from_u128(41));
    }

    #[test]
    fn ragged_tail_still_emits_a_final_slot() {
        // 45 workable minutes at 30: k=0 and k=30 both start inside the
        // window; the second slot runs past the end.
        let ids = SequenceIds::starting_at(0);
        let slots = generate_slots(&window(9, 0, 9, 45), 30, &ids);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].end.minute(), 0);
        assert_eq!(slots[1].end.hour(), 10);
    }

    #[test]
    fn inverted_window_yields_nothing() {
        let ids = SequenceIds::starting_at(0);
        assert!(generate_slots(&window(17, 0, 9, 0), 30, &ids).is_empty());
        assert!(generate_slots(&window(9, 0, 9, 0), 30, &ids).is_empty());
    }
}
