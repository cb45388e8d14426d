//! Per-day orchestration of the availability pipeline.

use chrono::{DateTime, Days, Utc};
use chrono_tz::Tz;
use confab_core::id::IdGenerator;
use confab_core::model::{BusyInterval, DailySlots, Slot, WorkPreferences};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::timezone::{materialize_local, TimeZoneResolver};

use super::conflict::filter_conflicts;
use super::slots::generate_slots;
use super::window::resolve_work_window;

/// Inputs of one availability query.
#[derive(Debug, Clone)]
pub struct AvailabilityRequest<'a> {
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    /// Slot length in minutes.
    pub slot_duration: u32,
    pub preferences: &'a WorkPreferences,
    /// IANA timezone identifier of the host whose hours apply.
    pub host_timezone: &'a str,
    /// IANA timezone identifier the slots are expressed in.
    pub viewer_timezone: &'a str,
    /// Busy intervals of the viewer; overlapping slots are dropped.
    pub busy: &'a [BusyInterval],
}

/// Result of one availability query: the flat chronological slot list plus
/// the same slots keyed by host-local calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityPlan {
    pub slots: Vec<Slot>,
    pub by_date: DailySlots,
}

/// Busy intervals deduplicated at minute precision, keeping first
/// occurrences in order.
fn dedup_busy(busy: &[BusyInterval]) -> Vec<BusyInterval> {
    let mut seen: Vec<(i64, i64)> = Vec::with_capacity(busy.len());
    let mut unique = Vec::with_capacity(busy.len());
    for interval in busy {
        let key = (
            interval.start.timestamp() / 60,
            interval.end.timestamp() / 60,
        );
        if !seen.contains(&key) {
            seen.push(key);
            unique.push(*interval);
        }
    }
    unique
}

/// ## Summary
/// Computes every bookable slot between `window_start` and `window_end`.
///
/// Each host-local calendar day spanned by the window is resolved to its
/// workable viewer-timezone window, quantized into slots, and stripped of
/// busy-interval collisions. A window contained in a single calendar day is
/// resolved once with both edge flags set; otherwise the first day gets
/// round-up truncation, the last day gets the window end as its boundary,
/// and days in between run full working hours. Days without workable time
/// contribute empty date entries rather than errors.
///
/// ## Errors
///
/// - `EngineError::InvalidSlotDuration` for a zero slot duration.
/// - `EngineError::InvalidWindow` if the window end is not after the start.
/// - `EngineError::InvalidTimezone` for an unrecognized zone identifier.
pub fn plan_availability(
    request: &AvailabilityRequest<'_>,
    ids: &dyn IdGenerator,
) -> EngineResult<AvailabilityPlan> {
    if request.slot_duration == 0 {
        return Err(EngineError::InvalidSlotDuration(request.slot_duration));
    }
    if request.window_end <= request.window_start {
        return Err(EngineError::InvalidWindow {
            start: request.window_start,
            end: request.window_end,
        });
    }

    let mut resolver = TimeZoneResolver::new();
    let host = resolver.resolve(request.host_timezone)?;
    let viewer = resolver.resolve(request.viewer_timezone)?;

    let busy = dedup_busy(request.busy);

    let start_local = request.window_start.with_timezone(&host);
    let start_date = start_local.date_naive();
    let end_date = request.window_end.with_timezone(&host).date_naive();
    let day_count = u64::try_from((end_date - start_date).num_days()).unwrap_or(0);

    tracing::debug!(
        window_start = %request.window_start,
        window_end = %request.window_end,
        slot_duration = request.slot_duration,
        days = day_count + 1,
        busy = busy.len(),
        "Planning availability"
    );

    let mut plan = AvailabilityPlan::default();

    if day_count == 0 {
        let day_slots = resolve_day(
            request,
            request.window_start,
            host,
            viewer,
            &busy,
            true,
            true,
            ids,
        )?;
        plan.slots.extend(day_slots.clone());
        plan.by_date.insert(start_date, day_slots);
        return Ok(plan);
    }

    // Step by host-local calendar dates, not 24-hour increments: across a
    // DST transition the two drift apart and days get doubled or skipped.
    // Each later day re-materializes the window-start wall clock on its own
    // host-local date.
    for day in 0..=day_count {
        let date = start_date + Days::new(day);
        let anchor = if day == 0 {
            request.window_start
        } else {
            materialize_local(host, date.and_time(start_local.time()))?.with_timezone(&Utc)
        };
        let viewer_date = anchor.with_timezone(&viewer).date_naive();
        let day_busy: Vec<BusyInterval> = busy
            .iter()
            .filter(|b| b.start.with_timezone(&viewer).date_naive() == viewer_date)
            .copied()
            .collect();

        let first_day = day == 0;
        let last_day = day == day_count;
        let day_slots = resolve_day(
            request, anchor, host, viewer, &day_busy, first_day, last_day, ids,
        )?;
        plan.slots.extend(day_slots.clone());
        plan.by_date.insert(date, day_slots);
    }

    Ok(plan)
}

#[expect(clippy::too_many_arguments, reason = "internal per-day helper")]
fn resolve_day(
    request: &AvailabilityRequest<'_>,
    anchor: DateTime<Utc>,
    host: Tz,
    viewer: Tz,
    busy: &[BusyInterval],
    first_day: bool,
    last_day: bool,
    ids: &dyn IdGenerator,
) -> EngineResult<Vec<Slot>> {
    let boundary = last_day.then_some(request.window_end);
    let Some(window) = resolve_work_window(
        anchor,
        request.preferences,
        host,
        viewer,
        request.slot_duration,
        first_day,
        last_day,
        boundary,
    )?
    else {
        return Ok(Vec::new());
    };

    let candidates = generate_slots(&window, request.slot_duration, ids);
    Ok(filter_conflicts(candidates, busy))
}
