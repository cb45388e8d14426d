//! Resolution of one calendar day's workable window.
//!
//! The resolver is the single owner of first/last-day truncation: both the
//! slot enumerator and the custom work-time summary go through it.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use confab_core::model::{ClockTime, WorkPreferences};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::timezone::{at_viewer_clock, clock_of, host_clock_in_viewer};

/// One day's workable window, as viewer-zone instants on the day's
/// viewer-local date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    /// ISO day of week of the resolved day, host timezone basis.
    pub day_of_week: u8,
}

/// Single-range summary of a day's workable window, as `HH:mm` clock times
/// in the viewer's timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWorkTimes {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub day_of_week: u8,
}

/// Rounds minutes-into-day up to the next slot boundary within the hour.
/// Rounding past :59 rolls to the top of the next hour.
fn round_up_to_step(minutes_into_day: u32, step: u32) -> u32 {
    let hour = minutes_into_day / 60;
    let minute = minutes_into_day % 60;
    if minute == 0 || minute % step == 0 {
        return minutes_into_day;
    }
    let rounded = minute.div_ceil(step) * step;
    if rounded >= 60 {
        (hour + 1) * 60
    } else {
        hour * 60 + rounded
    }
}

/// Rounds minutes-into-day down to the previous slot boundary within the
/// hour.
fn round_down_to_step(minutes_into_day: u32, step: u32) -> u32 {
    let hour = minutes_into_day / 60;
    let minute = minutes_into_day % 60;
    hour * 60 + (minute / step) * step
}

/// ## Summary
/// Resolves the effective workable window of one calendar day, expressed in
/// the viewer's timezone.
///
/// `anchor` is the instant marking this day within the overall window (the
/// window start shifted by whole days). The day of week is always resolved
/// on the host-timezone side of the anchor, for edge and middle days alike,
/// so the preference row chosen never depends on the viewer's zone.
///
/// - On the first day the start is the anchor's viewer-local clock rounded
///   up to the next slot boundary, snapped forward to the work-day start if
///   the window opens earlier; a window opening after the host work-day end
///   yields `None`.
/// - On the last day a `boundary` that precedes the work-day end replaces
///   the end, rounded down to the previous slot boundary. This applies to
///   single-day windows (first and last at once) as well.
/// - Middle days run from work start to work end.
///
/// ## Errors
///
/// Returns an error only when a wall clock cannot be materialized in its
/// zone (`EngineError::NonExistentLocalTime`).
#[expect(clippy::too_many_arguments, reason = "mirrors the per-day call site")]
pub fn resolve_work_window(
    anchor: DateTime<Utc>,
    preferences: &WorkPreferences,
    host: Tz,
    viewer: Tz,
    slot_duration: u32,
    first_day: bool,
    last_day: bool,
    boundary: Option<DateTime<Utc>>,
) -> EngineResult<Option<WorkWindow>> {
    let host_local = anchor.with_timezone(&host);
    let day_of_week = u8::try_from(host_local.weekday().number_from_monday()).unwrap_or(1);

    let work_start_host = preferences.start_for(day_of_week);
    let work_end_host = preferences.end_for(day_of_week);

    if first_day && host_local.time() > work_end_host.naive_time() {
        tracing::trace!(
            %anchor,
            day_of_week,
            work_end = %work_end_host,
            "Window opens after host work end, no workable window"
        );
        return Ok(None);
    }

    let work_start_viewer = host_clock_in_viewer(anchor, work_start_host, host, viewer)?;
    let work_end_viewer = host_clock_in_viewer(anchor, work_end_host, host, viewer)?;

    let start_minutes = if first_day {
        if host_local.time() < work_start_host.naive_time() {
            work_start_viewer.minutes_from_midnight()
        } else {
            let viewer_local = anchor.with_timezone(&viewer);
            round_up_to_step(
                viewer_local.hour() * 60 + viewer_local.minute(),
                slot_duration,
            )
        }
    } else {
        work_start_viewer.minutes_from_midnight()
    };

    let mut end_minutes = work_end_viewer.minutes_from_midnight();
    if last_day {
        if let Some(boundary) = boundary {
            let boundary_viewer = boundary.with_timezone(&viewer);
            let work_end_instant = at_viewer_clock(anchor, end_minutes, viewer)?;
            if boundary_viewer < work_end_instant {
                end_minutes = round_down_to_step(
                    boundary_viewer.hour() * 60 + boundary_viewer.minute(),
                    slot_duration,
                );
            }
        }
    }

    let start = at_viewer_clock(anchor, start_minutes, viewer)?;
    let end = at_viewer_clock(anchor, end_minutes, viewer)?;

    tracing::trace!(
        %anchor,
        day_of_week,
        start = %start,
        end = %end,
        first_day,
        last_day,
        "Resolved work window"
    );
    Ok(Some(WorkWindow {
        start,
        end,
        day_of_week,
    }))
}

/// ## Summary
/// Single-range summary of a day's workable window (`HH:mm` viewer clock
/// times plus ISO day of week), backed by the same resolution as slot
/// enumeration.
///
/// ## Errors
///
/// Propagates `resolve_work_window` errors.
#[expect(clippy::too_many_arguments, reason = "mirrors the per-day call site")]
pub fn custom_work_times(
    anchor: DateTime<Utc>,
    preferences: &WorkPreferences,
    host: Tz,
    viewer: Tz,
    slot_duration: u32,
    first_day: bool,
    last_day: bool,
    boundary: Option<DateTime<Utc>>,
) -> EngineResult<Option<CustomWorkTimes>> {
    let Some(window) = resolve_work_window(
        anchor,
        preferences,
        host,
        viewer,
        slot_duration,
        first_day,
        last_day,
        boundary,
    )?
    else {
        return Ok(None);
    };

    Ok(Some(CustomWorkTimes {
        start_time: clock_of(&window.start)?,
        end_time: clock_of(&window.end)?,
        day_of_week: window.day_of_week,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use confab_core::model::DayTime;

    fn prefs(day: u8, start: (u8, u8), end: (u8, u8)) -> WorkPreferences {
        WorkPreferences {
            user_id: None,
            start_times: vec![DayTime {
                day,
                hour: start.0,
                minutes: start.1,
            }],
            end_times: vec![DayTime {
                day,
                hour: end.0,
                minutes: end.1,
            }],
        }
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round_up_to_step(9 * 60 + 15, 30), 9 * 60 + 30);
        assert_eq!(round_up_to_step(9 * 60 + 45, 30), 10 * 60);
        assert_eq!(round_up_to_step(9 * 60, 30), 9 * 60);
        assert_eq!(round_up_to_step(9 * 60 + 5, 15), 9 * 60 + 15);
        assert_eq!(round_down_to_step(9 * 60 + 45, 30), 9 * 60 + 30);
        assert_eq!(round_down_to_step(9 * 60 + 29, 30), 9 * 60);
    }

    #[test]
    fn middle_day_uses_wall_clock_conversion() {
        // Host UTC works 09:00-17:00; fixed UTC-5 viewer sees 04:00-12:00.
        // 2026-03-04 is a Wednesday.
        let anchor = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
        let window = resolve_work_window(
            anchor,
            &prefs(3, (9, 0), (17, 0)),
            chrono_tz::UTC,
            chrono_tz::Etc::GMTPlus5,
            30,
            false,
            false,
            None,
        )
        .unwrap()
        .expect("workable window");

        assert_eq!(window.day_of_week, 3);
        assert_eq!((window.start.hour(), window.start.minute()), (4, 0));
        assert_eq!((window.end.hour(), window.end.minute()), (12, 0));
    }

    #[test]
    fn first_day_rounds_start_up_to_slot_boundary() {
        let anchor = Utc.with_ymd_and_hms(2026, 3, 4, 9, 15, 0).unwrap();
        let window = resolve_work_window(
            anchor,
            &prefs(3, (9, 0), (17, 0)),
            chrono_tz::UTC,
            chrono_tz::UTC,
            30,
            true,
            false,
            None,
        )
        .unwrap()
        .expect("workable window");

        assert_eq!((window.start.hour(), window.start.minute()), (9, 30));
        assert_eq!((window.end.hour(), window.end.minute()), (17, 0));
    }

    #[test]
    fn first_day_before_work_start_snaps_to_work_start() {
        let anchor = Utc.with_ymd_and_hms(2026, 3, 4, 6, 40, 0).unwrap();
        let window = resolve_work_window(
            anchor,
            &prefs(3, (9, 0), (17, 0)),
            chrono_tz::UTC,
            chrono_tz::UTC,
            30,
            true,
            false,
            None,
        )
        .unwrap()
        .expect("workable window");

        assert_eq!((window.start.hour(), window.start.minute()), (9, 0));
    }

    #[test]
    fn first_day_after_work_end_has_no_window() {
        let anchor = Utc.with_ymd_and_hms(2026, 3, 4, 18, 0, 0).unwrap();
        let window = resolve_work_window(
            anchor,
            &prefs(3, (9, 0), (17, 0)),
            chrono_tz::UTC,
            chrono_tz::UTC,
            30,
            true,
            false,
            None,
        )
        .unwrap();

        assert!(window.is_none());
    }

    #[test]
    fn last_day_boundary_is_rounded_down() {
        let anchor = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
        let boundary = Utc.with_ymd_and_hms(2026, 3, 4, 14, 50, 0).unwrap();
        let window = resolve_work_window(
            anchor,
            &prefs(3, (9, 0), (17, 0)),
            chrono_tz::UTC,
            chrono_tz::UTC,
            30,
            false,
            true,
            Some(boundary),
        )
        .unwrap()
        .expect("workable window");

        assert_eq!((window.end.hour(), window.end.minute()), (14, 30));
    }

    #[test]
    fn last_day_boundary_after_work_end_is_ignored() {
        let anchor = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
        let boundary = Utc.with_ymd_and_hms(2026, 3, 4, 22, 0, 0).unwrap();
        let window = resolve_work_window(
            anchor,
            &prefs(3, (9, 0), (17, 0)),
            chrono_tz::UTC,
            chrono_tz::UTC,
            30,
            false,
            true,
            Some(boundary),
        )
        .unwrap()
        .expect("workable window");

        assert_eq!((window.end.hour(), window.end.minute()), (17, 0));
    }

    #[test]
    fn day_of_week_is_resolved_in_host_timezone() {
        // Tokyo Wednesday 08:00 is still Tuesday 23:00 UTC; the Wednesday
        // preference row must win.
        let anchor = Utc.with_ymd_and_hms(2026, 3, 3, 23, 0, 0).unwrap();
        let mut preferences = prefs(3, (10, 0), (12, 0));
        preferences.start_times.push(DayTime {
            day: 2,
            hour: 14,
            minutes: 0,
        });
        preferences.end_times.push(DayTime {
            day: 2,
            hour: 15,
            minutes: 0,
        });

        let window = resolve_work_window(
            anchor,
            &preferences,
            chrono_tz::Asia::Tokyo,
            chrono_tz::UTC,
            30,
            false,
            false,
            None,
        )
        .unwrap()
        .expect("workable window");

        assert_eq!(window.day_of_week, 3);
        // Tokyo 10:00-12:00 is 01:00-03:00 UTC
        assert_eq!((window.start.hour(), window.start.minute()), (1, 0));
        assert_eq!((window.end.hour(), window.end.minute()), (3, 0));
    }

    #[test]
    fn missing_preference_rows_default_to_eight_to_twenty() {
        let anchor = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
        let window = resolve_work_window(
            anchor,
            &WorkPreferences::default(),
            chrono_tz::UTC,
            chrono_tz::UTC,
            30,
            false,
            false,
            None,
        )
        .unwrap()
        .expect("workable window");

        assert_eq!((window.start.hour(), window.start.minute()), (8, 0));
        assert_eq!((window.end.hour(), window.end.minute()), (20, 0));
    }

    #[test]
    fn summary_matches_resolver_output() {
        let anchor = Utc.with_ymd_and_hms(2026, 3, 4, 9, 15, 0).unwrap();
        let summary = custom_work_times(
            anchor,
            &prefs(3, (9, 0), (17, 0)),
            chrono_tz::UTC,
            chrono_tz::Etc::GMTPlus5,
            30,
            true,
            false,
            None,
        )
        .unwrap()
        .expect("workable window");

        // 09:15 UTC rounds up to 09:30, i.e. 04:30 viewer-local
        assert_eq!(summary.start_time.to_string(), "04:30");
        assert_eq!(summary.end_time.to_string(), "12:00");
        assert_eq!(summary.day_of_week, 3);
    }
}
