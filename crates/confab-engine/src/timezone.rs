//! Timezone resolution and wall-clock conversion.
//!
//! Timezone identifiers cross the engine boundary as IANA strings. An
//! unknown identifier is a hard error; the engine never falls back to a
//! default zone.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use confab_core::model::ClockTime;

use crate::error::{EngineError, EngineResult};

/// Resolver for IANA timezone identifiers.
///
/// Maintains a cache of resolved timezones so repeated lookups during a
/// multi-day plan stay cheap.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// ## Errors
    ///
    /// Returns `EngineError::InvalidTimezone` if the identifier is not a
    /// recognized IANA name.
    ///
    /// ## Side Effects
    ///
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, tzid: &str) -> EngineResult<Tz> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let normalized = normalize_tzid(tzid);
        let tz = Tz::from_str(&normalized)
            .map_err(|_e| EngineError::InvalidTimezone(tzid.to_string()))?;

        tracing::trace!(tzid, resolved = %tz, "Resolved timezone");
        self.cache.insert(tzid.to_string(), tz);
        Ok(tz)
    }
}

/// Normalizes common aliases before IANA parsing.
fn normalize_tzid(tzid: &str) -> String {
    let trimmed = tzid.trim().trim_matches('"');
    match trimmed {
        "Z" | "GMT" | "gmt" | "utc" => "UTC".to_string(),
        other => other.to_string(),
    }
}

/// Materializes a naive local datetime in a timezone.
///
/// A wall clock inside a DST gap is pushed forward one hour; an ambiguous
/// wall clock (DST fold) takes the earlier instant.
pub(crate) fn materialize_local(tz: Tz, naive: NaiveDateTime) -> EngineResult<DateTime<Tz>> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return Ok(dt);
    }
    (naive + Duration::hours(1))
        .and_local_timezone(tz)
        .earliest()
        .ok_or_else(|| EngineError::NonExistentLocalTime(format!("{naive} in {tz}")))
}

/// ## Summary
/// Re-expresses a host-zone clock time as the viewer-zone clock time it
/// corresponds to on the anchor's host-local date.
///
/// This is a wall-clock conversion: the configured hour/minute is placed on
/// the host-local calendar date of `anchor`, converted, and its hour/minute
/// read back in the viewer zone.
///
/// ## Errors
///
/// Returns `EngineError::NonExistentLocalTime` if the host wall clock cannot
/// be materialized even after DST-gap adjustment.
pub fn host_clock_in_viewer(
    anchor: DateTime<Utc>,
    clock: ClockTime,
    host: Tz,
    viewer: Tz,
) -> EngineResult<ClockTime> {
    let host_date = anchor.with_timezone(&host).date_naive();
    let host_dt = materialize_local(host, host_date.and_time(clock.naive_time()))?;
    let viewer_dt = host_dt.with_timezone(&viewer);
    clock_of(&viewer_dt).map_err(EngineError::from)
}

/// Places a viewer-zone clock time on the anchor's viewer-local date.
///
/// Minutes past midnight may exceed a day (rounding past 23:59 rolls over).
pub(crate) fn at_viewer_clock(
    anchor: DateTime<Utc>,
    minutes_from_midnight: u32,
    viewer: Tz,
) -> EngineResult<DateTime<Tz>> {
    let viewer_date = anchor.with_timezone(&viewer).date_naive();
    let naive = viewer_date
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .checked_add_signed(Duration::minutes(i64::from(minutes_from_midnight)))
        .ok_or_else(|| EngineError::NonExistentLocalTime(viewer_date.to_string()))?;
    materialize_local(viewer, naive)
}

pub(crate) fn clock_of<T: chrono::Timelike>(t: &T) -> confab_core::error::CoreResult<ClockTime> {
    ClockTime::new(
        u8::try_from(t.hour()).unwrap_or(u8::MAX),
        u8::try_from(t.minute()).unwrap_or(u8::MAX),
    )
}
