use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ClockTime;

/// A participant of one meeting occurrence.
///
/// Attendees are owned by their occurrence: cloning a series produces a new
/// `Attendee` row per occurrence with a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub host_id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: Option<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub im_addresses: Vec<String>,
    pub primary_email: Option<String>,
    /// IANA timezone identifier.
    pub timezone: String,
    pub external: bool,
}

/// An attendee's preferred clock-time range, optionally pinned to a weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredTimeRange {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub attendee_id: Uuid,
    pub host_id: Uuid,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// ISO day of week (Monday = 1). `None` means any day.
    pub day_of_week: Option<u8>,
}

impl PreferredTimeRange {
    /// Normalizes a raw day-of-week value: only 1-7 constrains the range,
    /// anything else means no constraint.
    #[must_use]
    pub fn normalize_day_of_week(raw: Option<u8>) -> Option<u8> {
        raw.filter(|d| (1..=7).contains(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_of_week_normalization() {
        assert_eq!(PreferredTimeRange::normalize_day_of_week(Some(3)), Some(3));
        assert_eq!(PreferredTimeRange::normalize_day_of_week(Some(7)), Some(7));
        assert_eq!(PreferredTimeRange::normalize_day_of_week(Some(0)), None);
        assert_eq!(PreferredTimeRange::normalize_day_of_week(Some(8)), None);
        assert_eq!(PreferredTimeRange::normalize_day_of_week(None), None);
    }
}
