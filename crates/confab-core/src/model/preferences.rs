use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ClockTime;

/// Default workable window applied when a weekday has no configured entry.
pub const DEFAULT_WORK_START: ClockTime = ClockTime { hour: 8, minute: 0 };
pub const DEFAULT_WORK_END: ClockTime = ClockTime { hour: 20, minute: 0 };

/// One configured clock time for one ISO weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTime {
    /// ISO day of week (Monday = 1).
    pub day: u8,
    pub hour: u8,
    pub minutes: u8,
}

impl DayTime {
    #[must_use]
    pub fn clock_time(self) -> ClockTime {
        ClockTime {
            hour: self.hour,
            minute: self.minutes,
        }
    }
}

/// Per-user working-hour preferences: one start and one end entry per
/// weekday, in weekday order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPreferences {
    pub user_id: Option<Uuid>,
    pub start_times: Vec<DayTime>,
    pub end_times: Vec<DayTime>,
}

impl WorkPreferences {
    /// Work-day start for an ISO weekday, defaulting to 08:00 when the day
    /// has no entry.
    #[must_use]
    pub fn start_for(&self, day_of_week: u8) -> ClockTime {
        self.start_times
            .iter()
            .find(|t| t.day == day_of_week)
            .map_or(DEFAULT_WORK_START, |t| t.clock_time())
    }

    /// Work-day end for an ISO weekday, defaulting to 20:00 when the day has
    /// no entry.
    #[must_use]
    pub fn end_for(&self, day_of_week: u8) -> ClockTime {
        self.end_times
            .iter()
            .find(|t| t.day == day_of_week)
            .map_or(DEFAULT_WORK_END, |t| t.clock_time())
    }
}
