use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recurrence frequency of a meeting template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Recurrence rule attached to a meeting template.
///
/// The three fields are either all present or the template carries no
/// recurrence at all, which `Option<Recurrence>` encodes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub frequency: Frequency,
    pub interval: u16,
    pub until: DateTime<Utc>,
}

/// One occurrence's negotiation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceWindow {
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
}

/// Buffer minutes around the eventual booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferTime {
    pub before_minutes: u32,
    pub after_minutes: u32,
}

/// A proposed meeting with a negotiation window, possibly recurring.
///
/// Fields below the window/recurrence block are opaque to the engine: it
/// copies them verbatim into expanded occurrences and never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingTemplate {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    /// IANA timezone identifier of the host.
    pub timezone: String,
    pub recurrence: Option<Recurrence>,
    /// Set on expanded occurrences; `None` on the original template.
    pub original_meeting_id: Option<Uuid>,

    pub title: String,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub enable_conference: bool,
    pub conference_app: Option<String>,
    pub buffer_time: Option<BufferTime>,
    /// Reminder lead times in minutes.
    pub reminders: Vec<u32>,
    pub priority: u8,
    pub duration_minutes: u32,
    pub expire_date: Option<DateTime<Utc>>,
}

impl MeetingTemplate {
    /// Clones this template onto a new negotiation window, as one occurrence
    /// of a recurring series.
    #[must_use]
    pub fn occurrence(&self, id: Uuid, window: RecurrenceWindow) -> Self {
        Self {
            id,
            window_start: window.window_start,
            window_end: window.window_end,
            original_meeting_id: Some(self.id),
            ..self.clone()
        }
    }
}
