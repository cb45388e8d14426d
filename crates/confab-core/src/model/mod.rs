//! Plain records exchanged with the engine.

mod attendee;
mod clock;
mod meeting;
mod preferences;
mod slot;

pub use attendee::{Attendee, PreferredTimeRange};
pub use clock::ClockTime;
pub use meeting::{BufferTime, Frequency, MeetingTemplate, Recurrence, RecurrenceWindow};
pub use preferences::{DayTime, WorkPreferences, DEFAULT_WORK_END, DEFAULT_WORK_START};
pub use slot::{BusyInterval, DailySlots, Slot};
