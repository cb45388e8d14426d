//! Cloning of attendees and preferred-time ranges onto expanded occurrences.

use confab_core::id::IdGenerator;
use confab_core::model::{Attendee, MeetingTemplate, PreferredTimeRange};

/// Attendee and preferred-time clones for an expanded series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClonedSeries {
    pub attendees: Vec<Attendee>,
    pub preferred_times: Vec<PreferredTimeRange>,
}

fn clone_preferred_times(
    originals: &[PreferredTimeRange],
    occurrence: &MeetingTemplate,
    attendee: &Attendee,
    ids: &dyn IdGenerator,
) -> Vec<PreferredTimeRange> {
    originals
        .iter()
        .map(|original| PreferredTimeRange {
            id: ids.next_id(),
            meeting_id: occurrence.id,
            attendee_id: attendee.id,
            host_id: occurrence.owner_id,
            start_time: original.start_time,
            end_time: original.end_time,
            day_of_week: PreferredTimeRange::normalize_day_of_week(original.day_of_week),
        })
        .collect()
}

/// ## Summary
/// Clones every original attendee (and their preferred-time ranges, when
/// supplied) onto every expanded occurrence.
///
/// Each clone gets a fresh id, is owned by its occurrence, and takes the
/// occurrence's timezone; identity fields are copied verbatim. Iteration is
/// occurrence-major then attendee-major, so output order is deterministic.
///
/// Empty attendee or preferred-time collections simply produce empty
/// outputs.
pub fn clone_series(
    original_attendees: &[Attendee],
    occurrences: &[MeetingTemplate],
    original_preferred_times: Option<&[PreferredTimeRange]>,
    ids: &dyn IdGenerator,
) -> ClonedSeries {
    let mut series = ClonedSeries::default();

    for occurrence in occurrences {
        for original in original_attendees {
            let attendee = Attendee {
                id: ids.next_id(),
                meeting_id: occurrence.id,
                host_id: original.host_id,
                user_id: original.user_id,
                name: original.name.clone(),
                emails: original.emails.clone(),
                phone_numbers: original.phone_numbers.clone(),
                im_addresses: original.im_addresses.clone(),
                primary_email: original.primary_email.clone(),
                timezone: occurrence.timezone.clone(),
                external: original.external,
            };

            if let Some(preferred) = original_preferred_times {
                let own: Vec<PreferredTimeRange> = preferred
                    .iter()
                    .filter(|p| p.attendee_id == original.id)
                    .cloned()
                    .collect();
                series
                    .preferred_times
                    .extend(clone_preferred_times(&own, occurrence, &attendee, ids));
            }

            series.attendees.push(attendee);
        }
    }

    tracing::debug!(
        occurrences = occurrences.len(),
        attendees = series.attendees.len(),
        preferred_times = series.preferred_times.len(),
        "Cloned series"
    );
    series
}
