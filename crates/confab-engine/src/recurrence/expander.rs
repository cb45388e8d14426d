//! Expansion of a recurring meeting template into future occurrence windows.

use chrono::{DateTime, Utc};
use confab_core::id::IdGenerator;
use confab_core::model::{Frequency, MeetingTemplate, Recurrence, RecurrenceWindow};
use rrule::{RRule, Tz as RRuleTz};

use crate::error::{EngineError, EngineResult};

/// Cap on generated occurrences per rule, to bound pathological rules.
pub const MAX_OCCURRENCES: u16 = 1000;

fn rrule_frequency(frequency: Frequency) -> rrule::Frequency {
    match frequency {
        Frequency::Daily => rrule::Frequency::Daily,
        Frequency::Weekly => rrule::Frequency::Weekly,
        Frequency::Monthly => rrule::Frequency::Monthly,
        Frequency::Yearly => rrule::Frequency::Yearly,
    }
}

/// Evaluates the recurrence rule anchored at `anchor`, bounded by `until`.
///
/// Stateless: each call builds a fresh rule set from the plain rule fields.
fn occurrence_sequence(
    anchor: DateTime<Utc>,
    recurrence: &Recurrence,
) -> EngineResult<Vec<DateTime<Utc>>> {
    let rule = RRule::new(rrule_frequency(recurrence.frequency))
        .interval(recurrence.interval)
        .until(recurrence.until.with_timezone(&RRuleTz::UTC));

    let rule_set = rule
        .build(anchor.with_timezone(&RRuleTz::UTC))
        .map_err(|err| EngineError::Recurrence(err.to_string()))?;

    let result = rule_set.all(MAX_OCCURRENCES);
    if result.limited {
        tracing::warn!(
            anchor = %anchor,
            limit = MAX_OCCURRENCES,
            "Occurrence sequence truncated at expansion cap"
        );
    }

    Ok(result
        .dates
        .into_iter()
        .map(|dt| dt.with_timezone(&Utc))
        .collect())
}

/// ## Summary
/// Expands a meeting template's recurrence rule into the negotiation windows
/// of its *future* occurrences.
///
/// Two occurrence sequences are evaluated, one anchored at the window start
/// and one at the window end, and paired positionally. Index 0 is the
/// original occurrence and is excluded. If the two sequences differ in
/// length (the `until` bound cutting the end sequence short), the output is
/// truncated to the shorter, which skews the final window rather than
/// inventing an end date.
///
/// A template without a recurrence rule yields an empty list; recurrence is
/// optional, not malformed. A zero interval is treated the same way.
///
/// ## Errors
///
/// Returns `EngineError::Recurrence` if the rule fields cannot be assembled
/// into a valid recurrence rule.
pub fn expand_windows(template: &MeetingTemplate) -> EngineResult<Vec<RecurrenceWindow>> {
    let Some(recurrence) = &template.recurrence else {
        tracing::trace!(meeting_id = %template.id, "No recurrence on template");
        return Ok(Vec::new());
    };
    if recurrence.interval == 0 {
        tracing::warn!(meeting_id = %template.id, "Zero recurrence interval, not expanding");
        return Ok(Vec::new());
    }

    let starts = occurrence_sequence(template.window_start, recurrence)?;
    let ends = occurrence_sequence(template.window_end, recurrence)?;

    if starts.len() != ends.len() {
        tracing::debug!(
            meeting_id = %template.id,
            starts = starts.len(),
            ends = ends.len(),
            "Start and end sequences differ in length, truncating to shorter"
        );
    }

    let windows = starts
        .into_iter()
        .zip(ends)
        .skip(1)
        .map(|(window_start, window_end)| RecurrenceWindow {
            window_start,
            window_end,
        })
        .collect();

    Ok(windows)
}

/// ## Summary
/// Materializes future occurrences of a recurring template.
///
/// Each expanded window becomes a clone of the template with a fresh id, the
/// window's bounds, `original_meeting_id` linking back to the template, and
/// every pass-through field copied verbatim.
///
/// ## Errors
///
/// Propagates `expand_windows` errors.
pub fn expand_occurrences(
    template: &MeetingTemplate,
    ids: &dyn IdGenerator,
) -> EngineResult<Vec<MeetingTemplate>> {
    let occurrences: Vec<MeetingTemplate> = expand_windows(template)?
        .into_iter()
        .map(|window| template.occurrence(ids.next_id(), window))
        .collect();

    tracing::debug!(
        meeting_id = %template.id,
        count = occurrences.len(),
        "Materialized recurring occurrences"
    );
    Ok(occurrences)
}
