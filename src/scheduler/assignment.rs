use super::{util, AssignError};
use crate::model::{Event, Participant};
use tracing::debug;

pub(super) fn assign_weeks(
    participants: &[Participant],
    year: i32,
    event: &str,
    start_participant: &str,
) -> Result<Vec<Participant>, AssignError> {
    if participants.is_empty() {
        return Err(AssignError::EmptyRoster);
    }

    let mut assignees = participants.to_vec();
    let total = assignees.len();
    let start_idx = assignees
        .iter()
        .position(|p| p.name == start_participant)
        .ok_or_else(|| AssignError::UnknownParticipant(start_participant.to_string()))?;

    let last_week = util::last_week(year)?;

    // calcule toutes les bornes avant de toucher à la copie
    let weeks = (1..=last_week)
        .map(|week| util::week_bounds(year, week).map(|bounds| (week, bounds)))
        .collect::<Result<Vec<_>, _>>()?;

    for (week, (start, end)) in weeks {
        let idx = util::rotation_index(start_idx, week, total);
        assignees[idx].events.push(Event::new(event, start, end));
    }

    debug!(
        event,
        year,
        weeks = last_week,
        participants = total,
        start = start_participant,
        "weeks assigned"
    );

    Ok(assignees)
}
