mod assignment;
mod types;
mod util;

pub use types::AssignError;
pub use util::{last_week, rotation_index, week_bounds};

use crate::model::Participant;

/// Répartit les semaines ISO de `year` entre les participants, en
/// round-robin à partir de `start_participant` (qui reçoit la semaine 1).
///
/// Le roster fourni n'est jamais modifié : la fonction renvoie une copie
/// enrichie, ce qui permet d'empiler plusieurs tâches sur une même base.
pub fn assign_weeks(
    participants: &[Participant],
    year: i32,
    event: &str,
    start_participant: &str,
) -> Result<Vec<Participant>, AssignError> {
    assignment::assign_weeks(participants, year, event, start_participant)
}

/// Rotation : encapsule un roster enrichi au fil des tâches assignées
#[derive(Debug, Clone, Default)]
pub struct Rotation {
    roster: Vec<Participant>,
}

impl Rotation {
    pub fn new(roster: Vec<Participant>) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    pub fn into_roster(self) -> Vec<Participant> {
        self.roster
    }

    /// Ajoute une tâche ; en cas d'erreur le roster courant reste intact.
    pub fn assign(
        &mut self,
        year: i32,
        event: &str,
        start_participant: &str,
    ) -> Result<&mut Self, AssignError> {
        self.roster = assign_weeks(&self.roster, year, event, start_participant)?;
        Ok(self)
    }
}
