use crate::model::{roster_from_names, Participant};
use crate::scheduler::Rotation;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Description complète des rotations d'une année.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationPlan {
    pub year: i32,
    pub participants: Vec<String>,
    #[serde(default)]
    pub rotations: Vec<RotationSpec>,
}

/// Une tâche et le participant qui en prend la semaine 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationSpec {
    pub event: String,
    pub start: String,
}

impl RotationPlan {
    pub fn validate(&self) -> Result<()> {
        if self.participants.is_empty() {
            bail!("plan must contain at least one participant");
        }
        for (i, name) in self.participants.iter().enumerate() {
            if name.trim().is_empty() {
                bail!("participant name cannot be empty");
            }
            if self.participants[..i].contains(name) {
                bail!("duplicate participant name: {name}");
            }
        }
        if self.rotations.is_empty() {
            bail!("plan must contain at least one rotation");
        }
        for (i, rotation) in self.rotations.iter().enumerate() {
            if rotation.event.trim().is_empty() {
                bail!("rotation event cannot be empty");
            }
            if self.rotations[..i].iter().any(|r| r.event == rotation.event) {
                bail!("rotation listed twice: {}", rotation.event);
            }
            if !self.participants.contains(&rotation.start) {
                bail!(
                    "start participant {} of {} is not in the plan",
                    rotation.start,
                    rotation.event
                );
            }
        }
        Ok(())
    }

    pub fn roster(&self) -> Vec<Participant> {
        roster_from_names(self.participants.iter().cloned())
    }

    /// Applique les rotations dans l'ordre, chacune sur le roster enrichi
    /// par la précédente.
    pub fn apply(&self) -> Result<Vec<Participant>> {
        self.validate()?;
        let mut rotation = Rotation::new(self.roster());
        for spec in &self.rotations {
            rotation
                .assign(self.year, &spec.event, &spec.start)
                .with_context(|| format!("assigning {}", spec.event))?;
            debug!(event = %spec.event, start = %spec.start, "rotation applied");
        }
        Ok(rotation.into_roster())
    }
}

pub fn load_plan_from_file<P: AsRef<Path>>(path: P) -> Result<RotationPlan> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading plan {}", path.display()))?;
    let plan: RotationPlan = serde_json::from_slice(&data)
        .with_context(|| format!("parsing plan {}", path.display()))?;
    plan.validate()?;
    Ok(plan)
}
