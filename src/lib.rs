#![forbid(unsafe_code)]
//! Tournante — répartition de tâches hebdomadaires tournantes (sans BD).
//!
//! - Rotation round-robin sur les semaines ISO d'une année.
//! - Export iCalendar par participant, CSV par tâche.
//! - Plans JSON pour empiler plusieurs tâches sur un même roster.

pub mod calendar;
pub mod io;
pub mod model;
#[cfg(feature = "serde")]
pub mod plan;
pub mod scheduler;

pub use calendar::{generate_calendars, CalendarExporter};
pub use io::{generate_tables, import_participants_csv};
pub use model::{roster_from_names, Event, Participant};
#[cfg(feature = "serde")]
pub use plan::{load_plan_from_file, RotationPlan, RotationSpec};
pub use scheduler::{assign_weeks, last_week, AssignError, Rotation};
