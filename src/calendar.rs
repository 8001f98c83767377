//! Export iCalendar : un fichier `.ics` par participant.

use crate::io::write_atomic;
use crate::model::{Event, Participant};
use anyhow::Context;
use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};
use std::io::Write;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// Requis (avec `VERSION`) pour un fichier conforme.
pub const PRODID: &str = "-//Weekly schedule generator/1.0/EN";
pub const VERSION: &str = "2.0";

/// UID stable : UUID v5 dérivé du participant, du libellé et de la date.
pub fn event_uid(owner: &str, event: &Event) -> String {
    let key = format!("{owner}/{}/{}", event.name, event.start);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string()
}

/// Calendrier vide avec les propriétés obligatoires.
pub fn empty_calendar() -> Calendar {
    let mut cal = Calendar::empty();
    cal.append_property(Property::new("PRODID", PRODID));
    cal.append_property(Property::new("VERSION", VERSION));
    cal
}

/// Exporte un calendrier par participant.
#[derive(Debug, Clone, Copy)]
pub struct CalendarExporter {
    stamp: DateTime<Utc>,
}

impl Default for CalendarExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarExporter {
    pub fn new() -> Self {
        Self { stamp: Utc::now() }
    }

    /// Fige `DTSTAMP` (sorties reproductibles).
    pub fn with_stamp(stamp: DateTime<Utc>) -> Self {
        Self { stamp }
    }

    fn to_ical(&self, owner: &str, event: &Event) -> icalendar::Event {
        icalendar::Event::new()
            .uid(&event_uid(owner, event))
            .timestamp(self.stamp)
            .summary(&event.name)
            .starts(event.start)
            .ends(event.end)
            .done()
    }

    pub fn calendar_for(&self, participant: &Participant) -> Calendar {
        let mut cal = empty_calendar();
        for event in &participant.events {
            cal.push(self.to_ical(&participant.name, event));
        }
        cal
    }

    /// Écrit `<output_dir>/<nom>.ics` pour chaque participant.
    pub fn write_all<P: AsRef<Path>>(
        &self,
        participants: &[Participant],
        output_dir: P,
    ) -> anyhow::Result<()> {
        let dir = output_dir.as_ref();
        for participant in participants {
            let path = dir.join(format!("{}.ics", participant.name));
            let body = self.calendar_for(participant).to_string();
            write_atomic(&path, |file| {
                file.write_all(body.as_bytes())
                    .with_context(|| format!("writing {}", path.display()))
            })?;
            info!(
                path = %path.display(),
                events = participant.events.len(),
                "calendar written"
            );
        }
        Ok(())
    }
}

/// Génère les fichiers `.ics` des participants dans `output_dir` (existant).
pub fn generate_calendars<P: AsRef<Path>>(
    participants: &[Participant],
    output_dir: P,
) -> anyhow::Result<()> {
    CalendarExporter::new().write_all(participants, output_dir)
}
