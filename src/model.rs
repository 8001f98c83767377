use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tâche datée sur une semaine ISO : `[start, end)`, du lundi au lundi suivant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Event {
    pub fn new<N: Into<String>>(name: N, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Numéro de semaine ISO du début de l'événement.
    pub fn iso_week(&self) -> u32 {
        self.start.iso_week().week()
    }
}

/// Participant à la rotation. Le nom sert de clé.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Participant {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<Event>,
}

impl Participant {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Événements portant le libellé `name`, dans l'ordre d'assignation.
    pub fn events_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| e.name == name)
    }
}

/// Construit un roster vide à partir d'une liste de noms.
pub fn roster_from_names<I, S>(names: I) -> Vec<Participant>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Participant::new).collect()
}
