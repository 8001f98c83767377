use crate::model::{Event, Participant};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// En-tête des fichiers CSV par tâche.
pub const TABLE_HEADER: [&str; 4] = ["Participant", "Week", "Start date", "End date"];

/// Écrit `path` via un fichier temporaire du même dossier puis renommage.
///
/// Le dossier doit exister ; en cas d'erreur la cible n'est pas touchée.
pub(crate) fn write_atomic<P, F>(path: P, write: F) -> anyhow::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut NamedTempFile) -> anyhow::Result<()>,
{
    let path = path.as_ref();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    write(&mut tmp)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

/// Libellé de tâche et ses couples (participant, événement).
pub type EventGroup<'a> = (&'a str, Vec<(&'a Participant, &'a Event)>);

/// Regroupe les couples (participant, événement) par libellé, dans l'ordre
/// de première apparition.
pub fn group_by_event(participants: &[Participant]) -> Vec<EventGroup<'_>> {
    let mut groups: Vec<EventGroup<'_>> = Vec::new();
    for participant in participants {
        for event in &participant.events {
            match groups.iter().position(|(name, _)| *name == event.name) {
                Some(idx) => groups[idx].1.push((participant, event)),
                None => groups.push((event.name.as_str(), vec![(participant, event)])),
            }
        }
    }
    groups
}

/// Export CSV par tâche : `<output_dir>/<libellé>.csv`,
/// header `Participant,Week,Start date,End date`.
///
/// Les lignes suivent l'ordre des participants puis de leurs événements,
/// pas l'ordre chronologique.
pub fn generate_tables<P: AsRef<Path>>(
    participants: &[Participant],
    output_dir: P,
) -> anyhow::Result<()> {
    let dir = output_dir.as_ref();
    for (event_name, rows) in group_by_event(participants) {
        let path = dir.join(format!("{event_name}.csv"));
        write_atomic(&path, |file| {
            let mut w = WriterBuilder::new().has_headers(true).from_writer(file);
            w.write_record(TABLE_HEADER)?;
            for (participant, event) in &rows {
                let week = format!("{:02}", event.iso_week());
                let start = event.start.to_string();
                let end = event.end.to_string();
                w.write_record([
                    participant.name.as_str(),
                    week.as_str(),
                    start.as_str(),
                    end.as_str(),
                ])?;
            }
            w.flush()?;
            Ok(())
        })?;
        info!(path = %path.display(), rows = rows.len(), "table written");
    }
    Ok(())
}

/// Import de participants depuis CSV : header `name`, un participant par ligne.
pub fn import_participants_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Participant>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut out: Vec<Participant> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid participant row (empty name)");
        }
        if out.iter().any(|p| p.name == name) {
            bail!("duplicate participant name: {name}");
        }
        out.push(Participant::new(name));
    }
    Ok(out)
}

/// Export JSON du roster annoté (jolie mise en forme)
#[cfg(feature = "serde")]
pub fn export_roster_json<P: AsRef<Path>>(
    path: P,
    participants: &[Participant],
) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(participants)?;
    write_atomic(path, |file| {
        file.write_all(&json)?;
        Ok(())
    })
}
