use super::AssignError;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Nombre de semaines ISO de l'année (52 ou 53).
///
/// Le 28 décembre tombe toujours dans la dernière semaine ISO de son année,
/// contrairement au 31 qui peut déjà appartenir à la semaine 1 suivante.
pub fn last_week(year: i32) -> Result<u32, AssignError> {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|d| d.iso_week().week())
        .ok_or(AssignError::InvalidYear(year))
}

/// Lundi de la semaine ISO `week` et lundi de la semaine suivante.
pub fn week_bounds(year: i32, week: u32) -> Result<(NaiveDate, NaiveDate), AssignError> {
    let invalid = AssignError::InvalidWeek { year, week };
    let start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or(invalid.clone())?;
    // la semaine suivante peut appartenir à l'année d'après
    let end = start.checked_add_days(Days::new(7)).ok_or(invalid)?;
    Ok((start, end))
}

/// Index du participant de la semaine `week` (1-based).
///
/// `((start_idx + week) mod n) - 1`, où `-1` revient sur le dernier
/// participant : la semaine 1 revient donc à `start_idx`.
pub fn rotation_index(start_idx: usize, week: u32, n: usize) -> usize {
    debug_assert!(n > 0 && start_idx < n);
    let raw = (start_idx + week as usize) % n;
    if raw == 0 {
        n - 1
    } else {
        raw - 1
    }
}
