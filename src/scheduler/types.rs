use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("roster is empty")]
    EmptyRoster,
    #[error("start participant was not found in list of participants: {0}")]
    UnknownParticipant(String),
    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),
    #[error("no ISO week {week} in year {year}")]
    InvalidWeek { year: i32, week: u32 },
}
