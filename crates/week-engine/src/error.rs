//! Error types for week-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid day of week: {0} (expected 1 = Monday through 7 = Sunday)")]
    InvalidDay(u8),

    #[error("Invalid minute of day: {0} (expected 0 through 1439)")]
    InvalidMinute(u16),

    #[error("Invalid interval: {start}..{end} (start must precede end, end at most 1440)")]
    InvalidSpan { start: u16, end: u16 },

    #[error("Invalid reminder lead: {0} minutes (expected 5 through 180)")]
    InvalidLead(u16),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
