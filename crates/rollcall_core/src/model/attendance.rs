//! Attendance values and dated records.

use super::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Attendance status recorded for one class date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    Present,
    Absent,
    Late,
    /// Absent with a valid reason (medical certificate, official leave).
    Excused,
}

impl Attendance {
    /// Stable lower-case id used in messages and snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Excused => "excused",
        }
    }
}

impl Display for Attendance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attendance {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "late" => Ok(Self::Late),
            "excused" => Ok(Self::Excused),
            _ => Err(ValidationError::InvalidAttendance(value.trim().to_string())),
        }
    }
}

/// One `(date, attendance)` entry of a student's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub attendance: Attendance,
}

/// Formats a date the way result messages show it, e.g. `09 Oct 2019`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
