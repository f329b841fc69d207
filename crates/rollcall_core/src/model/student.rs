//! Student record and attendance history.
//!
//! # Responsibility
//! - Hold the identity fields of one student.
//! - Own the student's attendance history and its per-date mutations.
//!
//! # Invariants
//! - At most one attendance record per calendar date; the map key enforces it
//!   in memory and deserialization rejects duplicated dates.
//! - Attendance is always iterated in ascending date order.

use super::attendance::{Attendance, AttendanceRecord};
use super::fields::{Name, Phone, StudentNumber, TutorialGroup};
use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Canonical student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: Name,
    pub phone: Option<Phone>,
    pub student_number: StudentNumber,
    pub tutorial_group: TutorialGroup,
    /// Serialized as a date-ordered list of `AttendanceRecord`.
    #[serde(
        default,
        serialize_with = "serialize_attendance",
        deserialize_with = "deserialize_attendance"
    )]
    attendance: BTreeMap<NaiveDate, Attendance>,
}

impl Student {
    /// Creates a student with an empty attendance history.
    pub fn new(name: Name, student_number: StudentNumber, tutorial_group: TutorialGroup) -> Self {
        Self {
            name,
            phone: None,
            student_number,
            tutorial_group,
            attendance: BTreeMap::new(),
        }
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Records `attendance` for `date`, returning the value it replaced.
    pub fn mark_attendance(&mut self, date: NaiveDate, attendance: Attendance) -> Option<Attendance> {
        self.attendance.insert(date, attendance)
    }

    /// Removes the record for `date`, returning the removed value.
    pub fn delete_attendance(&mut self, date: NaiveDate) -> Option<Attendance> {
        self.attendance.remove(&date)
    }

    pub fn attendance_on(&self, date: NaiveDate) -> Option<Attendance> {
        self.attendance.get(&date).copied()
    }

    /// Attendance history in ascending date order.
    pub fn attendance_records(&self) -> impl Iterator<Item = AttendanceRecord> + '_ {
        self.attendance
            .iter()
            .map(|(date, attendance)| AttendanceRecord {
                date: *date,
                attendance: *attendance,
            })
    }

    pub fn attendance_count(&self) -> usize {
        self.attendance.len()
    }

    /// Two records denote the same student when either unique key matches.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.name == other.name || self.student_number == other.student_number
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Student Number: {}; Tutorial Group: {}",
            self.name, self.student_number, self.tutorial_group
        )?;
        if let Some(phone) = &self.phone {
            write!(f, "; Phone: {phone}")?;
        }
        Ok(())
    }
}

fn serialize_attendance<S: Serializer>(
    attendance: &BTreeMap<NaiveDate, Attendance>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(attendance.iter().map(|(date, attendance)| AttendanceRecord {
        date: *date,
        attendance: *attendance,
    }))
}

fn deserialize_attendance<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<NaiveDate, Attendance>, D::Error> {
    let records = Vec::<AttendanceRecord>::deserialize(deserializer)?;
    let mut attendance = BTreeMap::new();
    for record in records {
        if attendance.insert(record.date, record.attendance).is_some() {
            return Err(D::Error::custom(format!(
                "duplicate attendance record for {}",
                record.date
            )));
        }
    }
    Ok(attendance)
}
