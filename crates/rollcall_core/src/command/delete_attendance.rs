//! `deleteat`: removes one dated attendance record of a student.

use super::{Command, CommandError, CommandOutcome, CommandResult};
use crate::model::attendance::{display_date, Attendance};
use crate::model::fields::Name;
use crate::repo::model::Model;
use chrono::NaiveDate;

pub const COMMAND_WORD: &str = "deleteat";

/// Deletes the attendance of the named student on one date.
///
/// # Contract
/// - Fails with `StudentNotFound` when no student has the name.
/// - Fails with `NoAttendanceRecord` when the student has no record on the
///   date; the student is left untouched.
/// - Undo re-inserts the removed value on the same date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAttendanceCommand {
    name: Name,
    date: NaiveDate,
    removed: Option<Attendance>,
}

impl DeleteAttendanceCommand {
    pub fn new(name: Name, date: NaiveDate) -> Self {
        Self {
            name,
            date,
            removed: None,
        }
    }
}

impl Command for DeleteAttendanceCommand {
    fn command_word(&self) -> &'static str {
        COMMAND_WORD
    }

    fn execute(&mut self, model: &mut dyn Model) -> CommandOutcome {
        let student = model
            .student_by_name(&self.name)
            .ok_or_else(|| CommandError::StudentNotFound(self.name.clone()))?;
        let current = student.attendance_on(self.date).ok_or_else(|| {
            CommandError::NoAttendanceRecord {
                name: self.name.clone(),
                date: self.date,
            }
        })?;

        let target = student.clone();
        let mut edited = target.clone();
        edited.delete_attendance(self.date);
        model.set_student(&target, edited)?;
        self.removed = Some(current);

        Ok(CommandResult::new(format!(
            "Attendance deleted: {} on {}",
            self.name,
            display_date(self.date)
        )))
    }

    fn undo(&mut self, model: &mut dyn Model) -> bool {
        let Some(previous) = self.removed else {
            return false;
        };
        let Some(student) = model.student_by_name(&self.name) else {
            return false;
        };

        let target = student.clone();
        let mut restored = target.clone();
        restored.mark_attendance(self.date, previous);
        if model.set_student(&target, restored).is_err() {
            return false;
        }
        self.removed = None;
        true
    }

    fn is_undoable(&self) -> bool {
        true
    }
}
