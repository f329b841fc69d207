//! `mark`: records a student's attendance for one date.

use super::{Command, CommandError, CommandOutcome, CommandResult};
use crate::model::attendance::{display_date, Attendance};
use crate::model::fields::Name;
use crate::repo::model::Model;
use chrono::NaiveDate;

pub const COMMAND_WORD: &str = "mark";

/// Marks attendance, replacing any existing record on the same date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAttendanceCommand {
    name: Name,
    date: NaiveDate,
    attendance: Attendance,
    /// Outer `Some` once executed; inner value is what the mark replaced.
    replaced: Option<Option<Attendance>>,
}

impl MarkAttendanceCommand {
    pub fn new(name: Name, date: NaiveDate, attendance: Attendance) -> Self {
        Self {
            name,
            date,
            attendance,
            replaced: None,
        }
    }
}

impl Command for MarkAttendanceCommand {
    fn command_word(&self) -> &'static str {
        COMMAND_WORD
    }

    fn execute(&mut self, model: &mut dyn Model) -> CommandOutcome {
        let target = model
            .student_by_name(&self.name)
            .cloned()
            .ok_or_else(|| CommandError::StudentNotFound(self.name.clone()))?;

        let mut edited = target.clone();
        let replaced = edited.mark_attendance(self.date, self.attendance);
        model.set_student(&target, edited)?;
        self.replaced = Some(replaced);

        Ok(CommandResult::new(format!(
            "Attendance marked: {} is {} on {}",
            self.name,
            self.attendance,
            display_date(self.date)
        )))
    }

    fn undo(&mut self, model: &mut dyn Model) -> bool {
        let Some(replaced) = self.replaced else {
            return false;
        };
        let Some(target) = model.student_by_name(&self.name).cloned() else {
            return false;
        };

        let mut restored = target.clone();
        match replaced {
            Some(previous) => {
                restored.mark_attendance(self.date, previous);
            }
            None => {
                restored.delete_attendance(self.date);
            }
        }
        if model.set_student(&target, restored).is_err() {
            return false;
        }
        self.replaced = None;
        true
    }

    fn is_undoable(&self) -> bool {
        true
    }
}
