//! `deletestu`: removes a student identified by student number.

use super::{Command, CommandError, CommandOutcome, CommandResult};
use crate::model::fields::StudentNumber;
use crate::model::student::Student;
use crate::repo::model::Model;

pub const COMMAND_WORD: &str = "deletestu";

/// Deletes the student with the given student number.
///
/// Takes the raw number text: format validation is part of `execute` and
/// happens before any model lookup. Undo puts the student back at the
/// position it held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudentCommand {
    target: String,
    /// Removed student and the position it held.
    deleted: Option<(usize, Student)>,
}

impl DeleteStudentCommand {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            deleted: None,
        }
    }
}

impl Command for DeleteStudentCommand {
    fn command_word(&self) -> &'static str {
        COMMAND_WORD
    }

    fn execute(&mut self, model: &mut dyn Model) -> CommandOutcome {
        let number = StudentNumber::parse(&self.target)
            .map_err(|_| CommandError::InvalidStudentNumber(self.target.clone()))?;

        let student = model
            .student_by_number(&number)
            .cloned()
            .ok_or(CommandError::NonexistentStudent)?;

        let index = model
            .delete_student(&student)
            .ok_or(CommandError::NonexistentStudent)?;
        let feedback = format!("Deleted Student: {student}");
        self.deleted = Some((index, student));
        Ok(CommandResult::new(feedback))
    }

    fn undo(&mut self, model: &mut dyn Model) -> bool {
        let Some((index, student)) = self.deleted.take() else {
            return false;
        };
        model.insert_student(index, student).is_ok()
    }

    fn is_undoable(&self) -> bool {
        true
    }
}
