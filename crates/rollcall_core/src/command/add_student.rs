//! `addstu`: adds a new student.

use super::{Command, CommandError, CommandOutcome, CommandResult};
use crate::model::student::Student;
use crate::repo::model::Model;

pub const COMMAND_WORD: &str = "addstu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStudentCommand {
    student: Student,
    added: bool,
}

impl AddStudentCommand {
    pub fn new(student: Student) -> Self {
        Self {
            student,
            added: false,
        }
    }
}

impl Command for AddStudentCommand {
    fn command_word(&self) -> &'static str {
        COMMAND_WORD
    }

    fn execute(&mut self, model: &mut dyn Model) -> CommandOutcome {
        if model.has_student(&self.student) {
            return Err(CommandError::DuplicateStudent);
        }
        model.add_student(self.student.clone())?;
        self.added = true;
        Ok(CommandResult::new(format!(
            "New student added: {}",
            self.student
        )))
    }

    fn undo(&mut self, model: &mut dyn Model) -> bool {
        if !self.added {
            return false;
        }
        self.added = false;
        model.delete_student(&self.student).is_some()
    }

    fn is_undoable(&self) -> bool {
        true
    }
}
