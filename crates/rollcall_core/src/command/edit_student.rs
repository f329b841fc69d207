//! `editstu`: replaces identity fields of an existing student.

use super::{Command, CommandError, CommandOutcome, CommandResult};
use crate::model::fields::{Name, Phone, StudentNumber, TutorialGroup};
use crate::model::student::Student;
use crate::repo::model::Model;

pub const COMMAND_WORD: &str = "editstu";

/// Fields to overwrite; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditStudentDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub student_number: Option<StudentNumber>,
    pub tutorial_group: Option<TutorialGroup>,
}

impl EditStudentDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.student_number.is_some()
            || self.tutorial_group.is_some()
    }

    /// Returns a copy of `student` with the descriptor applied.
    ///
    /// Attendance history is carried over unchanged.
    pub fn apply_to(&self, student: &Student) -> Student {
        let mut edited = student.clone();
        if let Some(name) = &self.name {
            edited.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            edited.phone = Some(phone.clone());
        }
        if let Some(number) = &self.student_number {
            edited.student_number = number.clone();
        }
        if let Some(group) = &self.tutorial_group {
            edited.tutorial_group = group.clone();
        }
        edited
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStudentCommand {
    target: Name,
    descriptor: EditStudentDescriptor,
    /// `(before, after)` of the last successful execution.
    applied: Option<(Student, Student)>,
}

impl EditStudentCommand {
    pub fn new(target: Name, descriptor: EditStudentDescriptor) -> Self {
        Self {
            target,
            descriptor,
            applied: None,
        }
    }
}

impl Command for EditStudentCommand {
    fn command_word(&self) -> &'static str {
        COMMAND_WORD
    }

    fn execute(&mut self, model: &mut dyn Model) -> CommandOutcome {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NoFieldsToEdit);
        }

        let before = model
            .student_by_name(&self.target)
            .cloned()
            .ok_or_else(|| CommandError::StudentNotFound(self.target.clone()))?;
        let after = self.descriptor.apply_to(&before);

        model.set_student(&before, after.clone())?;
        let feedback = format!("Edited Student: {after}");
        self.applied = Some((before, after));
        Ok(CommandResult::new(feedback))
    }

    fn undo(&mut self, model: &mut dyn Model) -> bool {
        let Some((before, after)) = self.applied.take() else {
            return false;
        };
        model.set_student(&after, before).is_ok()
    }

    fn is_undoable(&self) -> bool {
        true
    }
}
