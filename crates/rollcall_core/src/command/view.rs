//! Commands that only change which students the live view shows.

use super::{Command, CommandOutcome, CommandResult};
use crate::model::fields::TutorialGroup;
use crate::repo::model::Model;
use crate::repo::predicate::{all_students, in_tutorial_group, name_contains_any};

pub const LIST_COMMAND_WORD: &str = "list";
pub const FIND_COMMAND_WORD: &str = "find";
pub const GROUP_COMMAND_WORD: &str = "group";

/// Shows every student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStudentsCommand;

impl Command for ListStudentsCommand {
    fn command_word(&self) -> &'static str {
        LIST_COMMAND_WORD
    }

    fn execute(&mut self, model: &mut dyn Model) -> CommandOutcome {
        model.update_student_filter(all_students());
        Ok(CommandResult::new("Listed all students"))
    }
}

/// Shows students whose name contains any of the keywords as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindStudentCommand {
    keywords: Vec<String>,
}

impl FindStudentCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindStudentCommand {
    fn command_word(&self) -> &'static str {
        FIND_COMMAND_WORD
    }

    fn execute(&mut self, model: &mut dyn Model) -> CommandOutcome {
        model.update_student_filter(name_contains_any(self.keywords.clone()));
        let shown = model.filtered_students().len();
        Ok(CommandResult::new(format!("{shown} students listed!")))
    }
}

/// Shows the students of one tutorial group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroupCommand {
    group: TutorialGroup,
}

impl FilterGroupCommand {
    pub fn new(group: TutorialGroup) -> Self {
        Self { group }
    }
}

impl Command for FilterGroupCommand {
    fn command_word(&self) -> &'static str {
        GROUP_COMMAND_WORD
    }

    fn execute(&mut self, model: &mut dyn Model) -> CommandOutcome {
        let members = model.students_by_tutorial_group(&self.group).len();
        model.update_student_filter(in_tutorial_group(self.group.clone()));
        Ok(CommandResult::new(format!(
            "{members} students listed in tutorial group {}",
            self.group
        )))
    }
}
