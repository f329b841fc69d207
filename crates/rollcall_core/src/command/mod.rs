//! User-level commands executed against a `Model`.
//!
//! # Responsibility
//! - Define the uniform execute/undo contract for every user action.
//! - Translate model outcomes into user-facing feedback and errors.
//!
//! # Invariants
//! - A command that returns `Err` has not mutated the model.
//! - Commands keep only their inputs plus the snapshot needed to undo.
//! - `undo` returns `false` instead of guessing when there is nothing to
//!   reverse.

use crate::model::fields::Name;
use crate::model::ValidationError;
use crate::repo::model::{Model, ModelError};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod add_student;
pub mod delete_attendance;
pub mod delete_student;
pub mod edit_student;
pub mod general;
pub mod mark_attendance;
pub mod view;

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// Feedback returned to the display layer after a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Plain-text message shown to the user verbatim.
    pub feedback: String,
    /// Display layer should open the help view.
    pub show_help: bool,
    /// Display layer should shut down.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// User-correctable command failure. `Display` is the message shown to the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No student with this name exists.
    StudentNotFound(Name),
    /// The student exists but has no record on the date.
    NoAttendanceRecord { name: Name, date: NaiveDate },
    /// Raw student number text failed format validation.
    InvalidStudentNumber(String),
    /// Well-formed student number with no matching student.
    NonexistentStudent,
    DuplicateStudent,
    NoFieldsToEdit,
    Validation(ValidationError),
    Model(ModelError),
    NothingToUndo,
    /// The most recent command refused to undo; carries its command word.
    UndoFailed(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StudentNotFound(name) => write!(f, "Student not found: {name}"),
            Self::NoAttendanceRecord { name, date } => {
                write!(f, "No attendance record found for {name} on {date}")
            }
            Self::InvalidStudentNumber(_) => {
                write!(f, "The student number you provided is not valid.")
            }
            Self::NonexistentStudent => write!(f, "This student is not in your student list."),
            Self::DuplicateStudent => {
                write!(f, "This student already exists in the student list.")
            }
            Self::NoFieldsToEdit => write!(f, "At least one field to edit must be provided."),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Model(err) => write!(f, "{err}"),
            Self::NothingToUndo => write!(f, "No command to undo."),
            Self::UndoFailed(word) => write!(f, "Unable to undo {word}."),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        match value {
            ModelError::DuplicateStudent(_) => Self::DuplicateStudent,
            ModelError::StudentNotFound(name) => Self::StudentNotFound(name),
            other => Self::Model(other),
        }
    }
}

/// Uniform contract for one user action.
pub trait Command {
    /// Short keyword naming the action, e.g. `deletestu`.
    fn command_word(&self) -> &'static str;

    /// Validates inputs against `model`, mutates it, and describes the result.
    fn execute(&mut self, model: &mut dyn Model) -> CommandOutcome;

    /// Reverses the most recent successful `execute`.
    ///
    /// Returns `false` when there is nothing to reverse.
    fn undo(&mut self, _model: &mut dyn Model) -> bool {
        false
    }

    /// Whether successful executions belong in the undo history.
    fn is_undoable(&self) -> bool {
        false
    }
}
