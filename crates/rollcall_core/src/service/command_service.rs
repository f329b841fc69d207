//! Command execution and undo history.
//!
//! # Responsibility
//! - Own the model for one session and run commands against it in order.
//! - Keep successful undoable commands so the latest can be reversed.
//!
//! # Invariants
//! - Only commands that succeeded and report `is_undoable()` enter history.
//! - History is bounded; the oldest entry is dropped first.
//! - A command popped for undo is not pushed back, even if undo fails.

use crate::command::{Command, CommandError, CommandOutcome, CommandResult};
use crate::repo::model::Model;
use log::{info, warn};
use std::collections::VecDeque;
use std::time::Instant;

/// Default number of undoable commands kept per session.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Session facade over one `Model` implementation.
pub struct CommandService<M: Model> {
    model: M,
    history: VecDeque<Box<dyn Command>>,
    history_capacity: usize,
}

impl<M: Model> CommandService<M> {
    /// Creates a service with the default history capacity.
    pub fn new(model: M) -> Self {
        Self::with_history_capacity(model, DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a service keeping at most `capacity` undoable commands.
    ///
    /// A capacity of zero disables undo.
    pub fn with_history_capacity(model: M, capacity: usize) -> Self {
        Self {
            model,
            history: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            history_capacity: capacity,
        }
    }

    /// Executes one command and records it for undo when applicable.
    ///
    /// Errors are returned unchanged so callers can show them verbatim.
    pub fn execute(&mut self, mut command: Box<dyn Command>) -> CommandOutcome {
        let started_at = Instant::now();
        let word = command.command_word();

        match command.execute(&mut self.model) {
            Ok(result) => {
                info!(
                    "event=command_execute module=service status=ok command={} duration_ms={} revision={}",
                    word,
                    started_at.elapsed().as_millis(),
                    self.model.revision()
                );
                if command.is_undoable() {
                    self.push_history(command);
                }
                Ok(result)
            }
            Err(err) => {
                warn!(
                    "event=command_execute module=service status=error command={} duration_ms={} error_code={}",
                    word,
                    started_at.elapsed().as_millis(),
                    error_code(&err)
                );
                Err(err)
            }
        }
    }

    /// Reverses the most recent undoable command.
    ///
    /// # Errors
    /// - `NothingToUndo` when history is empty.
    /// - `UndoFailed` when the command could not reverse itself.
    pub fn undo(&mut self) -> CommandOutcome {
        let Some(mut command) = self.history.pop_back() else {
            return Err(CommandError::NothingToUndo);
        };
        let word = command.command_word();

        if command.undo(&mut self.model) {
            info!(
                "event=command_undo module=service status=ok command={} revision={}",
                word,
                self.model.revision()
            );
            Ok(CommandResult::new(format!("Undo success: {word}")))
        } else {
            warn!(
                "event=command_undo module=service status=error command={} error_code=undo_refused",
                word
            );
            Err(CommandError::UndoFailed(word))
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    fn push_history(&mut self, command: Box<dyn Command>) {
        if self.history_capacity == 0 {
            return;
        }
        if self.history.len() == self.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(command);
    }
}

/// Stable metadata-only error tag for logs; never includes user input.
fn error_code(err: &CommandError) -> &'static str {
    match err {
        CommandError::StudentNotFound(_) => "student_not_found",
        CommandError::NoAttendanceRecord { .. } => "attendance_not_found",
        CommandError::InvalidStudentNumber(_) => "invalid_student_number",
        CommandError::NonexistentStudent => "student_not_in_list",
        CommandError::DuplicateStudent => "duplicate_student",
        CommandError::NoFieldsToEdit => "no_fields_to_edit",
        CommandError::Validation(_) => "validation_failed",
        CommandError::Model(_) => "model_rejected",
        CommandError::NothingToUndo => "nothing_to_undo",
        CommandError::UndoFailed(_) => "undo_refused",
    }
}
