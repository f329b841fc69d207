//! Core domain logic for rollcall, a student attendance and record keeper.
//! This crate is the single source of truth for business invariants.

pub mod command;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::add_student::AddStudentCommand;
pub use command::delete_attendance::DeleteAttendanceCommand;
pub use command::delete_student::DeleteStudentCommand;
pub use command::edit_student::{EditStudentCommand, EditStudentDescriptor};
pub use command::general::{ExitCommand, HelpCommand};
pub use command::mark_attendance::MarkAttendanceCommand;
pub use command::view::{FilterGroupCommand, FindStudentCommand, ListStudentsCommand};
pub use command::{Command, CommandError, CommandOutcome, CommandResult};
pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::attendance::{Attendance, AttendanceRecord};
pub use model::fields::{Name, Phone, StudentNumber, TutorialGroup};
pub use model::person::Person;
pub use model::student::Student;
pub use model::ValidationError;
pub use repo::in_memory::InMemoryModel;
pub use repo::model::{Model, ModelError, ModelResult};
pub use repo::student_book::StudentBook;
pub use service::command_service::CommandService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
