//! Student-record domain model.
//!
//! # Responsibility
//! - Define validated value types (`Name`, `StudentNumber`, ...) shared by
//!   the repository and command layers.
//! - Define the `Person` and `Student` records and their attendance history.
//!
//! # Invariants
//! - Value types can only be constructed through validating constructors,
//!   including when deserialized.
//! - A student holds at most one attendance record per calendar date.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod attendance;
pub mod fields;
pub mod person;
pub mod student;

/// Field-level validation failure.
///
/// Each variant carries the rejected input so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidStudentNumber(String),
    InvalidTutorialGroup(String),
    InvalidAttendance(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names should only contain alphanumeric characters and spaces, and it should not be blank"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "invalid phone `{value}`: phone numbers should only contain digits, and be at least 3 digits long"
            ),
            Self::InvalidStudentNumber(value) => write!(
                f,
                "invalid student number `{value}`: expected `A`, 7 digits and one letter, e.g. A1234567B"
            ),
            Self::InvalidTutorialGroup(value) => write!(
                f,
                "invalid tutorial group `{value}`: expected 1 to 10 letters or digits, e.g. T01"
            ),
            Self::InvalidAttendance(value) => write!(
                f,
                "invalid attendance `{value}`: expected present|absent|late|excused"
            ),
        }
    }
}

impl Error for ValidationError {}
