//! `Model` repository contract.
//!
//! # Responsibility
//! - Expose CRUD-style lookups and mutations over students and persons.
//! - Expose predicate-driven live views for display layers.
//!
//! # Invariants
//! - Lookups return `None` on a miss; only writes report errors.
//! - `revision()` increases after every successful mutation and never
//!   otherwise.

use crate::model::fields::{Name, StudentNumber, TutorialGroup};
use crate::model::person::Person;
use crate::model::student::Student;
use crate::repo::predicate::{PersonPredicate, StudentPredicate};
use crate::repo::student_book::StudentBook;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Write failures reported by `Model` implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Another student already uses this name or student number.
    DuplicateStudent(Name),
    DuplicatePerson(Name),
    StudentNotFound(Name),
    PersonNotFound(Name),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateStudent(name) => {
                write!(f, "student name or number already in use: {name}")
            }
            Self::DuplicatePerson(name) => write!(f, "person already exists: {name}"),
            Self::StudentNotFound(name) => write!(f, "student not found: {name}"),
            Self::PersonNotFound(name) => write!(f, "person not found: {name}"),
        }
    }
}

impl Error for ModelError {}

/// In-memory repository interface consumed by commands.
///
/// Implementations are single-owner: commands receive `&mut dyn Model`, so
/// exactly one mutator exists at a time.
pub trait Model {
    fn has_person(&self, person: &Person) -> bool;
    fn add_person(&mut self, person: Person) -> ModelResult<()>;
    /// Removes the person with the same identity; returns whether one existed.
    fn delete_person(&mut self, target: &Person) -> bool;
    fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()>;
    fn person_by_name(&self, name: &Name) -> Option<&Person>;
    fn filtered_persons(&self) -> Vec<&Person>;
    fn update_person_filter(&mut self, predicate: PersonPredicate);

    fn has_student(&self, student: &Student) -> bool;
    fn add_student(&mut self, student: Student) -> ModelResult<()>;
    /// Adds a student at `index`, clamped to the collection length.
    fn insert_student(&mut self, index: usize, student: Student) -> ModelResult<()>;
    /// Removes the student with the same student number; returns the position
    /// it occupied, or `None` when no student matched.
    fn delete_student(&mut self, target: &Student) -> Option<usize>;
    fn set_student(&mut self, target: &Student, edited: Student) -> ModelResult<()>;
    fn student_by_name(&self, name: &Name) -> Option<&Student>;
    fn student_by_number(&self, number: &StudentNumber) -> Option<&Student>;
    fn all_students_by_name(&self, name: &Name) -> Vec<&Student>;
    fn students_by_tutorial_group(&self, group: &TutorialGroup) -> Vec<&Student>;
    fn filtered_students(&self) -> Vec<&Student>;
    fn update_student_filter(&mut self, predicate: StudentPredicate);

    /// Read-only snapshot of the full collections for persistence.
    fn student_book(&self) -> &StudentBook;
    /// Mutation counter for change detection by display layers.
    fn revision(&self) -> u64;
}
