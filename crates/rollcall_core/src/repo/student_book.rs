//! Serializable snapshot of all persons and students.
//!
//! # Responsibility
//! - Own the two backing collections in insertion order.
//! - Enforce uniqueness on every write path.
//!
//! # Invariants
//! - No two students share a name or a student number.
//! - No two persons share a name.

use crate::model::person::Person;
use crate::model::student::Student;
use crate::repo::model::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// Wholesale view of the record collections handed to persistence.
///
/// Deserialized snapshots are not trusted: rebuild them through
/// `InMemoryModel::from_book`, which re-checks uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentBook {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    students: Vec<Student>,
}

impl StudentBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.students.is_empty()
    }

    pub(crate) fn add_person(&mut self, person: Person) -> ModelResult<()> {
        if self.persons.iter().any(|p| p.is_same_person(&person)) {
            return Err(ModelError::DuplicatePerson(person.name));
        }
        self.persons.push(person);
        Ok(())
    }

    pub(crate) fn remove_person(&mut self, target: &Person) -> bool {
        let before = self.persons.len();
        self.persons.retain(|p| !p.is_same_person(target));
        self.persons.len() != before
    }

    pub(crate) fn replace_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p.is_same_person(target))
            .ok_or_else(|| ModelError::PersonNotFound(target.name.clone()))?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.is_same_person(&edited));
        if collides {
            return Err(ModelError::DuplicatePerson(edited.name));
        }
        self.persons[index] = edited;
        Ok(())
    }

    pub(crate) fn add_student(&mut self, student: Student) -> ModelResult<()> {
        self.insert_student(self.students.len(), student)
    }

    pub(crate) fn insert_student(&mut self, index: usize, student: Student) -> ModelResult<()> {
        if self.students.iter().any(|s| s.is_same_student(&student)) {
            return Err(ModelError::DuplicateStudent(student.name));
        }
        let index = index.min(self.students.len());
        self.students.insert(index, student);
        Ok(())
    }

    pub(crate) fn remove_student(&mut self, target: &Student) -> Option<usize> {
        let index = self
            .students
            .iter()
            .position(|s| s.student_number == target.student_number)?;
        self.students.remove(index);
        Some(index)
    }

    pub(crate) fn replace_student(&mut self, target: &Student, edited: Student) -> ModelResult<()> {
        let index = self
            .students
            .iter()
            .position(|s| s.student_number == target.student_number)
            .ok_or_else(|| ModelError::StudentNotFound(target.name.clone()))?;
        let collides = self
            .students
            .iter()
            .enumerate()
            .any(|(i, s)| i != index && s.is_same_student(&edited));
        if collides {
            return Err(ModelError::DuplicateStudent(edited.name));
        }
        self.students[index] = edited;
        Ok(())
    }
}
