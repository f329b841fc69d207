//! Default `Model` implementation backed by a `StudentBook`.
//!
//! # Invariants
//! - Filtered views are recomputed from the backing collections on every
//!   read, so they reflect the latest mutation without notification plumbing.
//! - `revision` is bumped only after a write succeeds.

use crate::model::fields::{Name, StudentNumber, TutorialGroup};
use crate::model::person::Person;
use crate::model::student::Student;
use crate::repo::model::{Model, ModelResult};
use crate::repo::predicate::{all_persons, all_students, PersonPredicate, StudentPredicate};
use crate::repo::student_book::StudentBook;
use log::{debug, warn};

/// Process-local record store owned by one command service or test.
pub struct InMemoryModel {
    book: StudentBook,
    person_filter: PersonPredicate,
    student_filter: StudentPredicate,
    revision: u64,
}

impl Default for InMemoryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryModel {
    /// Creates an empty model whose views show every record.
    pub fn new() -> Self {
        Self {
            book: StudentBook::new(),
            person_filter: all_persons(),
            student_filter: all_students(),
            revision: 0,
        }
    }

    /// Rebuilds a model from a snapshot, re-checking uniqueness.
    ///
    /// # Errors
    /// - Returns the first duplicate found, in snapshot order.
    pub fn from_book(book: &StudentBook) -> ModelResult<Self> {
        let mut rebuilt = StudentBook::new();
        for person in book.persons() {
            rebuilt.add_person(person.clone()).inspect_err(|_| {
                warn!("event=model_load module=repo status=error error_code=duplicate_person");
            })?;
        }
        for student in book.students() {
            rebuilt.add_student(student.clone()).inspect_err(|_| {
                warn!("event=model_load module=repo status=error error_code=duplicate_student");
            })?;
        }
        debug!(
            "event=model_load module=repo status=ok persons={} students={}",
            rebuilt.persons().len(),
            rebuilt.students().len()
        );

        Ok(Self {
            book: rebuilt,
            ..Self::new()
        })
    }

    fn bump(&mut self, op: &'static str) {
        self.revision += 1;
        debug!(
            "event=model_write module=repo status=ok op={} revision={}",
            op, self.revision
        );
    }
}

impl Model for InMemoryModel {
    fn has_person(&self, person: &Person) -> bool {
        self.book.persons().iter().any(|p| p.is_same_person(person))
    }

    fn add_person(&mut self, person: Person) -> ModelResult<()> {
        self.book.add_person(person)?;
        self.bump("add_person");
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> bool {
        let removed = self.book.remove_person(target);
        if removed {
            self.bump("delete_person");
        }
        removed
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.book.replace_person(target, edited)?;
        self.bump("set_person");
        Ok(())
    }

    fn person_by_name(&self, name: &Name) -> Option<&Person> {
        self.book.persons().iter().find(|p| &p.name == name)
    }

    fn filtered_persons(&self) -> Vec<&Person> {
        self.book
            .persons()
            .iter()
            .filter(|p| (self.person_filter)(*p))
            .collect()
    }

    fn update_person_filter(&mut self, predicate: PersonPredicate) {
        self.person_filter = predicate;
    }

    fn has_student(&self, student: &Student) -> bool {
        self.book
            .students()
            .iter()
            .any(|s| s.is_same_student(student))
    }

    fn add_student(&mut self, student: Student) -> ModelResult<()> {
        self.book.add_student(student)?;
        self.bump("add_student");
        Ok(())
    }

    fn insert_student(&mut self, index: usize, student: Student) -> ModelResult<()> {
        self.book.insert_student(index, student)?;
        self.bump("insert_student");
        Ok(())
    }

    fn delete_student(&mut self, target: &Student) -> Option<usize> {
        let removed = self.book.remove_student(target);
        if removed.is_some() {
            self.bump("delete_student");
        }
        removed
    }

    fn set_student(&mut self, target: &Student, edited: Student) -> ModelResult<()> {
        self.book.replace_student(target, edited)?;
        self.bump("set_student");
        Ok(())
    }

    fn student_by_name(&self, name: &Name) -> Option<&Student> {
        self.book.students().iter().find(|s| &s.name == name)
    }

    fn student_by_number(&self, number: &StudentNumber) -> Option<&Student> {
        self.book
            .students()
            .iter()
            .find(|s| &s.student_number == number)
    }

    fn all_students_by_name(&self, name: &Name) -> Vec<&Student> {
        self.book
            .students()
            .iter()
            .filter(|s| &s.name == name)
            .collect()
    }

    fn students_by_tutorial_group(&self, group: &TutorialGroup) -> Vec<&Student> {
        self.book
            .students()
            .iter()
            .filter(|s| &s.tutorial_group == group)
            .collect()
    }

    fn filtered_students(&self) -> Vec<&Student> {
        self.book
            .students()
            .iter()
            .filter(|s| (self.student_filter)(*s))
            .collect()
    }

    fn update_student_filter(&mut self, predicate: StudentPredicate) {
        self.student_filter = predicate;
    }

    fn student_book(&self) -> &StudentBook {
        &self.book
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
