use rollcall_core::repo::predicate::{PersonPredicate, StudentPredicate};
use rollcall_core::{
    Command, CommandError, DeleteStudentCommand, InMemoryModel, Model, ModelResult, Name, Person,
    Student, StudentBook, StudentNumber, TutorialGroup,
};

/// Model stub that fails the test on any call a test did not opt into.
///
/// `student` is returned by number lookups; `deleted` records removals.
/// With `stale_lookup` set, the lookup still finds the student but the
/// removal reports that nothing matched.
#[derive(Default)]
struct ModelStub {
    student: Option<Student>,
    lookups_allowed: bool,
    stale_lookup: bool,
    deleted: Vec<Student>,
}

impl Model for ModelStub {
    fn has_person(&self, _person: &Person) -> bool {
        panic!("This method should not be called.")
    }

    fn add_person(&mut self, _person: Person) -> ModelResult<()> {
        panic!("This method should not be called.")
    }

    fn delete_person(&mut self, _target: &Person) -> bool {
        panic!("This method should not be called.")
    }

    fn set_person(&mut self, _target: &Person, _edited: Person) -> ModelResult<()> {
        panic!("This method should not be called.")
    }

    fn person_by_name(&self, _name: &Name) -> Option<&Person> {
        panic!("This method should not be called.")
    }

    fn filtered_persons(&self) -> Vec<&Person> {
        panic!("This method should not be called.")
    }

    fn update_person_filter(&mut self, _predicate: PersonPredicate) {
        panic!("This method should not be called.")
    }

    fn has_student(&self, _student: &Student) -> bool {
        panic!("This method should not be called.")
    }

    fn add_student(&mut self, _student: Student) -> ModelResult<()> {
        panic!("This method should not be called.")
    }

    fn insert_student(&mut self, _index: usize, _student: Student) -> ModelResult<()> {
        panic!("This method should not be called.")
    }

    fn delete_student(&mut self, target: &Student) -> Option<usize> {
        if self.stale_lookup {
            return None;
        }
        self.deleted.push(target.clone());
        Some(0)
    }

    fn set_student(&mut self, _target: &Student, _edited: Student) -> ModelResult<()> {
        panic!("This method should not be called.")
    }

    fn student_by_name(&self, _name: &Name) -> Option<&Student> {
        panic!("This method should not be called.")
    }

    fn student_by_number(&self, number: &StudentNumber) -> Option<&Student> {
        assert!(self.lookups_allowed, "lookup must not happen");
        self.student
            .as_ref()
            .filter(|student| &student.student_number == number)
    }

    fn all_students_by_name(&self, _name: &Name) -> Vec<&Student> {
        panic!("This method should not be called.")
    }

    fn students_by_tutorial_group(&self, _group: &TutorialGroup) -> Vec<&Student> {
        panic!("This method should not be called.")
    }

    fn filtered_students(&self) -> Vec<&Student> {
        panic!("This method should not be called.")
    }

    fn update_student_filter(&mut self, _predicate: StudentPredicate) {
        panic!("This method should not be called.")
    }

    fn student_book(&self) -> &StudentBook {
        panic!("This method should not be called.")
    }

    fn revision(&self) -> u64 {
        panic!("This method should not be called.")
    }
}

fn john_ng() -> Student {
    Student::new(
        Name::parse("John Ng").expect("valid name"),
        StudentNumber::parse("A1234567B").expect("valid student number"),
        TutorialGroup::parse("T01").expect("valid tutorial group"),
    )
}

#[test]
fn malformed_number_fails_before_any_lookup() {
    let mut stub = ModelStub::default();
    let mut command = DeleteStudentCommand::new("12345");

    let err = command.execute(&mut stub).unwrap_err();
    assert_eq!(err, CommandError::InvalidStudentNumber("12345".to_string()));
    assert_eq!(err.to_string(), "The student number you provided is not valid.");
    assert!(stub.deleted.is_empty());
}

#[test]
fn malformed_number_is_rejected_even_when_a_student_exists() {
    let mut stub = ModelStub {
        student: Some(john_ng()),
        ..ModelStub::default()
    };
    let mut command = DeleteStudentCommand::new("A1234567");

    assert!(matches!(
        command.execute(&mut stub),
        Err(CommandError::InvalidStudentNumber(_))
    ));
}

#[test]
fn unknown_valid_number_reports_not_in_list() {
    let mut stub = ModelStub {
        student: Some(john_ng()),
        lookups_allowed: true,
        ..ModelStub::default()
    };
    let mut command = DeleteStudentCommand::new("A7654321Z");

    let err = command.execute(&mut stub).unwrap_err();
    assert_eq!(err, CommandError::NonexistentStudent);
    assert_eq!(err.to_string(), "This student is not in your student list.");
    assert!(stub.deleted.is_empty());
}

#[test]
fn existing_student_is_deleted_through_the_model() {
    let mut stub = ModelStub {
        student: Some(john_ng()),
        lookups_allowed: true,
        ..ModelStub::default()
    };
    let mut command = DeleteStudentCommand::new("a1234567b");

    let result = command.execute(&mut stub).unwrap();
    assert_eq!(
        result.feedback,
        "Deleted Student: John Ng; Student Number: A1234567B; Tutorial Group: T01"
    );
    assert_eq!(stub.deleted, vec![john_ng()]);
}

#[test]
fn failed_removal_is_reported_and_not_undoable() {
    let mut stub = ModelStub {
        student: Some(john_ng()),
        lookups_allowed: true,
        stale_lookup: true,
        ..ModelStub::default()
    };
    let mut command = DeleteStudentCommand::new("A1234567B");

    assert_eq!(
        command.execute(&mut stub).unwrap_err(),
        CommandError::NonexistentStudent
    );
    assert!(stub.deleted.is_empty());
    assert!(!command.undo(&mut stub));
}

#[test]
fn delete_then_lookup_returns_none_and_collection_shrinks() {
    let mut model = InMemoryModel::new();
    model.add_student(john_ng()).expect("student should be added");
    let other = Student::new(
        Name::parse("Amy Lee").expect("valid name"),
        StudentNumber::parse("A2222222C").expect("valid student number"),
        TutorialGroup::parse("T02").expect("valid tutorial group"),
    );
    model.add_student(other.clone()).expect("student should be added");

    let mut command = DeleteStudentCommand::new("A1234567B");
    let result = command.execute(&mut model).unwrap();

    assert!(result.feedback.contains("Deleted Student: John Ng"));
    let number = StudentNumber::parse("A1234567B").expect("valid student number");
    assert!(model.student_by_number(&number).is_none());
    assert_eq!(model.student_book().students(), &[other]);
}

#[test]
fn unknown_number_leaves_in_memory_model_unchanged() {
    let mut model = InMemoryModel::new();
    model.add_student(john_ng()).expect("student should be added");
    let before = model.student_book().clone();
    let revision = model.revision();

    let mut command = DeleteStudentCommand::new("A9999999Z");
    assert_eq!(
        command.execute(&mut model).unwrap_err(),
        CommandError::NonexistentStudent
    );

    assert_eq!(model.student_book(), &before);
    assert_eq!(model.revision(), revision);
}

#[test]
fn undo_restores_deleted_student() {
    let mut model = InMemoryModel::new();
    model.add_student(john_ng()).expect("student should be added");

    let mut command = DeleteStudentCommand::new("A1234567B");
    command.execute(&mut model).expect("command should succeed");
    assert!(command.undo(&mut model));
    assert_eq!(model.student_book().students(), &[john_ng()]);

    // Nothing left to reverse.
    assert!(!command.undo(&mut model));
}

#[test]
fn undo_without_execute_is_a_no_op() {
    let mut model = InMemoryModel::new();
    let mut command = DeleteStudentCommand::new("A1234567B");
    assert!(!command.undo(&mut model));
    assert!(model.student_book().is_empty());
}

#[test]
fn undo_restores_original_position() {
    let mut model = InMemoryModel::new();
    model.add_student(john_ng()).expect("student should be added");
    for (name, number) in [("Amy Lee", "A2222222C"), ("Ben Tan", "A3333333D")] {
        model
            .add_student(Student::new(
                Name::parse(name).expect("valid name"),
                StudentNumber::parse(number).expect("valid student number"),
                TutorialGroup::parse("T02").expect("valid tutorial group"),
            ))
            .expect("student should be added");
    }
    let before = model.student_book().clone();

    let mut command = DeleteStudentCommand::new("A1234567B");
    command.execute(&mut model).expect("delete should succeed");
    assert!(command.undo(&mut model));

    let names: Vec<_> = model
        .student_book()
        .students()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["John Ng", "Amy Lee", "Ben Tan"]);
    assert_eq!(model.student_book(), &before);
}
