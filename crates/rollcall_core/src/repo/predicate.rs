//! Predicates driving the filtered live views.

use crate::model::fields::TutorialGroup;
use crate::model::person::Person;
use crate::model::student::Student;

pub type StudentPredicate = Box<dyn Fn(&Student) -> bool>;
pub type PersonPredicate = Box<dyn Fn(&Person) -> bool>;

pub fn all_students() -> StudentPredicate {
    Box::new(|_| true)
}

pub fn all_persons() -> PersonPredicate {
    Box::new(|_| true)
}

/// Matches students whose name contains any keyword as a whole word,
/// ignoring case. An empty keyword list matches nothing.
pub fn name_contains_any(keywords: Vec<String>) -> StudentPredicate {
    Box::new(move |student| {
        keywords
            .iter()
            .any(|keyword| student.name.contains_word_ignore_case(keyword))
    })
}

pub fn in_tutorial_group(group: TutorialGroup) -> StudentPredicate {
    Box::new(move |student| student.tutorial_group == group)
}
