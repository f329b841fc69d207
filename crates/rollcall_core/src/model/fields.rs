//! Validated identity and contact fields.
//!
//! # Invariants
//! - Stored values are already normalized (trimmed, and upper-cased where the
//!   format is case-insensitive), so equality is plain string equality.
//! - Deserialization routes through the same validating constructors.

use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static STUDENT_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^A\d{7}[A-Z]$").expect("valid student number regex"));
static TUTORIAL_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{1,10}$").expect("valid tutorial group regex"));

/// Display name of a person or student.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Validates and wraps a name. Surrounding whitespace is trimmed.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidName(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        NAME_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether any whitespace-separated word equals `word`,
    /// ignoring ASCII case.
    pub fn contains_word_ignore_case(&self, word: &str) -> bool {
        let word = word.trim();
        !word.is_empty()
            && self
                .0
                .split_whitespace()
                .any(|part| part.eq_ignore_ascii_case(word))
    }
}

/// Contact phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        PHONE_RE.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Matriculation number that uniquely identifies a student.
///
/// Format: `A`, seven digits, one uppercase check letter (`A1234567B`).
/// Input is accepted in any case and stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentNumber(String);

impl StudentNumber {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = value.as_ref().trim().to_ascii_uppercase();
        if !STUDENT_NUMBER_RE.is_match(&normalized) {
            return Err(ValidationError::InvalidStudentNumber(
                value.as_ref().trim().to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    /// Checks the format without allocating a value.
    pub fn is_valid(value: &str) -> bool {
        STUDENT_NUMBER_RE.is_match(&value.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Label of the tutorial group a student belongs to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TutorialGroup(String);

impl TutorialGroup {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = value.as_ref().trim().to_ascii_uppercase();
        if !TUTORIAL_GROUP_RE.is_match(&normalized) {
            return Err(ValidationError::InvalidTutorialGroup(
                value.as_ref().trim().to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_field_impls {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl TryFrom<String> for $ty {
                type Error = ValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::parse(value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }
        )+
    };
}

string_field_impls!(Name, Phone, StudentNumber, TutorialGroup);
