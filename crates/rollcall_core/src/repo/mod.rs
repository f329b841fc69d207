//! Repository layer: the `Model` contract and its in-memory implementation.
//!
//! # Responsibility
//! - Define the narrow interface commands use to read and mutate records.
//! - Keep uniqueness rules in one place, below the command layer.
//!
//! # Invariants
//! - Student names and student numbers are unique; person names are unique.
//! - Failed writes leave the collections untouched.
//! - Filtered views never mutate the backing collections.

pub mod in_memory;
pub mod model;
pub mod predicate;
pub mod student_book;
