//! User-facing positions for students.
//!
//! Students are addressed by their 1-based position in the roster as loaded.
//! Positions are not stable: they are recomputed from the current order every
//! time the store is loaded, so removing student 2 turns student 3 into 2.

use crate::error::{GradebookError, Result};
use crate::model::Student;

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedStudent {
    /// 1-based position shown to the user
    pub index: usize,
    pub student: Student,
}

/// Pairs each student with its display position.
pub fn index_students(students: Vec<Student>) -> Vec<IndexedStudent> {
    students
        .into_iter()
        .enumerate()
        .map(|(i, student)| IndexedStudent {
            index: i + 1,
            student,
        })
        .collect()
}

/// Parses a number typed by the user (a position or a grade).
///
/// Any integer is accepted here (including zero and negatives); range checks
/// happen in [`resolve_position`] against the current roster.
pub fn parse_number(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| GradebookError::InvalidNumber(input.trim().to_string()))
}

/// Converts a 1-based position into a vector offset for a roster of `len`.
pub fn resolve_position(position: i64, len: usize) -> Result<usize> {
    usize::try_from(position)
        .ok()
        .filter(|p| (1..=len).contains(p))
        .map(|p| p - 1)
        .ok_or(GradebookError::InvalidChoice(position))
}
