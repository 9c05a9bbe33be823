//! Core data types: [`Student`] and the roster-wide [`Statistics`].

use std::collections::BTreeSet;

/// Lowest grade a student can receive.
pub const MIN_GRADE: u8 = 0;
/// Highest grade a student can receive.
pub const MAX_GRADE: u8 = 100;

/// A student on the roster.
///
/// Students carry no identifier of their own: the email is unique across the
/// store and the position in the roster is what the user selects by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub email: String,
    grades: Vec<u8>,
}

impl Student {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            grades: Vec::new(),
        }
    }

    pub fn with_grades(mut self, grades: Vec<u8>) -> Self {
        self.grades = grades;
        self
    }

    /// Grades in the order they were entered.
    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    pub fn add_grade(&mut self, grade: u8) {
        self.grades.push(grade);
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    /// Mean of all grades, or `0.0` for a student with no grades.
    pub fn average(&self) -> f64 {
        mean(&self.grades)
    }

    /// Email comparison used for the uniqueness check on insert.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

/// Roster-wide grade statistics, computed from scratch on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_students: usize,
    pub total_grades: usize,
    pub unique_grades: BTreeSet<u8>,
    pub honors_threshold: u8,
    pub grades_above_threshold: usize,
    pub overall_average: f64,
}

impl Statistics {
    /// Computes statistics over every grade of every student.
    ///
    /// Returns `None` when there are no grades at all.
    pub fn compute(students: &[Student], honors_threshold: u8) -> Option<Self> {
        let all_grades: Vec<u8> = students
            .iter()
            .flat_map(|s| s.grades().iter().copied())
            .collect();

        if all_grades.is_empty() {
            return None;
        }

        Some(Self {
            total_students: students.len(),
            total_grades: all_grades.len(),
            unique_grades: all_grades.iter().copied().collect(),
            honors_threshold,
            grades_above_threshold: all_grades
                .iter()
                .filter(|&&g| g > honors_threshold)
                .count(),
            overall_average: mean(&all_grades),
        })
    }

    pub fn unique_count(&self) -> usize {
        self.unique_grades.len()
    }
}

fn mean(grades: &[u8]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let sum: u64 = grades.iter().map(|&g| u64::from(g)).sum();
    sum as f64 / grades.len() as f64
}
