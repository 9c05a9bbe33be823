//! Line-oriented text encoding of the roster.
//!
//! Each student is one line with three fields:
//!
//! ```text
//! name-:-email-:-grade,grade,grade
//! ```
//!
//! The grades field is empty for a student without grades. There is no header
//! and no escaping; the separator cannot appear inside a name or email, and a
//! name cannot end with `-:`.

use super::{RejectedLine, Roster};
use crate::model::{Student, MAX_GRADE};

pub const FIELD_SEPARATOR: &str = "-:-";
const GRADE_SEPARATOR: char = ',';

/// Why a stored line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line does not split into exactly three fields
    FieldCount(usize),
    EmptyName,
    EmptyEmail,
    /// A grade token that is not an integer in the valid range
    InvalidGrade(String),
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineError::FieldCount(n) => write!(f, "expected 3 fields, found {}", n),
            LineError::EmptyName => write!(f, "name is empty"),
            LineError::EmptyEmail => write!(f, "email is empty"),
            LineError::InvalidGrade(token) => write!(f, "invalid grade '{}'", token),
        }
    }
}

impl std::error::Error for LineError {}

pub fn encode_student(student: &Student) -> String {
    let grades = student
        .grades()
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{}{sep}{}{sep}{}\n",
        student.name,
        student.email,
        grades,
        sep = FIELD_SEPARATOR
    )
}

pub fn encode(students: &[Student]) -> String {
    students.iter().map(encode_student).collect()
}

pub fn decode_line(line: &str) -> Result<Student, LineError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [name, email, grades] = fields.as_slice() else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(LineError::EmptyName);
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(LineError::EmptyEmail);
    }

    let grades = grades
        .trim()
        .split(GRADE_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_grade)
        .collect::<Result<Vec<u8>, LineError>>()?;

    Ok(Student::new(name, email).with_grades(grades))
}

fn parse_grade(token: &str) -> Result<u8, LineError> {
    token
        .parse::<u8>()
        .ok()
        .filter(|g| *g <= MAX_GRADE)
        .ok_or_else(|| LineError::InvalidGrade(token.to_string()))
}

/// Decodes a whole store file. Blank lines are ignored; lines that fail to
/// decode are collected in [`Roster::rejected`].
pub fn decode(content: &str) -> Roster {
    let mut roster = Roster::default();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(student) => roster.students.push(student),
            Err(reason) => roster.rejected.push(RejectedLine {
                line_number: i + 1,
                content: line.to_string(),
                reason,
            }),
        }
    }
    roster
}
