use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_position, IndexedStudent};
use crate::store::StudentStore;
use log::info;

use super::helpers::{check_grade, load_students};

/// Looks up the student at the 1-based `position` without changing anything.
pub fn select<S: StudentStore>(store: &S, position: i64) -> Result<IndexedStudent> {
    let mut students = load_students(store)?;
    let offset = resolve_position(position, students.len())?;
    Ok(IndexedStudent {
        index: offset + 1,
        student: students.swap_remove(offset),
    })
}

/// Appends `grade` to the student at the 1-based `position`.
pub fn run<S: StudentStore>(store: &mut S, position: i64, grade: i64) -> Result<CmdResult> {
    let mut students = load_students(store)?;
    let offset = resolve_position(position, students.len())?;
    let grade = check_grade(grade)?;

    let student = &mut students[offset];
    student.add_grade(grade);
    let updated = student.clone();
    store.save(&students)?;
    info!("added grade {} to {} <{}>", grade, updated.name, updated.email);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Grade {} added to {}!",
        grade, updated.name
    )));
    result.add_message(CmdMessage::info(format!(
        "New average: {:.2}",
        updated.average()
    )));
    Ok(result.with_affected_students(vec![updated]))
}
