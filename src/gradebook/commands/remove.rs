use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::resolve_position;
use crate::store::StudentStore;
use log::info;

use super::helpers::load_students;

/// Removes the student at the 1-based `position`.
pub fn run<S: StudentStore>(store: &mut S, position: i64) -> Result<CmdResult> {
    let mut students = load_students(store)?;
    let offset = resolve_position(position, students.len())?;

    let removed = students.remove(offset);
    store.save(&students)?;
    info!("removed student {} <{}>", removed.name, removed.email);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} has been removed successfully!",
        removed.name
    )));
    Ok(result.with_affected_students(vec![removed]))
}
