use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Statistics;
use crate::store::StudentStore;

use super::helpers::load_students;

pub fn run<S: StudentStore>(store: &S, honors_threshold: u8) -> Result<CmdResult> {
    let students = load_students(store)?;
    let mut result = CmdResult::default();

    if students.is_empty() {
        result.add_message(CmdMessage::info("No students in the system."));
        return Ok(result);
    }

    match Statistics::compute(&students, honors_threshold) {
        Some(stats) => Ok(result.with_statistics(stats)),
        None => {
            result.add_message(CmdMessage::info("No grades recorded yet."));
            Ok(result)
        }
    }
}
