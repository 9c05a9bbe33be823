use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_students;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(store: &S) -> Result<CmdResult> {
    let roster = store.load()?;
    let mut result = CmdResult::default().with_listed_students(index_students(roster.students));

    if !roster.rejected.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} malformed line(s) in the store; they will be dropped on the next change.",
            roster.rejected.len()
        )));
    }

    Ok(result)
}
