use crate::error::{GradebookError, Result};
use crate::model::{Student, MAX_GRADE, MIN_GRADE};
use crate::store::StudentStore;

/// Loads the current roster, dropping lines the decoder rejected.
pub fn load_students<S: StudentStore>(store: &S) -> Result<Vec<Student>> {
    Ok(store.load()?.students)
}

/// Checks a grade entered by the user against the valid range.
pub fn check_grade(grade: i64) -> Result<u8> {
    u8::try_from(grade)
        .ok()
        .filter(|g| (MIN_GRADE..=MAX_GRADE).contains(g))
        .ok_or(GradebookError::GradeOutOfRange(grade))
}
