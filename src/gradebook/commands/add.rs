use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GradebookError, Result};
use crate::model::Student;
use crate::store::StudentStore;
use crate::validation::{normalize_email, normalize_name};
use log::info;

use super::helpers::load_students;

pub fn run<S: StudentStore>(store: &mut S, name: &str, email: &str) -> Result<CmdResult> {
    let email = normalize_email(email)?;
    let name = normalize_name(name)?;

    let mut students = load_students(store)?;
    if students.iter().any(|s| s.has_email(&email)) {
        return Err(GradebookError::DuplicateEmail(email));
    }

    let student = Student::new(name, email);
    students.push(student.clone());
    store.save(&students)?;
    info!("added student {} <{}>", student.name, student.email);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} has been added successfully!",
        student.name
    )));
    Ok(result.with_affected_students(vec![student]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_student_with_no_grades() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Alice", "alice@x.com").unwrap();

        assert_eq!(result.affected_students.len(), 1);
        assert_eq!(store.content(), "Alice-:-alice@x.com-:-\n");
        assert_eq!(
            result.messages[0].content,
            "Alice has been added successfully!"
        );
    }

    #[test]
    fn appends_to_end_of_roster() {
        let mut store = StoreFixture::new().with_students(2).store;
        run(&mut store, "Carol", "carol@x.com").unwrap();

        let students = load_students(&store).unwrap();
        assert_eq!(students.len(), 3);
        assert_eq!(students[2].name, "Carol");
    }

    #[test]
    fn trims_name_and_email() {
        let mut store = InMemoryStore::new();
        run(&mut store, "  Alice  ", " alice@x.com ").unwrap();
        assert_eq!(store.content(), "Alice-:-alice@x.com-:-\n");
    }

    #[test]
    fn rejects_invalid_email_without_saving() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "Alice", "not-an-email").unwrap_err();

        assert!(matches!(err, GradebookError::InvalidEmail(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn rejects_blank_name_without_saving() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "   ", "alice@x.com").unwrap_err();

        assert!(matches!(err, GradebookError::InvalidName(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn rejects_duplicate_email() {
        let mut store = StoreFixture::new()
            .with_student("Alice", "alice@x.com")
            .store;
        let before = store.content().to_string();

        let err = run(&mut store, "Other Alice", "alice@x.com").unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateEmail(ref e) if e == "alice@x.com"));
        assert_eq!(
            err.to_string(),
            "A student with email alice@x.com already exists!"
        );
        assert_eq!(store.content(), before);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn names_with_partial_separators_load_back_unchanged() {
        let names = ["Jean-", "Jean:", "-Jean", ":-Jean", "Je:-an", "Je-:an", "A - : B"];
        let mut store = InMemoryStore::new();
        for (i, name) in names.iter().enumerate() {
            run(&mut store, name, &format!("s{}@x.com", i)).unwrap();
        }

        let roster = store.load().unwrap();
        assert!(roster.rejected.is_empty());
        for (i, (student, name)) in roster.students.iter().zip(names).enumerate() {
            assert_eq!(student.name, name);
            assert_eq!(student.email, format!("s{}@x.com", i));
        }
    }

    #[test]
    fn rejects_name_ending_in_separator_prefix() {
        let mut store = StoreFixture::new()
            .with_student("Jean", "jean@x.com")
            .store;

        for name in ["Jean-:", "-:"] {
            let err = run(&mut store, name, "other@x.com").unwrap_err();
            assert!(matches!(err, GradebookError::InvalidName(_)));
        }
        assert_eq!(store.save_count(), 0);

        // The existing address still blocks a duplicate.
        let err = run(&mut store, "Jean Again", "jean@x.com").unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateEmail(_)));
    }

    #[test]
    fn duplicate_check_ignores_case() {
        let mut store = StoreFixture::new()
            .with_student("Alice", "alice@x.com")
            .store;
        let err = run(&mut store, "Alice", "ALICE@X.COM").unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateEmail(_)));
    }
}
