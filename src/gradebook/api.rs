//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every roster operation, whatever UI drives it.
//!
//! The facade:
//! - **Normalizes inputs**: raw text typed by the user (positions, grades) is
//!   parsed here into typed values before a command runs
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and performs no terminal I/O.
//!
//! `GradebookApi<S: StudentStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::config::GradebookConfig;
use crate::error::Result;
use crate::index::{parse_number, IndexedStudent};
use crate::store::StudentStore;

/// The main API facade for gradebook operations.
pub struct GradebookApi<S: StudentStore> {
    store: S,
    honors_threshold: u8,
}

impl<S: StudentStore> GradebookApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, &GradebookConfig::default())
    }

    pub fn with_config(store: S, config: &GradebookConfig) -> Self {
        Self {
            store,
            honors_threshold: config.honors_threshold,
        }
    }

    pub fn add_student(&mut self, name: &str, email: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, email)
    }

    pub fn remove_student(&mut self, position: &str) -> Result<commands::CmdResult> {
        let position = parse_number(position)?;
        commands::remove::run(&mut self.store, position)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Resolves a position typed by the user to the student it refers to.
    pub fn select_student(&self, position: &str) -> Result<IndexedStudent> {
        let position = parse_number(position)?;
        commands::grade::select(&self.store, position)
    }

    pub fn add_grade(&mut self, position: &str, grade: &str) -> Result<commands::CmdResult> {
        let position = parse_number(position)?;
        let grade = parse_number(grade)?;
        commands::grade::run(&mut self.store, position, grade)
    }

    pub fn statistics(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, self.honors_threshold)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradebookError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_and_list() {
        let mut api = GradebookApi::new(InMemoryStore::new());
        api.add_student("Alice", "alice@x.com").unwrap();

        let result = api.list_students().unwrap();
        assert_eq!(result.listed_students.len(), 1);
        assert_eq!(result.listed_students[0].student.email, "alice@x.com");
    }

    #[test]
    fn remove_parses_position() {
        let mut api = GradebookApi::new(StoreFixture::new().with_students(2).store);
        let result = api.remove_student(" 2\n").unwrap();
        assert_eq!(result.affected_students[0].name, "Student 2");
    }

    #[test]
    fn remove_rejects_non_number() {
        let mut api = GradebookApi::new(StoreFixture::new().with_students(2).store);
        let err = api.remove_student("two").unwrap_err();
        assert!(matches!(err, GradebookError::InvalidNumber(_)));
        assert_eq!(err.to_string(), "Please enter a valid number.");
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn add_grade_rejects_non_number_grade() {
        let mut api = GradebookApi::new(StoreFixture::new().with_students(1).store);
        assert!(matches!(
            api.add_grade("1", "A+"),
            Err(GradebookError::InvalidNumber(_))
        ));
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn add_grade_parses_both_inputs() {
        let mut api = GradebookApi::new(StoreFixture::new().with_students(1).store);
        let result = api.add_grade("1", "88").unwrap();
        assert_eq!(result.affected_students[0].grades(), &[88]);
    }

    #[test]
    fn select_student_by_position() {
        let api = GradebookApi::new(StoreFixture::new().with_students(2).store);
        let selected = api.select_student("1").unwrap();
        assert_eq!(selected.student.name, "Student 1");
        assert!(matches!(
            api.select_student("x"),
            Err(GradebookError::InvalidNumber(_))
        ));
    }

    #[test]
    fn statistics_use_configured_threshold() {
        let store = StoreFixture::new()
            .with_graded_student("Alice", "alice@x.com", &[95, 85])
            .store;
        let config = GradebookConfig {
            honors_threshold: 80,
            ..GradebookConfig::default()
        };
        let api = GradebookApi::with_config(store, &config);

        let stats = api.statistics().unwrap().statistics.unwrap();
        assert_eq!(stats.grades_above_threshold, 2);
    }
}
