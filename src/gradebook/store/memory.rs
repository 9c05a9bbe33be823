use super::{codec, Roster, StudentStore};
use crate::error::Result;
use crate::model::Student;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// The roster is kept in its encoded text form so loading goes through the
/// same decoder as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    content: String,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from raw store text, as if read from a file.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            saves: 0,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of times the roster has been saved.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StudentStore for InMemoryStore {
    fn load(&self) -> Result<Roster> {
        Ok(codec::decode(&self.content))
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        self.content = codec::encode(students);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        students: Vec<Student>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                students: Vec::new(),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Student {}", i + 1);
                let email = format!("student{}@school.edu", i + 1);
                self.students.push(Student::new(name, email));
            }
            self.sync()
        }

        pub fn with_student(mut self, name: &str, email: &str) -> Self {
            self.students.push(Student::new(name, email));
            self.sync()
        }

        pub fn with_graded_student(mut self, name: &str, email: &str, grades: &[u8]) -> Self {
            self.students
                .push(Student::new(name, email).with_grades(grades.to_vec()));
            self.sync()
        }

        fn sync(mut self) -> Self {
            self.store.content = codec::encode(&self.students);
            self
        }
    }
}
