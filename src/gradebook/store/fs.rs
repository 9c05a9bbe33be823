use super::{codec, Roster, StudentStore};
use crate::error::{GradebookError, Result};
use crate::model::Student;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed store: the whole roster lives in a single text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty store file if none exists yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.dir() {
            fs::create_dir_all(parent).map_err(|e| self.save_error(e))?;
        }
        fs::write(&self.path, "").map_err(|e| self.save_error(e))?;
        debug!("created empty store at {}", self.path.display());
        Ok(())
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "students".to_string());
        let tmp_name = format!(".{}-{}.tmp", name, Uuid::new_v4());
        match self.dir() {
            Some(dir) => dir.join(tmp_name),
            None => PathBuf::from(tmp_name),
        }
    }

    fn save_error(&self, source: std::io::Error) -> GradebookError {
        GradebookError::Save {
            path: self.path.clone(),
            source,
        }
    }
}

impl StudentStore for FileStore {
    fn load(&self) -> Result<Roster> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no store at {}, starting empty", self.path.display());
                return Ok(Roster::default());
            }
            Err(e) => return Err(GradebookError::Io(e)),
        };

        let roster = codec::decode(&content);
        for rejected in &roster.rejected {
            warn!(
                "Skipping malformed line {} in {}: {} ({:?})",
                rejected.line_number,
                self.path.display(),
                rejected.reason,
                rejected.content
            );
        }
        debug!(
            "loaded {} students from {}",
            roster.students.len(),
            self.path.display()
        );
        Ok(roster)
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        let content = codec::encode(students);

        // Write next to the target, then rename over it
        let tmp_file = self.tmp_path();
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.save_error(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.save_error(e));
        }

        debug!(
            "saved {} students to {}",
            students.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("students_list.txt"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        let roster = store.load().unwrap();
        assert!(roster.students.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_load() {
        let (_dir, mut store) = setup();
        let students = vec![
            Student::new("Alice", "alice@x.com").with_grades(vec![85]),
            Student::new("Bob", "bob@x.com"),
        ];
        store.save(&students).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "Alice-:-alice@x.com-:-85\nBob-:-bob@x.com-:-\n");

        let roster = store.load().unwrap();
        assert_eq!(roster.students, students);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (_dir, mut store) = setup();
        store
            .save(&[Student::new("Alice", "alice@x.com"), Student::new("Bob", "bob@x.com")])
            .unwrap();
        store.save(&[Student::new("Carol", "carol@x.com")]).unwrap();

        let roster = store.load().unwrap();
        assert_eq!(roster.students.len(), 1);
        assert_eq!(roster.students[0].name, "Carol");
    }

    #[test]
    fn save_leaves_no_tmp_files() {
        let (dir, mut store) = setup();
        store.save(&[Student::new("Alice", "alice@x.com")]).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn save_into_missing_directory_fails_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("students_list.txt");
        let mut store = FileStore::new(&path);

        let err = store.save(&[Student::new("Alice", "alice@x.com")]).unwrap_err();
        match err {
            GradebookError::Save { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_reports_malformed_lines() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            "Alice-:-alice@x.com-:-85\nnot a record\nBob-:-bob@x.com-:-abc\n",
        )
        .unwrap();

        let roster = store.load().unwrap();
        assert_eq!(roster.students.len(), 1);
        assert_eq!(roster.rejected.len(), 2);
        assert_eq!(roster.rejected[0].line_number, 2);
        assert_eq!(roster.rejected[1].line_number, 3);
    }

    #[test]
    fn ensure_exists_creates_empty_file_once() {
        let (_dir, mut store) = setup();
        store.ensure_exists().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");

        store.save(&[Student::new("Alice", "alice@x.com")]).unwrap();
        store.ensure_exists().unwrap();
        assert_eq!(store.load().unwrap().students.len(), 1);
    }
}
