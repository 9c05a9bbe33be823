//! # Storage Layer
//!
//! This module defines the storage abstraction for the gradebook. The
//! [`StudentStore`] trait lets the commands work against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one text file holding the whole
//!   roster (see [`codec`] for the line format)
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Whole-Roster Access
//!
//! There is no per-record access. Every operation loads the full roster,
//! changes it in memory and saves the full roster back. The file is the
//! database; nothing is cached between operations.

use crate::error::Result;
use crate::model::Student;

pub mod codec;
pub mod fs;
pub mod memory;

/// A stored line that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the store file
    pub line_number: usize,
    pub content: String,
    pub reason: codec::LineError,
}

/// The result of loading the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub students: Vec<Student>,
    pub rejected: Vec<RejectedLine>,
}

/// Abstract interface for roster storage.
pub trait StudentStore {
    /// Load every student. A store that does not exist yet is empty.
    fn load(&self) -> Result<Roster>;

    /// Replace the stored roster with `students`.
    fn save(&mut self, students: &[Student]) -> Result<()>;
}
