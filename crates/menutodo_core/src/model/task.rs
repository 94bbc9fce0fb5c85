//! Task record.
//!
//! # Invariants
//! - `id` is generated once and never changes or gets reassigned.
//! - `title` is non-empty and carries no surrounding whitespace.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable task identifier.
pub type TaskId = Uuid;

/// Reasons a task cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    BlankTitle,
    /// Title has leading or trailing whitespace.
    UntrimmedTitle,
    /// The nil UUID is reserved and never identifies a task.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::UntrimmedTitle => write!(f, "task title must not have surrounding whitespace"),
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
}

impl Task {
    /// Creates a task with a fresh random id from raw user input.
    ///
    /// Surrounding whitespace, newlines included, is trimmed before
    /// validation, so a title made only of spaces or line breaks is rejected.
    pub fn new(title: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title.trim())
    }

    /// Rebuilds a task whose identity already exists, e.g. from persisted state.
    ///
    /// Unlike [`Task::new`], the title is validated as-is and not trimmed.
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Result<Self, TaskValidationError> {
        let title = title.into();
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        if title.trim().len() != title.len() {
            return Err(TaskValidationError::UntrimmedTitle);
        }
        Ok(Self { id, title })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
