//! In-memory date-keyed task store.
//!
//! # Responsibility
//! - Map each `DayKey` to its tasks in insertion (display) order.
//! - Apply add/delete mutations while keeping the map normalized.
//!
//! # Invariants
//! - No entry maps to an empty list.
//! - Task order within a day is insertion order.
//!
//! Persistence and summary recomputation are the caller's job; see
//! `service::calendar_context`.

use crate::model::day_key::DayKey;
use crate::model::task::{Task, TaskId, TaskValidationError};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    days: BTreeMap<DayKey, Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks stored for `day`, or an empty slice.
    pub fn query(&self, day: DayKey) -> &[Task] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends a new task titled `title` (trimmed) to `day`.
    ///
    /// # Errors
    /// - `BlankTitle` when `title` is empty or whitespace-only; the store is
    ///   left untouched.
    pub fn add(&mut self, day: DayKey, title: &str) -> Result<Task, TaskValidationError> {
        let task = Task::new(title)?;
        self.push(day, task.clone());
        Ok(task)
    }

    /// Removes the task `id` from `day` and returns it.
    ///
    /// Returns `None`, leaving the store untouched, when `day` has no such task.
    pub fn delete(&mut self, day: DayKey, id: TaskId) -> Option<Task> {
        let tasks = self.days.get_mut(&day)?;
        let index = tasks.iter().position(|task| task.id() == id)?;
        let removed = tasks.remove(index);
        if tasks.is_empty() {
            self.days.remove(&day);
        }
        Some(removed)
    }

    pub fn contains_day(&self, day: DayKey) -> bool {
        self.days.contains_key(&day)
    }

    /// Number of days holding at least one task.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn task_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days with their tasks, in chronological order.
    pub fn days(&self) -> impl Iterator<Item = (DayKey, &[Task])> + '_ {
        self.days.iter().map(|(day, tasks)| (*day, tasks.as_slice()))
    }

    pub(crate) fn push(&mut self, day: DayKey, task: Task) {
        self.days.entry(day).or_default().push(task);
    }
}
