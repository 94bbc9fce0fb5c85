//! Versioned JSON payload for the task store.
//!
//! Wire shape (version 1):
//!
//! ```json
//! {"version":1,"days":[{"day":19727,"tasks":[{"id":"<uuid>","title":"Buy milk"}]}]}
//! ```
//!
//! `day` is the `DayKey` day count since 1970-01-01, so key identity survives
//! the round trip without any date parsing.
//!
//! # Invariants
//! - `decode_store` accepts exactly what `encode_store` can produce and rejects
//!   anything that would break `TaskStore` invariants.

use crate::model::day_key::DayKey;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::model::task_store::TaskStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const PAYLOAD_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StorePayload {
    version: u32,
    days: Vec<DayPayload>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DayPayload {
    day: i32,
    tasks: Vec<TaskPayload>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TaskPayload {
    id: TaskId,
    title: String,
}

/// Why a stored payload was rejected.
#[derive(Debug)]
pub enum DecodeError {
    Json(serde_json::Error),
    UnsupportedVersion(u32),
    DayOutOfRange(i32),
    DuplicateDay(DayKey),
    EmptyDay(DayKey),
    DuplicateTaskId(TaskId),
    InvalidTask(TaskValidationError),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed task payload: {err}"),
            Self::UnsupportedVersion(version) => write!(
                f,
                "unsupported task payload version {version}; expected {PAYLOAD_VERSION}"
            ),
            Self::DayOutOfRange(day) => write!(f, "day {day} is outside the calendar range"),
            Self::DuplicateDay(day) => write!(f, "day {day} appears more than once"),
            Self::EmptyDay(day) => write!(f, "day {day} has an empty task list"),
            Self::DuplicateTaskId(id) => write!(f, "task id {id} appears more than once"),
            Self::InvalidTask(err) => write!(f, "invalid task: {err}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidTask(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<TaskValidationError> for DecodeError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidTask(value)
    }
}

/// Serializes the whole store, days in chronological order.
pub fn encode_store(store: &TaskStore) -> serde_json::Result<Vec<u8>> {
    let payload = StorePayload {
        version: PAYLOAD_VERSION,
        days: store
            .days()
            .map(|(day, tasks)| DayPayload {
                day: day.days_since_epoch(),
                tasks: tasks
                    .iter()
                    .map(|task| TaskPayload {
                        id: task.id(),
                        title: task.title().to_string(),
                    })
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_vec(&payload)
}

/// Parses and validates a payload produced by [`encode_store`].
pub fn decode_store(bytes: &[u8]) -> Result<TaskStore, DecodeError> {
    let payload: StorePayload = serde_json::from_slice(bytes)?;
    if payload.version != PAYLOAD_VERSION {
        return Err(DecodeError::UnsupportedVersion(payload.version));
    }

    let mut store = TaskStore::new();
    let mut seen_ids = HashSet::new();
    for entry in payload.days {
        let day = DayKey::from_days_since_epoch(entry.day)
            .ok_or(DecodeError::DayOutOfRange(entry.day))?;
        if store.contains_day(day) {
            return Err(DecodeError::DuplicateDay(day));
        }
        if entry.tasks.is_empty() {
            return Err(DecodeError::EmptyDay(day));
        }
        for task in entry.tasks {
            if !seen_ids.insert(task.id) {
                return Err(DecodeError::DuplicateTaskId(task.id));
            }
            store.push(day, Task::with_id(task.id, task.title)?);
        }
    }
    Ok(store)
}
