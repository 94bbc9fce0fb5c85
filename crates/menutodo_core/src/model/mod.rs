//! Domain model for the date-keyed task list.
//!
//! # Responsibility
//! - Define the canonical day identity (`DayKey`) and `Task` record.
//! - Hold the in-memory `TaskStore` and its structural invariants.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - An empty day is represented by key absence, never by an empty list.

pub mod day_key;
pub mod task;
pub mod task_store;
