//! Durable storage for the task store.
//!
//! # Responsibility
//! - Define the key-value slot contract and its SQLite implementation.
//! - Encode/decode the task store payload with explicit schema validation.
//! - Provide the best-effort persistence adapter used by the context.
//!
//! # Invariants
//! - Loading never fails: absent or corrupt payloads become an empty store.
//! - Day keys round-trip exactly through the payload.

pub mod slot_repo;
pub mod task_codec;
pub mod task_persistence;
