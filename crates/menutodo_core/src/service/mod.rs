//! Use-case layer consumed by the presentation layer.
//!
//! # Responsibility
//! - Own the task store, its persistence and the UI cursor in one context.
//! - Derive the menu-bar summary label.
//! - Keep UI/FFI callers decoupled from storage details.

pub mod calendar_context;
pub mod clock;
pub mod summary;
