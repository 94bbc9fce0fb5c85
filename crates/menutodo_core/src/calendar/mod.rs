//! Month layout and calendar labels.
//!
//! # Responsibility
//! - Build the Sunday-first, 7-column grid for any month.
//! - Format the month title and day headings shown above the grid.
//!
//! # Invariants
//! - Grid generation is pure and depends only on the anchor date.
//! - Sunday is always the first column.

pub mod grid;
pub mod labels;
