//! Core domain logic for the MenuTodo menu-bar calendar.
//! This crate is the single source of truth for day identity, the month
//! layout and the date-keyed task list.

pub mod calendar;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calendar::grid::{generate_month_grid, GridCell, GridSlot, MonthGrid, DAYS_PER_WEEK};
pub use calendar::labels::{day_heading, month_title, short_date, WEEKDAY_HEADERS};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::day_key::{normalize, normalize_epoch_ms, normalize_local, DayKey};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::task_store::TaskStore;
pub use repo::slot_repo::{
    MemorySlotRepository, RepoError, RepoResult, SlotRepository, SqliteSlotRepository,
};
pub use repo::task_codec::{decode_store, encode_store, DecodeError, PAYLOAD_VERSION};
pub use repo::task_persistence::{TaskPersistence, DEFAULT_SLOT_KEY};
pub use service::calendar_context::CalendarContext;
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::summary::summarize;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
