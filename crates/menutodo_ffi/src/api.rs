//! FFI use-case API for the menu-bar popover.
//!
//! # Responsibility
//! - Expose the calendar context to Dart via FRB as one opaque session.
//! - Translate day identity to plain integers at the boundary.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Days cross the boundary as `DayKey` day counts (`i32`, days since
//!   1970-01-01 in the host calendar); instants cross as epoch milliseconds.

use log::{error, info};
use menutodo_core::db::open_db;
use menutodo_core::{
    core_version as core_version_inner, generate_month_grid as generate_month_grid_inner,
    default_log_level, init_logging as init_logging_inner, normalize_epoch_ms, CalendarContext,
    Clock, DayKey, GridCell, SqliteSlotRepository, SystemClock, Task, TaskPersistence,
    WEEKDAY_HEADERS,
};
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

type SessionClock = Box<dyn Clock + Send>;
type SessionContext = CalendarContext<SqliteSlotRepository, SessionClock>;

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); blank
///   selects the build-mode default (`debug` or `info`).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = match level.trim() {
        "" => default_log_level().as_str(),
        explicit => explicit,
    };
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Normalizes an instant to its local day key.
///
/// Returns `None` for instants outside the representable calendar range.
#[flutter_rust_bridge::frb(sync)]
pub fn normalize_day(epoch_ms: i64) -> Option<i32> {
    normalize_epoch_ms(epoch_ms).map(DayKey::days_since_epoch)
}

/// Sunday-first slots for the month containing `day_key`; `None` marks padding.
///
/// Returns an empty list when `day_key` is out of range.
#[flutter_rust_bridge::frb(sync)]
pub fn generate_month_grid(day_key: i32) -> Vec<Option<i32>> {
    match DayKey::from_days_since_epoch(day_key) {
        Some(anchor) => generate_month_grid_inner(anchor.date())
            .slots()
            .iter()
            .map(|slot| slot.day().map(DayKey::days_since_epoch))
            .collect(),
        None => Vec::new(),
    }
}

/// Task row shown in the popover list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub task_id: String,
    pub title: String,
}

/// One grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// `None` for leading/trailing padding.
    pub day_key: Option<i32>,
    /// Day-of-month label, `None` for padding.
    pub day_of_month: Option<u32>,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_tasks: bool,
}

/// Everything the popover needs to draw its calendar half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// e.g. `October 2026`.
    pub title: String,
    pub weekday_headers: Vec<String>,
    /// Row-major, length is a multiple of 7.
    pub cells: Vec<DayCell>,
    pub selected_day_key: i32,
    /// e.g. `Oct 19, 2026`.
    pub selected_heading: String,
}

/// Result envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the store changed.
    pub ok: bool,
    /// Created task ID on add.
    pub task_id: Option<String>,
    /// Menu-bar label after the operation.
    pub summary_label: String,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

/// Open calendar session backed by one SQLite file.
#[flutter_rust_bridge::frb(opaque)]
pub struct MenuTodoSession {
    context: Mutex<SessionContext>,
}

/// Opens (or creates) the task database at `db_path` and loads persisted tasks.
///
/// # FFI contract
/// - Sync call; performs small file-system work.
/// - Returns an error message when the database cannot be opened or migrated.
///   Corrupt task payloads are not an error; they load as an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn open_session(db_path: String) -> Result<MenuTodoSession, String> {
    open_session_with_clock(db_path, Box::new(SystemClock))
}

fn open_session_with_clock(
    db_path: String,
    clock: SessionClock,
) -> Result<MenuTodoSession, String> {
    let trimmed = db_path.trim();
    if trimmed.is_empty() {
        return Err("db_path cannot be empty".to_string());
    }
    let conn = open_db(trimmed).map_err(|err| {
        error!("event=session_open module=ffi status=error error={err}");
        format!("open_session failed: {err}")
    })?;
    info!("event=session_open module=ffi status=ok");
    let persistence = TaskPersistence::new(SqliteSlotRepository::new(conn));
    Ok(MenuTodoSession {
        context: Mutex::new(CalendarContext::open(persistence, clock)),
    })
}

impl MenuTodoSession {
    /// Current menu-bar label, e.g. `Oct 19 (2)`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn summary_label(&self) -> String {
        self.with_context(|context| context.summary_label().to_string())
    }

    /// Recomputes the label against the clock; call when the popover opens.
    #[flutter_rust_bridge::frb(sync)]
    pub fn refresh_summary(&self) -> String {
        self.with_context(|context| context.refresh_summary().to_string())
    }

    /// Moves the cursor to `day_key`. Returns `false` for out-of-range keys.
    #[flutter_rust_bridge::frb(sync)]
    pub fn select_day(&self, day_key: i32) -> bool {
        match DayKey::from_days_since_epoch(day_key) {
            Some(day) => {
                self.with_context(|context| context.select_day(day));
                true
            }
            None => false,
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn jump_to_today(&self) {
        self.with_context(|context| context.jump_to_today());
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn month_view(&self) -> MonthView {
        self.with_context(|context| MonthView {
            title: context.month_title(),
            weekday_headers: WEEKDAY_HEADERS.iter().map(|day| day.to_string()).collect(),
            cells: context.grid_cells().iter().map(to_day_cell).collect(),
            selected_day_key: context.selected_day().days_since_epoch(),
            selected_heading: context.selected_day_heading(),
        })
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn tasks_for_selected(&self) -> Vec<TaskItem> {
        self.with_context(|context| context.tasks_for_selected().iter().map(to_task_item).collect())
    }

    /// Tasks of `day_key`; empty for unknown or out-of-range days.
    #[flutter_rust_bridge::frb(sync)]
    pub fn tasks_for_day(&self, day_key: i32) -> Vec<TaskItem> {
        let Some(day) = DayKey::from_days_since_epoch(day_key) else {
            return Vec::new();
        };
        self.with_context(|context| context.tasks_for(day).iter().map(to_task_item).collect())
    }

    /// Adds a task to the selected day. Blank titles are rejected with `ok=false`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(&self, title: String) -> TaskActionResponse {
        self.with_context(|context| match context.add_task(&title) {
            Some(task) => TaskActionResponse {
                ok: true,
                task_id: Some(task.id().to_string()),
                summary_label: context.summary_label().to_string(),
                message: "Task added.".to_string(),
            },
            None => TaskActionResponse {
                ok: false,
                task_id: None,
                summary_label: context.summary_label().to_string(),
                message: "Task title is empty.".to_string(),
            },
        })
    }

    /// Deletes `task_id` from `day_key`. Unknown ids are a no-op with `ok=false`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_task(&self, task_id: String, day_key: i32) -> TaskActionResponse {
        let parsed = Uuid::parse_str(task_id.trim()).ok();
        let day = DayKey::from_days_since_epoch(day_key);
        self.with_context(|context| {
            let removed = match (parsed, day) {
                (Some(id), Some(day)) => context.delete_task(id, day),
                _ => false,
            };
            TaskActionResponse {
                ok: removed,
                task_id: None,
                summary_label: context.summary_label().to_string(),
                message: if removed {
                    "Task deleted.".to_string()
                } else {
                    "No matching task.".to_string()
                },
            }
        })
    }

    fn with_context<T>(&self, f: impl FnOnce(&mut SessionContext) -> T) -> T {
        let mut guard = self
            .context
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        task_id: task.id().to_string(),
        title: task.title().to_string(),
    }
}

fn to_day_cell(cell: &GridCell) -> DayCell {
    DayCell {
        day_key: cell.slot.day().map(DayKey::days_since_epoch),
        day_of_month: cell.day_of_month(),
        is_today: cell.is_today,
        is_selected: cell.is_selected,
        has_tasks: cell.has_tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, generate_month_grid, init_logging, normalize_day, open_session,
        open_session_with_clock, MenuTodoSession,
    };
    use chrono::NaiveDate;
    use menutodo_core::{default_log_level, logging_status, FixedClock};

    /// 2024-01-05 is day 19_727.
    const JAN_5_KEY: i32 = 19_727;

    fn session_in(dir: &tempfile::TempDir) -> MenuTodoSession {
        let path = dir.path().join("menutodo.sqlite3");
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap(),
        );
        open_session_with_clock(path.to_string_lossy().into_owned(), Box::new(clock))
            .expect("session should open")
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn init_logging_falls_back_to_default_level_when_blank() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().to_string_lossy().into_owned();

        assert_eq!(init_logging("  ".to_string(), log_dir.clone()), "");
        let (level, active_dir) = logging_status().expect("logging should be active");
        assert_eq!(level, default_log_level());
        assert_eq!(active_dir, dir.path());
        assert_eq!(
            init_logging(default_log_level().as_str().to_string(), log_dir),
            ""
        );
    }

    #[test]
    fn system_clock_session_opens_on_real_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menutodo.sqlite3");
        let session = open_session(path.to_string_lossy().into_owned()).unwrap();
        assert!(session.tasks_for_selected().is_empty());
    }

    #[test]
    fn open_session_rejects_empty_path() {
        assert!(open_session("  ".to_string()).is_err());
    }

    #[test]
    fn month_grid_uses_day_keys_and_padding() {
        // 2024-05-01 (a Wednesday) is day 19_844.
        let slots = generate_month_grid(19_844);
        assert_eq!(slots.len(), 35);
        assert_eq!(&slots[..3], &[None, None, None]);
        assert_eq!(slots[3], Some(19_844));
        assert_eq!(slots[33], Some(19_874));
        assert_eq!(slots[34], None);
        assert!(generate_month_grid(i32::MAX).is_empty());
    }

    #[test]
    fn normalize_day_is_stable_within_a_day() {
        let noon_utc = 1_704_456_000_000; // 2024-01-05T12:00:00Z
        let key = normalize_day(noon_utc).unwrap();
        // Any local offset keeps noon UTC within one day of 2024-01-05.
        assert!((19_726..=19_728).contains(&key));
        assert_eq!(normalize_day(noon_utc + 1), Some(key));
    }

    #[test]
    fn add_select_and_delete_round_trip_through_session() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(&dir);

        let blank = session.add_task("   ".to_string());
        assert!(!blank.ok);

        let added = session.add_task(" Buy milk ".to_string());
        assert!(added.ok, "{}", added.message);
        assert_eq!(added.summary_label, "Jan 5 (1)");
        let task_id = added.task_id.expect("add should return task_id");

        let view = session.month_view();
        assert_eq!(view.title, "January 2024");
        assert_eq!(view.selected_heading, "Jan 5, 2024");
        assert_eq!(view.selected_day_key, JAN_5_KEY);
        assert_eq!(view.cells.len() % 7, 0);
        assert_eq!(view.weekday_headers[0], "Sun");
        let selected = view
            .cells
            .iter()
            .find(|cell| cell.is_selected)
            .expect("selected day is in the grid");
        assert!(selected.is_today && selected.has_tasks);
        assert_eq!(selected.day_of_month, Some(5));

        let tasks = session.tasks_for_selected();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(session.tasks_for_day(view.selected_day_key), tasks);

        let missing = session.delete_task("not-a-uuid".to_string(), view.selected_day_key);
        assert!(!missing.ok);

        let deleted = session.delete_task(task_id, view.selected_day_key);
        assert!(deleted.ok, "{}", deleted.message);
        assert_eq!(deleted.summary_label, "Jan 5 (0)");
        assert!(session.tasks_for_selected().is_empty());
    }

    #[test]
    fn tasks_persist_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        // 2024-01-20 is fifteen days after the fixed "today".
        let later_key = JAN_5_KEY + 15;
        {
            let session = session_in(&dir);
            assert!(session.select_day(later_key));
            let added = session.add_task("later".to_string());
            assert!(added.ok);
            assert_eq!(added.summary_label, "Jan 5 (0)");
        }

        let reopened = session_in(&dir);
        assert_eq!(reopened.month_view().selected_day_key, JAN_5_KEY);
        let tasks = reopened.tasks_for_day(later_key);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "later");
        assert!(!reopened.select_day(i32::MAX));
    }
}
