//! Application context behind the calendar popover.
//!
//! # Responsibility
//! - Own the task store, its persistence adapter, the clock and the selected day.
//! - Apply task mutations write-through and keep the summary label current.
//! - Answer every read the presentation layer needs to draw the popover.
//!
//! # Invariants
//! - Every successful mutation is followed by exactly one `save` and one
//!   summary recomputation, before the call returns.
//! - Rejected or no-op mutations leave store, slot and label untouched.
//! - The selected day is UI state only and is never persisted.

use crate::calendar::grid::{generate_month_grid, GridCell, MonthGrid};
use crate::calendar::labels::{day_heading, month_title};
use crate::model::day_key::{normalize_local, DayKey};
use crate::model::task::{Task, TaskId};
use crate::model::task_store::TaskStore;
use crate::repo::slot_repo::SlotRepository;
use crate::repo::task_persistence::TaskPersistence;
use crate::service::clock::Clock;
use crate::service::summary::summarize;
use log::{debug, info};

pub struct CalendarContext<R: SlotRepository, C: Clock> {
    store: TaskStore,
    persistence: TaskPersistence<R>,
    clock: C,
    selected: DayKey,
    summary: String,
}

impl<R: SlotRepository, C: Clock> CalendarContext<R, C> {
    /// Loads persisted tasks, selects today and computes the first summary.
    pub fn open(persistence: TaskPersistence<R>, clock: C) -> Self {
        let store = persistence.load();
        let now = clock.now();
        let summary = summarize(&store, now);
        info!(
            "event=context_open module=service status=ok days={} tasks={}",
            store.day_count(),
            store.task_count()
        );
        Self {
            store,
            persistence,
            clock,
            selected: normalize_local(now),
            summary,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn persistence(&self) -> &TaskPersistence<R> {
        &self.persistence
    }

    pub fn today(&self) -> DayKey {
        normalize_local(self.clock.now())
    }

    pub fn selected_day(&self) -> DayKey {
        self.selected
    }

    pub fn select_day(&mut self, day: DayKey) {
        self.selected = day;
    }

    /// Moves the cursor back to today ("Today" button).
    pub fn jump_to_today(&mut self) {
        self.selected = self.today();
    }

    /// Grid of the selected day's month.
    pub fn month_grid(&self) -> MonthGrid {
        generate_month_grid(self.selected.date())
    }

    /// Grid of the selected month with today, selection and task markers.
    pub fn grid_cells(&self) -> Vec<GridCell> {
        self.month_grid()
            .cells(self.today(), self.selected, |day| self.store.contains_day(day))
    }

    /// e.g. `October 2026`.
    pub fn month_title(&self) -> String {
        month_title(self.selected.date())
    }

    /// e.g. `Oct 19, 2026`.
    pub fn selected_day_heading(&self) -> String {
        day_heading(self.selected.date())
    }

    pub fn tasks_for(&self, day: DayKey) -> &[Task] {
        self.store.query(day)
    }

    pub fn tasks_for_selected(&self) -> &[Task] {
        self.store.query(self.selected)
    }

    /// Adds a task to the selected day.
    pub fn add_task(&mut self, title: &str) -> Option<Task> {
        self.add_task_on(self.selected, title)
    }

    /// Adds a task titled `title` (trimmed) to `day`.
    ///
    /// Returns `None` without touching any state when the title is blank.
    pub fn add_task_on(&mut self, day: DayKey, title: &str) -> Option<Task> {
        match self.store.add(day, title) {
            Ok(task) => {
                debug!("event=task_add module=service status=ok day={day}");
                self.after_mutation();
                Some(task)
            }
            Err(err) => {
                debug!("event=task_add module=service status=rejected day={day} reason={err}");
                None
            }
        }
    }

    /// Deletes task `id` from `day`. Returns whether a task was removed.
    pub fn delete_task(&mut self, id: TaskId, day: DayKey) -> bool {
        if self.store.delete(day, id).is_none() {
            debug!("event=task_delete module=service status=noop day={day}");
            return false;
        }
        debug!("event=task_delete module=service status=ok day={day}");
        self.after_mutation();
        true
    }

    /// Last computed menu-bar label.
    pub fn summary_label(&self) -> &str {
        &self.summary
    }

    /// Recomputes the label against the current time (popover opened).
    pub fn refresh_summary(&mut self) -> &str {
        self.summary = summarize(&self.store, self.clock.now());
        &self.summary
    }

    fn after_mutation(&mut self) {
        self.persistence.save(&self.store);
        self.refresh_summary();
    }
}
