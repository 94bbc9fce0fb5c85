//! Month grid generation.
//!
//! # Invariants
//! - `slots().len()` is a multiple of 7.
//! - Exactly `days_in_month()` slots are non-empty and they are contiguous,
//!   starting at `first_weekday_offset()`.

use crate::model::day_key::DayKey;
use chrono::{Datelike, Months, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

/// One position of the 7×N month layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSlot {
    /// Leading or trailing padding.
    Empty,
    Day(DayKey),
}

impl GridSlot {
    pub fn day(self) -> Option<DayKey> {
        match self {
            Self::Empty => None,
            Self::Day(day) => Some(day),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Grid slot annotated for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub slot: GridSlot,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_tasks: bool,
}

impl GridCell {
    /// Day-of-month number, `None` for padding.
    pub fn day_of_month(&self) -> Option<u32> {
        self.slot.day().map(|day| day.date().day())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first_day: NaiveDate,
    first_weekday_offset: usize,
    days_in_month: usize,
    slots: Vec<GridSlot>,
}

impl MonthGrid {
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Column of the 1st of the month (Sunday = 0).
    pub fn first_weekday_offset(&self) -> usize {
        self.first_weekday_offset
    }

    pub fn days_in_month(&self) -> usize {
        self.days_in_month
    }

    pub fn slots(&self) -> &[GridSlot] {
        &self.slots
    }

    /// Week rows of exactly 7 slots each.
    pub fn rows(&self) -> impl Iterator<Item = &[GridSlot]> + '_ {
        self.slots.chunks(DAYS_PER_WEEK)
    }

    /// Annotates every slot with today/selected markers and task presence.
    pub fn cells(
        &self,
        today: DayKey,
        selected: DayKey,
        has_tasks: impl Fn(DayKey) -> bool,
    ) -> Vec<GridCell> {
        self.slots
            .iter()
            .map(|slot| match slot.day() {
                Some(day) => GridCell {
                    slot: *slot,
                    is_today: day == today,
                    is_selected: day == selected,
                    has_tasks: has_tasks(day),
                },
                None => GridCell {
                    slot: *slot,
                    is_today: false,
                    is_selected: false,
                    has_tasks: false,
                },
            })
            .collect()
    }
}

/// Lays out the month containing `anchor`, Sunday-first and padded to whole weeks.
pub fn generate_month_grid(anchor: NaiveDate) -> MonthGrid {
    let first_day = first_day_of_month(anchor);
    let days_in_month = days_in_month(first_day);
    let first_weekday_offset = first_day.weekday().num_days_from_sunday() as usize;

    let total_slots = first_weekday_offset + days_in_month;
    let padded_slots = total_slots.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

    let mut slots = Vec::with_capacity(padded_slots);
    slots.resize(first_weekday_offset, GridSlot::Empty);
    slots.extend(
        first_day
            .iter_days()
            .take(days_in_month)
            .map(|date| GridSlot::Day(DayKey::from_date(date))),
    );
    slots.resize(padded_slots, GridSlot::Empty);

    MonthGrid {
        first_day,
        first_weekday_offset,
        days_in_month,
        slots,
    }
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first_day: NaiveDate) -> usize {
    match first_day.checked_add_months(Months::new(1)) {
        Some(next) => (next - first_day).num_days() as usize,
        // Only December of the last representable year overflows.
        None => 31,
    }
}
