//! Canonical day identity.
//!
//! # Responsibility
//! - Collapse any timestamp to the local calendar day it falls on.
//! - Provide a cheap, totally ordered map key for that day.
//!
//! # Invariants
//! - Two timestamps on the same local calendar date produce equal keys.
//! - Key order matches chronological order.
//! - Every `DayKey` maps back to exactly one representable `NaiveDate`.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::{Display, Formatter};

/// `NaiveDate::num_days_from_ce()` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// A calendar day, stored as the number of days since 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(i32);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
    }

    /// Rebuilds a key from its raw day count.
    ///
    /// Returns `None` when the count is outside the range chrono can represent.
    pub fn from_days_since_epoch(days: i32) -> Option<Self> {
        let days_from_ce = days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?;
        NaiveDate::from_num_days_from_ce_opt(days_from_ce).map(Self::from_date)
    }

    pub fn days_since_epoch(self) -> i32 {
        self.0
    }

    /// Calendar date this key stands for.
    pub fn date(self) -> NaiveDate {
        // Constructors only admit representable dates, so the fallback is dead.
        NaiveDate::from_num_days_from_ce_opt(self.0 + UNIX_EPOCH_DAYS_FROM_CE)
            .unwrap_or(NaiveDate::MIN)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(value: NaiveDate) -> Self {
        Self::from_date(value)
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date().format("%Y-%m-%d"))
    }
}

/// Normalizes a zoned timestamp to the calendar day in its own zone.
///
/// Pass a `DateTime<Local>` to get host-calendar semantics.
pub fn normalize<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> DayKey {
    DayKey::from_date(timestamp.date_naive())
}

/// Normalizes a local wall-clock timestamp.
pub fn normalize_local(timestamp: NaiveDateTime) -> DayKey {
    DayKey::from_date(timestamp.date())
}

/// Normalizes Unix epoch milliseconds in the host's local timezone.
///
/// Returns `None` for instants chrono cannot represent. An epoch instant maps
/// to exactly one local time, so `earliest()` never has to pick between two.
pub fn normalize_epoch_ms(epoch_ms: i64) -> Option<DayKey> {
    Local
        .timestamp_millis_opt(epoch_ms)
        .earliest()
        .map(|timestamp| normalize(&timestamp))
}
