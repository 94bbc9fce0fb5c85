//! Menu-bar summary label.

use crate::calendar::labels::short_date;
use crate::model::day_key::normalize_local;
use crate::model::task_store::TaskStore;
use chrono::NaiveDateTime;

/// Formats `"<Mon D> (<count>)"` where `count` is the number of tasks on `now`'s day.
pub fn summarize(store: &TaskStore, now: NaiveDateTime) -> String {
    let count = store.query(normalize_local(now)).len();
    format!("{} ({count})", short_date(now.date()))
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::model::day_key::DayKey;
    use crate::model::task_store::TaskStore;
    use chrono::NaiveDate;

    #[test]
    fn counts_only_todays_tasks() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let now = today.and_hms_opt(18, 30, 0).unwrap();
        let mut store = TaskStore::new();
        assert_eq!(summarize(&store, now), "Jan 5 (0)");

        store.add(DayKey::from_date(today), "a").unwrap();
        store.add(DayKey::from_date(today), "b").unwrap();
        store
            .add(DayKey::from_date(today.succ_opt().unwrap()), "tomorrow")
            .unwrap();
        assert_eq!(summarize(&store, now), "Jan 5 (2)");
    }
}
