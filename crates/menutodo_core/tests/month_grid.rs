use chrono::{Datelike, NaiveDate};
use menutodo_core::{generate_month_grid, normalize, DayKey, GridSlot, WEEKDAY_HEADERS};

#[test]
fn weekday_headers_start_on_sunday() {
    assert_eq!(WEEKDAY_HEADERS[0], "Sun");
    assert_eq!(WEEKDAY_HEADERS[6], "Sat");
}

#[test]
fn any_anchor_in_a_month_yields_the_same_grid() {
    let first = generate_month_grid(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
    let last = generate_month_grid(NaiveDate::from_ymd_opt(2026, 10, 31).unwrap());
    assert_eq!(first, last);
}

#[test]
fn grid_layout_holds_across_two_decades() {
    let mut anchor = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

    while anchor < end {
        let grid = generate_month_grid(anchor);
        let slots = grid.slots();
        let offset = anchor.weekday().num_days_from_sunday() as usize;

        assert_eq!(slots.len() % 7, 0);
        assert_eq!(grid.first_weekday_offset(), offset);
        assert!(slots[..offset].iter().all(|slot| slot.is_empty()));
        assert!(slots[offset + grid.days_in_month()..]
            .iter()
            .all(|slot| slot.is_empty()));
        assert_eq!(slots[offset], GridSlot::Day(DayKey::from_date(anchor)));

        for row in grid.rows() {
            assert_eq!(row.len(), 7);
        }

        anchor = anchor
            .checked_add_months(chrono::Months::new(1))
            .unwrap();
    }
}

#[test]
fn grid_days_agree_with_timestamp_normalization() {
    let zone = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
    let timestamp = chrono::TimeZone::with_ymd_and_hms(&zone, 2026, 10, 19, 23, 59, 0).unwrap();

    let grid = generate_month_grid(timestamp.date_naive());
    assert!(grid
        .slots()
        .iter()
        .any(|slot| slot.day() == Some(normalize(&timestamp))));
}
