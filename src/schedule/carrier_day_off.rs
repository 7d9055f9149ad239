//! Carrier rotating day off.
//!
//! Every carrier is off on Sunday. Each colour is also off one Monday..Saturday
//! per work week; that day advances by one weekday each week, giving a
//! six-week cycle.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{Carrier, CarrierTable, CycleAnchors, ROTATION_DAYS};

use super::dates::is_sunday;
use super::work_week::work_week_number;

/// The rotation weekdays in Monday-first order.
const ROTATION_WEEKDAYS: [Weekday; ROTATION_DAYS as usize] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// The Monday-first rotation index (0 = Monday .. 5 = Saturday) a carrier
/// is off during work week `week`.
pub fn rotating_day_off_index(carrier: &Carrier, week: i64) -> usize {
    let index = (i64::from(carrier.base_day_off_index) + week - 1).rem_euclid(ROTATION_DAYS.into());
    // rem_euclid keeps the value in 0..6.
    index as usize
}

/// The weekday a carrier is off during work week `week`, besides Sunday.
///
/// # Example
///
/// ```
/// use mcore_engine::models::CarrierTable;
/// use mcore_engine::schedule::rotating_day_off;
/// use chrono::Weekday;
///
/// let table = CarrierTable::standard();
/// let black = table.get("black").unwrap();
/// assert_eq!(rotating_day_off(black, 1), Weekday::Mon);
/// assert_eq!(rotating_day_off(black, 2), Weekday::Tue);
/// assert_eq!(rotating_day_off(black, 7), Weekday::Mon);
/// ```
pub fn rotating_day_off(carrier: &Carrier, week: i64) -> Weekday {
    ROTATION_WEEKDAYS[rotating_day_off_index(carrier, week)]
}

/// Returns true if `date` is a day off for `carrier`.
///
/// Sunday is a day off for everyone, including when no carrier is
/// selected. With no carrier (`None`), other days are never days off.
///
/// # Example
///
/// ```
/// use mcore_engine::models::{CarrierTable, CycleAnchors};
/// use mcore_engine::schedule::is_carrier_day_off;
/// use chrono::NaiveDate;
///
/// let anchors = CycleAnchors::default();
/// let table = CarrierTable::standard();
///
/// // Monday January 6, 2025 is in work week 1, when black is off on Monday.
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert!(is_carrier_day_off(monday, table.get("black"), &anchors));
/// assert!(!is_carrier_day_off(monday, table.get("yellow"), &anchors));
/// assert!(!is_carrier_day_off(monday, table.get("unknown"), &anchors));
/// ```
pub fn is_carrier_day_off(
    date: NaiveDate,
    carrier: Option<&Carrier>,
    anchors: &CycleAnchors,
) -> bool {
    if is_sunday(date) {
        return true;
    }

    match carrier {
        Some(carrier) => {
            let week = work_week_number(date, anchors);
            date.weekday() == rotating_day_off(carrier, week)
        }
        None => false,
    }
}

/// Looks up `carrier_id` in the table and checks its day off.
///
/// Unknown identifiers behave like "no carrier selected".
pub fn is_carrier_id_day_off(
    date: NaiveDate,
    carrier_id: &str,
    carriers: &CarrierTable,
    anchors: &CycleAnchors,
) -> bool {
    is_carrier_day_off(date, carriers.get(carrier_id), anchors)
}

/// Every carrier off on `date`, in table order: all of them on Sunday and
/// exactly one on any other day.
pub fn carriers_off<'a>(
    date: NaiveDate,
    carriers: &'a CarrierTable,
    anchors: &CycleAnchors,
) -> Vec<&'a Carrier> {
    carriers
        .carriers()
        .iter()
        .filter(|carrier| is_carrier_day_off(date, Some(*carrier), anchors))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sunday_is_off_for_everyone() {
        let anchors = CycleAnchors::default();
        let table = CarrierTable::standard();
        let sunday = date(2025, 1, 5);

        assert!(is_carrier_day_off(sunday, None, &anchors));
        for carrier in table.carriers() {
            assert!(is_carrier_day_off(sunday, Some(carrier), &anchors));
        }
        assert_eq!(carriers_off(sunday, &table, &anchors).len(), 6);
    }

    #[test]
    fn test_no_carrier_never_off_on_weekdays() {
        let anchors = CycleAnchors::default();
        let mut day = date(2025, 1, 6);
        for _ in 0..6 {
            assert!(!is_carrier_day_off(day, None, &anchors));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_week_one_matches_base_offsets() {
        let anchors = CycleAnchors::default();
        let table = CarrierTable::standard();
        // Week 1: Saturday January 4 .. Friday January 10, 2025.
        let expectations = [
            (date(2025, 1, 4), "red"),
            (date(2025, 1, 6), "black"),
            (date(2025, 1, 7), "yellow"),
            (date(2025, 1, 8), "blue"),
            (date(2025, 1, 9), "green"),
            (date(2025, 1, 10), "brown"),
        ];
        for (day, expected) in expectations {
            let off: Vec<&str> = carriers_off(day, &table, &anchors)
                .iter()
                .map(|c| c.id.as_str())
                .collect();
            assert_eq!(off, vec![expected], "{}", day);
        }
    }

    #[test]
    fn test_week_two_advances_one_day() {
        let anchors = CycleAnchors::default();
        let table = CarrierTable::standard();
        // Black was off Monday in week 1 and is off Tuesday January 14 in week 2.
        assert!(is_carrier_id_day_off(date(2025, 1, 14), "black", &table, &anchors));
        assert!(!is_carrier_id_day_off(date(2025, 1, 13), "black", &table, &anchors));
        // Red wraps from Saturday to Monday.
        assert!(is_carrier_id_day_off(date(2025, 1, 13), "red", &table, &anchors));
    }

    #[test]
    fn test_six_week_cycle_repeats() {
        let anchors = CycleAnchors::default();
        let table = CarrierTable::standard();
        let mut day = date(2025, 1, 4);
        for _ in 0..84 {
            let later = day + Days::new(42);
            for carrier in table.carriers() {
                assert_eq!(
                    is_carrier_day_off(day, Some(carrier), &anchors),
                    is_carrier_day_off(later, Some(carrier), &anchors)
                );
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_rotation_before_epoch_is_continuous() {
        let anchors = CycleAnchors::default();
        let table = CarrierTable::standard();
        // Week 0 (December 28, 2024 .. January 3, 2025): black is off Saturday.
        assert!(is_carrier_id_day_off(date(2024, 12, 28), "black", &table, &anchors));
        // Red is off Friday January 3.
        assert!(is_carrier_id_day_off(date(2025, 1, 3), "red", &table, &anchors));
    }

    #[test]
    fn test_exactly_one_carrier_off_each_weekday() {
        let anchors = CycleAnchors::default();
        let table = CarrierTable::standard();
        let mut day = date(2024, 6, 1);
        while day < date(2026, 6, 1) {
            let expected = if is_sunday(day) { 6 } else { 1 };
            assert_eq!(carriers_off(day, &table, &anchors).len(), expected, "{}", day);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_unknown_carrier_id_is_not_off() {
        let anchors = CycleAnchors::default();
        let table = CarrierTable::standard();
        assert!(!is_carrier_id_day_off(date(2025, 1, 6), "purple", &table, &anchors));
        assert!(is_carrier_id_day_off(date(2025, 1, 5), "purple", &table, &anchors));
    }

    #[test]
    fn test_rotating_index_wraps() {
        let red = Carrier::new("red", "Red", 5);
        assert_eq!(rotating_day_off_index(&red, 1), 5);
        assert_eq!(rotating_day_off_index(&red, 2), 0);
        assert_eq!(rotating_day_off_index(&red, 0), 4);
        assert_eq!(rotating_day_off_index(&red, -5), 5);
    }
}
