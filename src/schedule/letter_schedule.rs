//! Letter schedule.
//!
//! The letter schedule is the six-slot variant of route rotation: each working
//! day is labelled with the slot of the carrier colour whose rotating day off
//! it is, so slot `n` belongs to the colour with base offset `n`.

use chrono::{Datelike, NaiveDate};

use crate::models::{Carrier, CarrierTable, CycleAnchors, LabelPolicy, ROTATION_DAYS, RouteSet};

use super::dates::is_sunday;
use super::rotation::slot_label;
use super::work_week::work_week_number;

/// The letter slot for `date`: the base offset of the carrier off that day.
/// `None` on Sundays.
///
/// # Example
///
/// ```
/// use mcore_engine::models::CycleAnchors;
/// use mcore_engine::schedule::letter_slot;
/// use chrono::NaiveDate;
///
/// let anchors = CycleAnchors::default();
/// // Week 1: black (offset 0) is off Monday, red (offset 5) Saturday.
/// assert_eq!(letter_slot(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(), &anchors), Some(0));
/// assert_eq!(letter_slot(NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(), &anchors), Some(5));
/// ```
pub fn letter_slot(date: NaiveDate, anchors: &CycleAnchors) -> Option<usize> {
    if is_sunday(date) {
        return None;
    }

    let weekday_index = i64::from(date.weekday().num_days_from_monday());
    let week = work_week_number(date, anchors);
    let base = (weekday_index - (week - 1)).rem_euclid(ROTATION_DAYS.into());
    usize::try_from(base).ok()
}

/// The carrier whose letter slot `date` falls in, `None` on Sundays.
pub fn letter_carrier<'a>(
    date: NaiveDate,
    carriers: &'a CarrierTable,
    anchors: &CycleAnchors,
) -> Option<&'a Carrier> {
    let slot = u8::try_from(letter_slot(date, anchors)?).ok()?;
    carriers.by_base_index(slot)
}

/// The letter route label for `date` under `policy`.
pub fn letter_label_for_date(
    date: NaiveDate,
    routes: &RouteSet,
    policy: LabelPolicy,
    anchors: &CycleAnchors,
) -> Option<String> {
    let slot = letter_slot(date, anchors)?;
    slot_label(routes, slot, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RotationCycle, T6_ROUTE_COUNT};
    use crate::schedule::carrier_day_off::carriers_off;
    use crate::schedule::rotation::rotation_slot;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sunday_has_no_letter() {
        let anchors = CycleAnchors::default();
        assert_eq!(letter_slot(date(2025, 1, 5), &anchors), None);
    }

    #[test]
    fn test_letter_slot_follows_carrier_off() {
        let anchors = CycleAnchors::default();
        let table = CarrierTable::standard();
        let mut day = date(2024, 1, 1);
        while day < date(2026, 1, 1) {
            if !is_sunday(day) {
                let off = carriers_off(day, &table, &anchors);
                assert_eq!(
                    letter_slot(day, &anchors),
                    Some(usize::from(off[0].base_day_off_index)),
                    "{}",
                    day
                );
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_t6_table_matches_carrier_rotation() {
        // With the rotation epoch on the work week epoch, the T6 carrier covers
        // the first five colours and is itself off when the sixth is.
        let anchors = CycleAnchors::default();
        let cycle = RotationCycle::t6();
        let mut day = date(2024, 10, 1);
        while day < date(2025, 10, 1) {
            let expected = letter_slot(day, &anchors).filter(|slot| *slot < T6_ROUTE_COUNT);
            assert_eq!(rotation_slot(day, &cycle, &anchors), expected, "{}", day);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_letter_labels() {
        let anchors = CycleAnchors::default();
        let labels: Vec<String> = ["A", "B", "C", "", "E", "F"]
            .iter()
            .map(|l| l.to_string())
            .collect();
        let routes = RouteSet::new(labels, 6).unwrap();

        assert_eq!(
            letter_label_for_date(date(2025, 1, 4), &routes, LabelPolicy::PerSlot, &anchors),
            Some("F".to_string())
        );
        // Thursday of week 1 is green (offset 3), which is blank.
        assert_eq!(
            letter_label_for_date(date(2025, 1, 9), &routes, LabelPolicy::PerSlot, &anchors),
            None
        );
        assert_eq!(
            letter_label_for_date(date(2025, 1, 4), &routes, LabelPolicy::RequireAll, &anchors),
            None
        );
    }

    #[test]
    fn test_letter_carrier_is_the_carrier_off() {
        let anchors = CycleAnchors::default();
        let table = CarrierTable::standard();

        // Week 1: black is off Monday, red Saturday.
        assert_eq!(letter_carrier(date(2025, 1, 6), &table, &anchors).map(|c| c.id.as_str()), Some("black"));
        assert_eq!(letter_carrier(date(2025, 1, 4), &table, &anchors).map(|c| c.id.as_str()), Some("red"));
        assert!(letter_carrier(date(2025, 1, 5), &table, &anchors).is_none());

        for day in date(2025, 3, 1).iter_days().take(42).filter(|d| !is_sunday(*d)) {
            let off = carriers_off(day, &table, &anchors);
            assert_eq!(letter_carrier(day, &table, &anchors), Some(off[0]), "{}", day);
        }
    }
}
