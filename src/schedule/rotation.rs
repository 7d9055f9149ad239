//! Route rotation lookup.
//!
//! A rotation cycle repeats from the rotation epoch. Each day maps to a route
//! slot (or none), and the slot maps to a user-supplied route label.

use chrono::NaiveDate;

use crate::models::{CycleAnchors, LabelPolicy, RotationCycle, RouteSet};

use super::dates::{days_between, is_sunday};

/// The rotation slot assigned to `date`, `None` on Sundays and on unassigned
/// cycle days.
///
/// # Example
///
/// ```
/// use mcore_engine::models::{CycleAnchors, RotationCycle};
/// use mcore_engine::schedule::rotation_slot;
/// use chrono::NaiveDate;
///
/// let anchors = CycleAnchors::default();
/// let cycle = RotationCycle::t6();
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert_eq!(rotation_slot(monday, &cycle, &anchors), Some(0));
/// ```
pub fn rotation_slot(
    date: NaiveDate,
    cycle: &RotationCycle,
    anchors: &CycleAnchors,
) -> Option<usize> {
    if is_sunday(date) || cycle.is_empty() {
        return None;
    }

    let cycle_len = i64::try_from(cycle.len()).ok()?;
    let day_in_cycle = days_between(anchors.rotation_epoch, date).rem_euclid(cycle_len);
    cycle.slot_at(usize::try_from(day_in_cycle).ok()?)
}

/// The route label for `date`, or `None` when the day has no slot or the
/// label is not available under `policy`.
pub fn label_for_date(
    date: NaiveDate,
    cycle: &RotationCycle,
    routes: &RouteSet,
    policy: LabelPolicy,
    anchors: &CycleAnchors,
) -> Option<String> {
    let slot = rotation_slot(date, cycle, anchors)?;
    slot_label(routes, slot, policy)
}

/// Applies the label policy to a resolved slot.
pub(crate) fn slot_label(routes: &RouteSet, slot: usize, policy: LabelPolicy) -> Option<String> {
    if policy == LabelPolicy::RequireAll && !routes.is_complete() {
        return None;
    }
    routes.label(slot).map(str::to_string)
}
