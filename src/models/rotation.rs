//! Rotation cycle tables and route label sets.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of routes a T6 carrier relieves.
pub const T6_ROUTE_COUNT: usize = 5;

/// Number of slots in a letter schedule, one per carrier colour.
pub const LETTER_ROUTE_COUNT: usize = 6;

/// Length of the built-in T6 cycle in days.
pub const T6_CYCLE_DAYS: usize = 42;

/// The built-in T6 cycle, day 0 being the Saturday that starts work week 1.
///
/// Each working day the T6 carrier covers the route of the regular carrier
/// whose rotating day off it is. `None` marks Sundays and the T6 carrier's own
/// rotating day off.
const T6_CYCLE: [Option<usize>; T6_CYCLE_DAYS] = [
    // week 1: Sat..Fri
    None, None, Some(0), Some(1), Some(2), Some(3), Some(4),
    // week 2
    Some(4), None, None, Some(0), Some(1), Some(2), Some(3),
    // week 3
    Some(3), None, Some(4), None, Some(0), Some(1), Some(2),
    // week 4
    Some(2), None, Some(3), Some(4), None, Some(0), Some(1),
    // week 5
    Some(1), None, Some(2), Some(3), Some(4), None, Some(0),
    // week 6
    Some(0), None, Some(1), Some(2), Some(3), Some(4), None,
];

/// A repeating table mapping each day of the cycle to a route slot.
///
/// # Example
///
/// ```
/// use mcore_engine::models::RotationCycle;
///
/// let cycle = RotationCycle::t6();
/// assert_eq!(cycle.len(), 42);
/// assert_eq!(cycle.slot_count(), 5);
/// assert_eq!(cycle.slot_at(2), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationCycle {
    slots: Vec<Option<usize>>,
    slot_count: usize,
}

impl RotationCycle {
    /// Creates a cycle, checking that it is non-empty and only refers to
    /// slots below `slot_count`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRotationCycle`] if the table is empty or
    /// an entry refers to a slot that does not exist.
    pub fn new(slots: Vec<Option<usize>>, slot_count: usize) -> EngineResult<Self> {
        if slots.is_empty() {
            return Err(EngineError::InvalidRotationCycle {
                message: "cycle map is empty".to_string(),
            });
        }

        if let Some((day, slot)) = slots
            .iter()
            .enumerate()
            .find_map(|(day, slot)| slot.filter(|s| *s >= slot_count).map(|s| (day, s)))
        {
            return Err(EngineError::InvalidRotationCycle {
                message: format!(
                    "day {} refers to slot {}, but only {} slots exist",
                    day, slot, slot_count
                ),
            });
        }

        Ok(Self { slots, slot_count })
    }

    /// The built-in 42-day T6 cycle over five routes.
    pub fn t6() -> Self {
        Self {
            slots: T6_CYCLE.to_vec(),
            slot_count: T6_ROUTE_COUNT,
        }
    }

    /// The cycle length in days.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a constructed cycle.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The number of route slots the cycle assigns.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// The slot for a day within the cycle, `None` for unassigned days or
    /// days past the end of the table.
    pub fn slot_at(&self, day_in_cycle: usize) -> Option<usize> {
        self.slots.get(day_in_cycle).copied().flatten()
    }
}

impl Default for RotationCycle {
    fn default() -> Self {
        Self::t6()
    }
}

/// Whether a partially filled route set still produces labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// Each filled slot yields its label; blank slots yield nothing.
    #[default]
    PerSlot,
    /// No labels at all until every slot is filled.
    RequireAll,
}

/// User-supplied labels for each slot of a rotation.
///
/// # Example
///
/// ```
/// use mcore_engine::models::RouteSet;
///
/// let routes = RouteSet::new(vec!["C01".into(), "".into(), "C03".into(), "C04".into(), "C05".into()], 5).unwrap();
/// assert_eq!(routes.label(0), Some("C01"));
/// assert_eq!(routes.label(1), None);
/// assert!(!routes.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteSet {
    labels: Vec<String>,
}

impl RouteSet {
    /// Creates a route set that must hold exactly `expected_len` labels.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRouteSet`] on a length mismatch.
    pub fn new(labels: Vec<String>, expected_len: usize) -> EngineResult<Self> {
        if labels.len() != expected_len {
            return Err(EngineError::InvalidRouteSet {
                expected: expected_len,
                actual: labels.len(),
            });
        }
        Ok(Self { labels })
    }

    /// A set of `len` blank labels.
    pub fn blank(len: usize) -> Self {
        Self {
            labels: vec![String::new(); len],
        }
    }

    /// The trimmed label for a slot, `None` if blank or out of range.
    pub fn label(&self, slot: usize) -> Option<&str> {
        self.labels
            .get(slot)
            .map(|label| label.trim())
            .filter(|label| !label.is_empty())
    }

    /// True when every slot has a non-blank label.
    pub fn is_complete(&self) -> bool {
        self.labels.iter().all(|label| !label.trim().is_empty())
    }

    /// The number of slots.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the set has no slots.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The raw labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
