//! User settings.
//!
//! The small key-value state a front end persists between sessions. The
//! engine only reads the current value.

use serde::{Deserialize, Deserializer, Serialize};

use super::rotation::{LETTER_ROUTE_COUNT, LabelPolicy, RouteSet, T6_ROUTE_COUNT};

/// Settings chosen by the user.
///
/// # Example
///
/// ```
/// use mcore_engine::models::UserSettings;
///
/// let settings: UserSettings = serde_json::from_str(r#"{"selected_carrier":"blue"}"#).unwrap();
/// assert_eq!(settings.selected_carrier.as_deref(), Some("blue"));
/// assert_eq!(settings.t6_routes.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// The carrier colour whose days off are highlighted, if any.
    pub selected_carrier: Option<String>,
    /// Labels for the five T6 routes.
    #[serde(deserialize_with = "deserialize_t6_routes")]
    pub t6_routes: RouteSet,
    /// Labels for the six letter schedule slots, one per carrier colour.
    #[serde(deserialize_with = "deserialize_letter_routes")]
    pub letter_routes: RouteSet,
    /// Whether partially filled route sets produce labels.
    pub label_policy: LabelPolicy,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            selected_carrier: None,
            t6_routes: RouteSet::blank(T6_ROUTE_COUNT),
            letter_routes: RouteSet::blank(LETTER_ROUTE_COUNT),
            label_policy: LabelPolicy::PerSlot,
        }
    }
}

fn deserialize_t6_routes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RouteSet, D::Error> {
    route_set(deserializer, T6_ROUTE_COUNT)
}

fn deserialize_letter_routes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RouteSet, D::Error> {
    route_set(deserializer, LETTER_ROUTE_COUNT)
}

/// Decodes a label list and checks it has one entry per route.
fn route_set<'de, D: Deserializer<'de>>(
    deserializer: D,
    expected: usize,
) -> Result<RouteSet, D::Error> {
    let labels = Vec::<String>::deserialize(deserializer)?;
    RouteSet::new(labels, expected).map_err(serde::de::Error::custom)
}
