//! Carrier colours and the carrier table.
//!
//! Each of the six carrier colours holds a base offset into the six-day
//! Monday..Saturday rotation. The table is static configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of weekdays the day off rotates through (Monday..Saturday).
pub const ROTATION_DAYS: u8 = 6;

/// Identifier callers use to ask for "every carrier" rather than one colour.
pub const ALL_CARRIERS_ID: &str = "all";

/// A carrier colour with its rotation offset.
///
/// # Example
///
/// ```
/// use mcore_engine::models::Carrier;
///
/// let blue = Carrier::new("blue", "Blue", 2);
/// assert_eq!(blue.base_day_off_index, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrier {
    /// Stable identifier (e.g. "black").
    pub id: String,
    /// Display name (e.g. "Black").
    pub name: String,
    /// Offset into the Monday-first rotation during work week 1 (0..=5).
    pub base_day_off_index: u8,
}

impl Carrier {
    /// Creates a carrier.
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_day_off_index: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_day_off_index,
        }
    }
}

/// The six carriers of the rotation.
///
/// Construction validates that the table holds exactly six carriers whose
/// base offsets cover 0..=5 once each, so every Monday..Saturday has exactly
/// one carrier off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarrierTable {
    carriers: Vec<Carrier>,
}

impl CarrierTable {
    /// Creates a validated carrier table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCarrierTable`] if the table does not hold
    /// six carriers, an offset is out of range or repeated, or an id is blank,
    /// duplicated, or the reserved "all" identifier.
    pub fn new(carriers: Vec<Carrier>) -> EngineResult<Self> {
        if carriers.len() != usize::from(ROTATION_DAYS) {
            return Err(EngineError::InvalidCarrierTable {
                message: format!(
                    "expected {} carriers, got {}",
                    ROTATION_DAYS,
                    carriers.len()
                ),
            });
        }

        let mut seen_offsets = [false; ROTATION_DAYS as usize];
        for (i, carrier) in carriers.iter().enumerate() {
            let id = carrier.id.trim();
            if id.is_empty() || id.eq_ignore_ascii_case(ALL_CARRIERS_ID) {
                return Err(EngineError::InvalidCarrierTable {
                    message: format!("carrier {} has an invalid id '{}'", i, carrier.id),
                });
            }
            if carriers[..i]
                .iter()
                .any(|other| other.id.trim().eq_ignore_ascii_case(id))
            {
                return Err(EngineError::InvalidCarrierTable {
                    message: format!("duplicate carrier id '{}'", carrier.id),
                });
            }

            let offset = usize::from(carrier.base_day_off_index);
            match seen_offsets.get_mut(offset) {
                Some(seen) if !*seen => *seen = true,
                Some(_) => {
                    return Err(EngineError::InvalidCarrierTable {
                        message: format!(
                            "base day off index {} is used more than once",
                            offset
                        ),
                    });
                }
                None => {
                    return Err(EngineError::InvalidCarrierTable {
                        message: format!(
                            "carrier '{}' has base day off index {}, expected 0..={}",
                            carrier.id,
                            offset,
                            ROTATION_DAYS - 1
                        ),
                    });
                }
            }
        }

        Ok(Self { carriers })
    }

    /// The standard colour table: black, yellow, blue, green, brown, red.
    pub fn standard() -> Self {
        Self {
            carriers: vec![
                Carrier::new("black", "Black", 0),
                Carrier::new("yellow", "Yellow", 1),
                Carrier::new("blue", "Blue", 2),
                Carrier::new("green", "Green", 3),
                Carrier::new("brown", "Brown", 4),
                Carrier::new("red", "Red", 5),
            ],
        }
    }

    /// Looks up a carrier by id, ignoring case and surrounding whitespace.
    ///
    /// Unknown ids and the "all" selector return `None`, which the resolvers
    /// treat as "no rotation selected".
    ///
    /// # Example
    ///
    /// ```
    /// use mcore_engine::models::CarrierTable;
    ///
    /// let table = CarrierTable::standard();
    /// assert_eq!(table.get("Green").map(|c| c.base_day_off_index), Some(3));
    /// assert!(table.get("all").is_none());
    /// assert!(table.get("purple").is_none());
    /// ```
    pub fn get(&self, id: &str) -> Option<&Carrier> {
        let id = id.trim();
        self.carriers
            .iter()
            .find(|carrier| carrier.id.eq_ignore_ascii_case(id))
    }

    /// Returns the carrier whose base offset is `index`.
    pub fn by_base_index(&self, index: u8) -> Option<&Carrier> {
        self.carriers
            .iter()
            .find(|carrier| carrier.base_day_off_index == index)
    }

    /// Returns the carriers in configuration order.
    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }
}

impl Default for CarrierTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let standard = CarrierTable::standard();
        let rebuilt = CarrierTable::new(standard.carriers().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(rebuilt.unwrap(), standard);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let table = CarrierTable::standard();
        assert_eq!(table.get("RED").unwrap().base_day_off_index, 5);
        assert_eq!(table.get(" black ").unwrap().base_day_off_index, 0);
    }

    #[test]
    fn test_get_unknown_and_all_return_none() {
        let table = CarrierTable::standard();
        assert!(table.get("purple").is_none());
        assert!(table.get("all").is_none());
        assert!(table.get("").is_none());
    }

    #[test]
    fn test_by_base_index() {
        let table = CarrierTable::standard();
        assert_eq!(table.by_base_index(4).unwrap().id, "brown");
        assert!(table.by_base_index(6).is_none());
    }

    #[test]
    fn test_wrong_carrier_count_rejected() {
        let mut carriers = CarrierTable::standard().carriers().to_vec();
        carriers.pop();

        match CarrierTable::new(carriers) {
            Err(EngineError::InvalidCarrierTable { message }) => {
                assert!(message.contains("expected 6 carriers, got 5"));
            }
            other => panic!("Expected InvalidCarrierTable error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_offset_rejected() {
        let mut carriers = CarrierTable::standard().carriers().to_vec();
        carriers[5].base_day_off_index = 0;
        assert!(CarrierTable::new(carriers).is_err());
    }

    #[test]
    fn test_out_of_range_offset_rejected() {
        let mut carriers = CarrierTable::standard().carriers().to_vec();
        carriers[5].base_day_off_index = 6;
        assert!(CarrierTable::new(carriers).is_err());
    }

    #[test]
    fn test_reserved_and_duplicate_ids_rejected() {
        let mut carriers = CarrierTable::standard().carriers().to_vec();
        carriers[0].id = "all".to_string();
        assert!(CarrierTable::new(carriers).is_err());

        let mut carriers = CarrierTable::standard().carriers().to_vec();
        carriers[1].id = "Black".to_string();
        assert!(CarrierTable::new(carriers).is_err());
    }

    #[test]
    fn test_deserialize_carrier() {
        let yaml = "id: blue\nname: Blue\nbase_day_off_index: 2\n";
        let carrier: Carrier = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(carrier, Carrier::new("blue", "Blue", 2));
    }
}
