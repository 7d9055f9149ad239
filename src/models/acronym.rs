//! Acronym lookup table.

use serde::{Deserialize, Serialize};

/// An acronym and its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acronym {
    /// The acronym, e.g. "CCA".
    pub acronym: String,
    /// What it stands for.
    pub meaning: String,
}

/// Sort direction for acronym listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// A to Z.
    #[default]
    Ascending,
    /// Z to A.
    Descending,
}

/// The configured acronyms.
///
/// # Example
///
/// ```
/// use mcore_engine::models::{Acronym, AcronymTable, SortOrder};
///
/// let table = AcronymTable::new(vec![
///     Acronym { acronym: "PTF".into(), meaning: "Part-Time Flexible".into() },
///     Acronym { acronym: "CCA".into(), meaning: "City Carrier Assistant".into() },
/// ]);
///
/// let found = table.search("carrier", SortOrder::Ascending);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].acronym, "CCA");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcronymTable {
    entries: Vec<Acronym>,
}

impl AcronymTable {
    /// Creates a table from entries.
    pub fn new(entries: Vec<Acronym>) -> Self {
        Self { entries }
    }

    /// Returns entries whose acronym or meaning contains `term`
    /// (case-insensitive), sorted by acronym. A blank term matches everything.
    pub fn search(&self, term: &str, order: SortOrder) -> Vec<&Acronym> {
        let term = term.trim().to_lowercase();
        let mut found: Vec<&Acronym> = self
            .entries
            .iter()
            .filter(|entry| {
                term.is_empty()
                    || entry.acronym.to_lowercase().contains(&term)
                    || entry.meaning.to_lowercase().contains(&term)
            })
            .collect();

        found.sort_by(|a, b| {
            let ordering = a
                .acronym
                .to_lowercase()
                .cmp(&b.acronym.to_lowercase())
                .then_with(|| a.acronym.cmp(&b.acronym));
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        found
    }

    /// All entries in configuration order.
    pub fn entries(&self) -> &[Acronym] {
        &self.entries
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
