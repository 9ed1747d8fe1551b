//! In-memory store of bond definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bond::BondDefinition;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Bond definitions keyed by name.
///
/// Built once at start-up and then shared by reference with the calculator
/// and the command-line front end. Names are unique.
///
/// # Example
///
/// ```rust
/// use bondlab_analytics::repository::BondRepository;
///
/// let json = r#"[{
///     "name": "ZERO26",
///     "day_count": "ACT/365",
///     "periodicity": 1,
///     "schedule": [
///         {"date": "2025-01-01", "coupon_rate": 0},
///         {"date": "2026-01-01", "coupon_rate": 0, "principal": 100}
///     ]
/// }]"#;
///
/// let repo = BondRepository::from_json(json).unwrap();
/// assert_eq!(repo.names(), vec!["ZERO26"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BondDefinition>", into = "Vec<BondDefinition>")]
pub struct BondRepository {
    bonds: BTreeMap<String, BondDefinition>,
}

impl BondRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a repository from a JSON array of bond definitions.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Repository` for malformed JSON, an invalid
    /// definition or a duplicate name.
    pub fn from_json(json: &str) -> AnalyticsResult<Self> {
        let bonds: Vec<BondDefinition> = serde_json::from_str(json)
            .map_err(|e| AnalyticsError::repository(format!("cannot parse bond file: {e}")))?;
        let repo = Self::try_from(bonds)?;
        log::debug!("loaded {} bond definition(s)", repo.len());
        Ok(repo)
    }

    /// Serializes the repository as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Repository` if serialization fails.
    pub fn to_json(&self) -> AnalyticsResult<String> {
        serde_json::to_string_pretty(&self.bonds.values().collect::<Vec<_>>())
            .map_err(|e| AnalyticsError::repository(e.to_string()))
    }

    /// Adds a bond definition.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Repository` if the name is already taken.
    pub fn insert(&mut self, bond: BondDefinition) -> AnalyticsResult<()> {
        if self.bonds.contains_key(bond.name()) {
            return Err(AnalyticsError::repository(format!(
                "duplicate bond name '{}'",
                bond.name()
            )));
        }
        self.bonds.insert(bond.name().to_string(), bond);
        Ok(())
    }

    /// Looks up a bond by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BondDefinition> {
        self.bonds.get(name)
    }

    /// Looks up a bond by name, failing if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Repository` naming the missing bond.
    pub fn require(&self, name: &str) -> AnalyticsResult<&BondDefinition> {
        self.get(name)
            .ok_or_else(|| AnalyticsError::repository(format!("bond '{name}' not found")))
    }

    /// Returns the bond names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.bonds.keys().map(String::as_str).collect()
    }

    /// Iterates over the bonds in name order.
    pub fn iter(&self) -> impl Iterator<Item = &BondDefinition> {
        self.bonds.values()
    }

    /// Returns the number of bonds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    /// Returns true if the repository holds no bonds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
}

impl TryFrom<Vec<BondDefinition>> for BondRepository {
    type Error = AnalyticsError;

    fn try_from(bonds: Vec<BondDefinition>) -> Result<Self, Self::Error> {
        let mut repo = Self::new();
        for bond in bonds {
            repo.insert(bond)?;
        }
        Ok(repo)
    }
}

impl From<BondRepository> for Vec<BondDefinition> {
    fn from(repo: BondRepository) -> Self {
        repo.bonds.into_values().collect()
    }
}
