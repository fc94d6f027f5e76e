//! Raw CSV rows.

use degrees_core::parse_year;
use serde::{Deserialize, Serialize};

/// A row of `people.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRow {
    pub id: String,
    pub name: String,
    /// Birth year; often blank.
    #[serde(default)]
    pub birth: String,
}

impl PersonRow {
    pub fn birth_year(&self) -> Option<u16> {
        parse_year(&self.birth)
    }
}

/// A row of `movies.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
}

impl GroupRow {
    pub fn release_year(&self) -> Option<u16> {
        parse_year(&self.year)
    }
}

/// A row of `stars.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRow {
    pub person_id: String,
    #[serde(alias = "group_id")]
    pub movie_id: String,
}
