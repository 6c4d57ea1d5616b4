//! Core types used throughout the canvassing workspace

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

pub mod annotation;
pub mod voter;

pub use annotation::{AnnotationField, AnnotationValue, CategoryKind, CustomCategory, StatusColor};
pub use voter::{Gender, VoterRecord};

/// Identifier of a roster dataset (one polling part / booth list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(pub u32);

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatasetId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(DatasetId)
            .map_err(|_| SharedError::InvalidDatasetId { input: s.to_string() })
    }
}

impl From<u32> for DatasetId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Roster-assigned voter identifier, unique within a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RecordId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Identifier of a family unit, monotonic in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyId(pub u64);

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "family_{}", self.0)
    }
}
