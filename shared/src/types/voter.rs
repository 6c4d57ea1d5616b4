//! Roster-supplied voter records
//!
//! Records are created when a dataset is loaded and never mutated afterwards.
//! Everything a field worker learns about a voter lives in the annotation store.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RecordId;

/// Gender as printed on the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

impl From<Option<String>> for Gender {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Gender::from).unwrap_or_default()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// A single voter from the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    pub id: RecordId,
    pub name: String,
    /// External electoral identifier (the card number printed on the roll)
    pub voter_id: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    /// Opaque locality string, carried through untouched
    #[serde(default)]
    pub assembly_part_sequence: String,
}

impl VoterRecord {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, voter_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            voter_id: voter_id.into(),
            mobile: None,
            gender: Gender::Unspecified,
            assembly_part_sequence: String::new(),
        }
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_part_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.assembly_part_sequence = sequence.into();
        self
    }

    /// Roster mobile, if present and not blank
    pub fn roster_mobile(&self) -> Option<&str> {
        self.mobile.as_deref().filter(|m| !m.trim().is_empty())
    }
}
