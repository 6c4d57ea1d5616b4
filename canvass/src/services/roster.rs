//! In-memory roster store
//!
//! Datasets are loaded once from a JSON roster file and never change
//! afterwards. Voter order inside a dataset is the order of the file.

use serde::Deserialize;
use shared::{DatasetId, VoterRecord, dataset_debug};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::{CanvassError, CanvassResult};
use crate::traits::RosterStore;

/// On-disk roster layout: `{"datasets": {"101": [voter, ...]}}`
#[derive(Debug, Deserialize)]
struct RosterFile {
    datasets: BTreeMap<String, Vec<VoterRecord>>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    datasets: BTreeMap<DatasetId, Vec<VoterRecord>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style dataset registration
    pub fn with_dataset(mut self, dataset: DatasetId, voters: Vec<VoterRecord>) -> Self {
        self.insert_dataset(dataset, voters);
        self
    }

    /// Register or replace a dataset
    pub fn insert_dataset(&mut self, dataset: DatasetId, voters: Vec<VoterRecord>) {
        dataset_debug!(dataset, "Loaded {} voters", voters.len());
        self.datasets.insert(dataset, voters);
    }

    /// Parse a roster from JSON text
    pub fn from_json_str(json: &str) -> CanvassResult<Self> {
        Self::parse(json).map_err(|reason| CanvassError::RosterLoad {
            path: "<inline>".to_string(),
            reason,
        })
    }

    /// Load a roster from a JSON file
    pub fn from_json_file(path: &Path) -> CanvassResult<Self> {
        let load_error = |reason: String| CanvassError::RosterLoad {
            path: path.display().to_string(),
            reason,
        };
        let json = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        Self::parse(&json).map_err(load_error)
    }

    fn parse(json: &str) -> Result<Self, String> {
        let file: RosterFile = serde_json::from_str(json).map_err(|e| e.to_string())?;

        let mut roster = Self::new();
        for (key, voters) in file.datasets {
            let dataset: DatasetId = key.parse().map_err(|e: shared::SharedError| e.to_string())?;

            let mut seen = HashSet::new();
            if let Some(duplicate) = voters.iter().find(|voter| !seen.insert(voter.id)) {
                return Err(format!("dataset {dataset}: duplicate voter id {}", duplicate.id));
            }

            roster.insert_dataset(dataset, voters);
        }
        Ok(roster)
    }
}

impl RosterStore for InMemoryRoster {
    fn dataset(&self, dataset: DatasetId) -> &[VoterRecord] {
        self.datasets.get(&dataset).map(Vec::as_slice).unwrap_or(&[])
    }

    fn dataset_ids(&self) -> Vec<DatasetId> {
        self.datasets.keys().copied().collect()
    }
}
