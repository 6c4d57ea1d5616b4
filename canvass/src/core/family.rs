//! Family grouping of voters
//!
//! A family unit is an ordered list of references to roster voters. Units
//! never own voter data; members are resolved against the roster on read.
//! A voter may belong to any number of units.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{DatasetId, FamilyId, RecordId, VoterRecord, dataset_debug, dataset_warn};
use std::collections::HashMap;

use crate::error::{CanvassError, CanvassResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyUnit {
    pub id: FamilyId,
    pub dataset: DatasetId,
    pub name: Option<String>,
    /// Member references in selection order, no duplicates
    pub members: Vec<RecordId>,
    pub created_at: DateTime<Utc>,
}

impl FamilyUnit {
    pub fn contains(&self, record: RecordId) -> bool {
        self.members.contains(&record)
    }
}

/// Working list of optional voter slots while a family is being edited
///
/// Slots may be added, emptied and removed freely; the non-empty rule is
/// only checked when the draft is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyDraft {
    name: Option<String>,
    slots: Vec<Option<RecordId>>,
}

impl FamilyDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft with `count` empty slots
    pub fn with_slots(count: usize) -> Self {
        Self {
            name: None,
            slots: vec![None; count],
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn slots(&self) -> &[Option<RecordId>] {
        &self.slots
    }

    /// Append an empty slot and return its index
    pub fn add_slot(&mut self) -> usize {
        self.slots.push(None);
        self.slots.len() - 1
    }

    pub fn remove_slot(&mut self, index: usize) -> bool {
        if index < self.slots.len() {
            self.slots.remove(index);
            true
        } else {
            false
        }
    }

    /// Put a voter in a slot, replacing whatever was selected there
    pub fn select(&mut self, index: usize, voter: &VoterRecord) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(voter.id);
                true
            }
            None => false,
        }
    }

    pub fn clear_slot(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Selected voters, skipping empty slots
    pub fn selected(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// Owner of every family unit, grouped by dataset in creation order
#[derive(Debug)]
pub struct FamilyRegistry {
    families: HashMap<DatasetId, Vec<FamilyUnit>>,
    next_id: u64,
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyRegistry {
    pub fn new() -> Self {
        Self {
            families: HashMap::new(),
            next_id: 1,
        }
    }

    /// Save a family from a list of optional slots.
    ///
    /// Empty slots are dropped and repeated voters keep their first position.
    /// Fails without touching any state when nothing is left.
    pub fn create_family<I>(
        &mut self,
        dataset: DatasetId,
        slots: I,
        name: Option<String>,
        created_at: DateTime<Utc>,
    ) -> CanvassResult<FamilyUnit>
    where
        I: IntoIterator<Item = Option<RecordId>>,
    {
        let mut members: Vec<RecordId> = Vec::new();
        for record in slots.into_iter().flatten() {
            if !members.contains(&record) {
                members.push(record);
            }
        }

        if members.is_empty() {
            dataset_warn!(dataset, "Rejected family with no selected members");
            return Err(CanvassError::validation("a family needs at least one selected voter"));
        }

        let family = FamilyUnit {
            id: FamilyId(self.next_id),
            dataset,
            name: name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            members,
            created_at,
        };
        self.next_id += 1;

        dataset_debug!(dataset, "Created {} with {} members", family.id, family.members.len());
        self.families.entry(dataset).or_default().push(family.clone());
        Ok(family)
    }

    /// Remove a family. Unknown ids are ignored; returns whether anything was removed.
    pub fn delete_family(&mut self, dataset: DatasetId, family: FamilyId) -> bool {
        let Some(families) = self.families.get_mut(&dataset) else {
            return false;
        };
        let before = families.len();
        families.retain(|unit| unit.id != family);
        let removed = families.len() != before;
        if removed {
            dataset_debug!(dataset, "Deleted {}", family);
        }
        removed
    }

    /// Families of a dataset in creation order
    pub fn list_families(&self, dataset: DatasetId) -> &[FamilyUnit] {
        self.families.get(&dataset).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn family(&self, dataset: DatasetId, family: FamilyId) -> Option<&FamilyUnit> {
        self.list_families(dataset).iter().find(|unit| unit.id == family)
    }

    /// Every family a voter belongs to
    pub fn families_of(&self, dataset: DatasetId, record: RecordId) -> Vec<&FamilyUnit> {
        self.list_families(dataset)
            .iter()
            .filter(|unit| unit.contains(record))
            .collect()
    }
}
