//! In-memory annotation store
//!
//! Facts collected in the field are addressed by a structured
//! `(dataset, record, field)` key. A field holds exactly one value; writing it
//! again replaces the previous value wholesale, so a custom category's kind and
//! detail can never be observed from two different writes.

use serde::{Deserialize, Serialize};
use shared::{
    AnnotationField, AnnotationValue, CustomCategory, DatasetId, RecordId, StatusColor, dataset_debug,
};
use std::collections::HashMap;

use crate::traits::AnnotationStore;

/// Composite key addressing one mutable fact about one voter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnotationKey {
    pub dataset: DatasetId,
    pub record: RecordId,
    pub field: AnnotationField,
}

impl AnnotationKey {
    pub fn new(dataset: DatasetId, record: RecordId, field: AnnotationField) -> Self {
        Self { dataset, record, field }
    }
}

/// Typed view of every annotation of a single voter
///
/// Missing fields read as "no tag": no status, flags off, no category,
/// no override, no survey response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoterAnnotations {
    pub status_color: Option<StatusColor>,
    pub quick_blue: bool,
    pub custom_category: Option<CustomCategory>,
    pub mobile_override: Option<String>,
    pub found: bool,
    pub survey_response: Option<String>,
}

impl VoterAnnotations {
    /// Fold one stored value into the snapshot
    pub fn apply(&mut self, value: AnnotationValue) {
        match value {
            AnnotationValue::StatusColor(color) => self.status_color = Some(color),
            AnnotationValue::QuickBlue(flag) => self.quick_blue = flag,
            AnnotationValue::CustomCategory(category) => self.custom_category = Some(category),
            AnnotationValue::MobileOverride(mobile) => self.mobile_override = Some(mobile),
            AnnotationValue::FoundFlag(flag) => self.found = flag,
            AnnotationValue::SurveyResponse(response) => self.survey_response = Some(response),
        }
    }

    pub fn with(mut self, value: AnnotationValue) -> Self {
        self.apply(value);
        self
    }
}

impl FromIterator<AnnotationValue> for VoterAnnotations {
    fn from_iter<I: IntoIterator<Item = AnnotationValue>>(iter: I) -> Self {
        let mut annotations = VoterAnnotations::default();
        for value in iter {
            annotations.apply(value);
        }
        annotations
    }
}

/// One stored annotation, as found in seed files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationEntry {
    pub dataset: DatasetId,
    pub record: RecordId,
    pub annotation: AnnotationValue,
}

/// Process-lifetime annotation store backed by a hash map
#[derive(Debug, Default)]
pub struct InMemoryAnnotationStore {
    values: HashMap<AnnotationKey, AnnotationValue>,
}

impl InMemoryAnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored field values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove every field of one voter
    pub fn clear_voter(&mut self, dataset: DatasetId, record: RecordId) {
        for field in AnnotationField::ALL {
            self.values.remove(&AnnotationKey::new(dataset, record, field));
        }
        dataset_debug!(dataset, "Cleared all annotations for record {}", record);
    }

    /// Apply seed entries in order; later entries overwrite earlier ones
    pub fn load_seed(&mut self, entries: Vec<AnnotationEntry>) -> usize {
        let count = entries.len();
        for entry in entries {
            self.set(entry.dataset, entry.record, entry.annotation);
        }
        count
    }

    /// Snapshot of all entries, sorted by key
    pub fn entries(&self) -> Vec<AnnotationEntry> {
        let mut keys: Vec<&AnnotationKey> = self.values.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| AnnotationEntry {
                dataset: key.dataset,
                record: key.record,
                annotation: self.values[key].clone(),
            })
            .collect()
    }
}

impl AnnotationStore for InMemoryAnnotationStore {
    fn get(&self, dataset: DatasetId, record: RecordId, field: AnnotationField) -> Option<AnnotationValue> {
        self.values.get(&AnnotationKey::new(dataset, record, field)).cloned()
    }

    fn set(&mut self, dataset: DatasetId, record: RecordId, value: AnnotationValue) {
        let key = AnnotationKey::new(dataset, record, value.field());
        dataset_debug!(dataset, "Set {} for record {}", key.field, record);
        self.values.insert(key, value);
    }

    fn clear(&mut self, dataset: DatasetId, record: RecordId, field: AnnotationField) {
        if self.values.remove(&AnnotationKey::new(dataset, record, field)).is_some() {
            dataset_debug!(dataset, "Cleared {} for record {}", field, record);
        }
    }
}
