//! Trait definitions with mockall annotations for testing
//!
//! These are the seams between the engine and its collaborators: the
//! read-only roster, the mutable annotation store and the wall clock used
//! to stamp family units.

use chrono::{DateTime, Utc};
use shared::{AnnotationField, AnnotationValue, DatasetId, RecordId, VoterRecord};

use crate::core::annotations::VoterAnnotations;

/// Read-only roster of voters, partitioned by dataset
pub trait RosterStore {
    /// Voters of a dataset in roster order. Unknown datasets yield an empty slice.
    fn dataset(&self, dataset: DatasetId) -> &[VoterRecord];

    /// All dataset ids known to the roster, ascending
    fn dataset_ids(&self) -> Vec<DatasetId>;

    /// Look up a single voter by its roster id
    fn voter(&self, dataset: DatasetId, record: RecordId) -> Option<&VoterRecord> {
        self.dataset(dataset).iter().find(|voter| voter.id == record)
    }

    /// Number of voters across every dataset
    fn total_voters(&self) -> usize {
        self.dataset_ids()
            .into_iter()
            .map(|dataset| self.dataset(dataset).len())
            .sum()
    }
}

/// Sparse key-value store of field-collected facts about voters
///
/// Every operation is total: reading a missing key yields `None`, clearing a
/// missing key does nothing.
#[mockall::automock]
pub trait AnnotationStore {
    /// Read one field of one voter
    fn get(&self, dataset: DatasetId, record: RecordId, field: AnnotationField) -> Option<AnnotationValue>;

    /// Overwrite the field that `value` belongs to
    fn set(&mut self, dataset: DatasetId, record: RecordId, value: AnnotationValue);

    /// Remove one field of one voter
    fn clear(&mut self, dataset: DatasetId, record: RecordId, field: AnnotationField);

    /// Typed snapshot of all fields of one voter
    fn annotations_for(&self, dataset: DatasetId, record: RecordId) -> VoterAnnotations {
        AnnotationField::ALL
            .into_iter()
            .filter_map(|field| self.get(dataset, record, field))
            .collect()
    }
}

/// Source of creation timestamps
#[mockall::automock]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
