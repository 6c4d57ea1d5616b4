//! Test helpers and builder patterns for canvass tests
//!
//! Builders wire a real in-memory roster and annotation store to a mocked
//! clock so family timestamps are deterministic.

#![allow(dead_code)]

use canvass::{AnnotationStore, Canvass, ExportConfig, InMemoryAnnotationStore, InMemoryRoster, MockClock};
use shared::{AnnotationValue, DatasetId, RecordId, VoterRecord};
use std::io::Write;
use tempfile::NamedTempFile;

use super::fixtures::TestFixtures;

/// Type alias for the engine used in tests
pub type TestCanvass = Canvass<InMemoryRoster, InMemoryAnnotationStore, MockClock>;

/// Builder pattern for creating test engines with sensible defaults
pub struct CanvassBuilder {
    roster: InMemoryRoster,
    annotations: InMemoryAnnotationStore,
    clock: MockClock,
    export: ExportConfig,
}

impl CanvassBuilder {
    /// Empty roster, empty store, clock fixed at [`TestFixtures::created_at`]
    pub fn new() -> Self {
        let mut clock = MockClock::new();
        clock.expect_now().returning(TestFixtures::created_at).times(0..);

        Self {
            roster: InMemoryRoster::new(),
            annotations: InMemoryAnnotationStore::new(),
            clock,
            export: ExportConfig::default(),
        }
    }

    pub fn with_dataset(mut self, dataset: DatasetId, voters: Vec<VoterRecord>) -> Self {
        self.roster.insert_dataset(dataset, voters);
        self
    }

    pub fn with_annotation(mut self, dataset: DatasetId, record: u32, value: AnnotationValue) -> Self {
        self.annotations.set(dataset, RecordId(record), value);
        self
    }

    pub fn with_export_config(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    /// Replace the default clock expectations
    pub fn with_clock<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockClock),
    {
        let mut clock = MockClock::new();
        setup(&mut clock);
        self.clock = clock;
        self
    }

    pub fn build(self) -> TestCanvass {
        Canvass::new(self.roster, self.annotations, self.clock).with_export_config(self.export)
    }
}

impl Default for CanvassBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Engine over the three-voter fixture with nothing annotated
    pub fn three_voter_canvass() -> TestCanvass {
        CanvassBuilder::new()
            .with_dataset(TestFixtures::DATASET, TestFixtures::three_voters())
            .build()
    }

    /// Three-voter fixture with B's override blanked and C found
    pub fn reachability_canvass() -> TestCanvass {
        CanvassBuilder::new()
            .with_dataset(TestFixtures::DATASET, TestFixtures::three_voters())
            .with_annotation(TestFixtures::DATASET, 2, AnnotationValue::MobileOverride(String::new()))
            .with_annotation(TestFixtures::DATASET, 3, AnnotationValue::FoundFlag(true))
            .build()
    }

    /// Write `contents` to a temporary file that lives as long as the handle
    pub fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    /// Names of a voter list, for compact assertions
    pub fn names(voters: &[&VoterRecord]) -> Vec<String> {
        voters.iter().map(|voter| voter.name.clone()).collect()
    }
}
