//! Test fixtures and data for canvass tests
//!
//! Consistent rosters and roster files used across all test suites.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use shared::{DatasetId, Gender, VoterRecord};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const DATASET: DatasetId = DatasetId(101);
    pub const OTHER_DATASET: DatasetId = DatasetId(102);

    /// Fixed creation time handed out by the mocked clock
    pub fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    /// Three voters: A with a roster mobile, B and C without
    pub fn three_voters() -> Vec<VoterRecord> {
        vec![
            VoterRecord::new(1, "Asha Patil", "XYZ0000001").with_mobile("555").with_gender(Gender::Female),
            VoterRecord::new(2, "Bhavesh Shah", "XYZ0000002").with_gender(Gender::Male),
            VoterRecord::new(3, "Chitra Rao", "XYZ0000003").with_gender(Gender::Female),
        ]
    }

    /// A single voter in a second dataset
    pub fn other_voters() -> Vec<VoterRecord> {
        vec![VoterRecord::new(1, "Dinesh Kulkarni", "PQR0000001").with_mobile("9800000001")]
    }

    /// Roster file covering both datasets
    pub fn roster_json() -> &'static str {
        r#"{
            "datasets": {
                "101": [
                    {"id": 1, "name": "Asha Patil", "voter_id": "XYZ0000001", "mobile": "555", "gender": "Female", "assembly_part_sequence": "1"},
                    {"id": 2, "name": "Bhavesh Shah", "voter_id": "XYZ0000002", "gender": "male", "assembly_part_sequence": "2"},
                    {"id": 3, "name": "Chitra Rao", "voter_id": "XYZ0000003", "assembly_part_sequence": "3"}
                ],
                "102": [
                    {"id": 1, "name": "Dinesh Kulkarni", "voter_id": "PQR0000001", "mobile": "9800000001"}
                ]
            }
        }"#
    }

    /// Annotation seed matching [`Self::roster_json`]
    pub fn seed_json() -> &'static str {
        r##"[
            {"dataset": 101, "record": 2, "annotation": {"field": "mobileOverride", "value": ""}},
            {"dataset": 101, "record": 3, "annotation": {"field": "foundFlag", "value": true}},
            {"dataset": 101, "record": 1, "annotation": {"field": "statusColor", "value": "#28a745"}},
            {"dataset": 102, "record": 1, "annotation": {"field": "surveyResponse", "value": "will vote"}}
        ]"##
    }
}
