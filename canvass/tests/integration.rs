//! End-to-end tests for the canvass engine
//!
//! Exercise the facade the way the dashboard, list screens, survey screen
//! and family screen use it, against in-memory stores and roster files.

use assert_matches::assert_matches;
use canvass::{
    services::load_annotation_seed, AnnotationStore, Canvass, CanvassError, Category, DefaultCanvass,
    FamilyDraft, InMemoryAnnotationStore, InMemoryRoster, RosterStore, StatusLabel, SystemClock,
};
use shared::{
    AnnotationField, AnnotationValue, CategoryKind, CustomCategory, FamilyId, RecordId, StatusColor,
};

mod common;
use common::{CanvassBuilder, TestFixtures, TestHelpers};

/// Found / not-found split with roster mobile, blank override and found flag
#[test]
fn test_reachability_counts() {
    // Arrange
    let canvass = TestHelpers::reachability_canvass();

    // Act
    let counts = canvass.compute_counts(TestFixtures::DATASET);
    let not_found = canvass.filter_by_category(TestFixtures::DATASET, Category::NotFind);
    let b = canvass.derive_state(TestFixtures::DATASET, RecordId(2)).unwrap();

    // Assert
    assert_eq!(counts.total, 3);
    assert_eq!(counts.find, 2);
    assert_eq!(counts.not_find, 1);
    assert_eq!(TestHelpers::names(&not_found), vec!["Bhavesh Shah"]);
    assert_eq!(b.display_mobile, None);
    assert!(!b.reachable);
}

/// Status color and quick flag are counted independently
#[test]
fn test_status_and_quick_flag_both_counted() {
    let canvass = CanvassBuilder::new()
        .with_dataset(TestFixtures::DATASET, TestFixtures::three_voters())
        .with_annotation(TestFixtures::DATASET, 1, AnnotationValue::StatusColor(StatusColor::Opposite))
        .with_annotation(TestFixtures::DATASET, 1, AnnotationValue::QuickBlue(true))
        .build();

    let state = canvass.derive_state(TestFixtures::DATASET, RecordId(1)).unwrap();
    let counts = canvass.compute_counts(TestFixtures::DATASET);

    assert_eq!(state.status_label, StatusLabel::Opposite);
    assert_eq!(counts.opposite, 1);
    assert_eq!(counts.blue, 1);
    assert_eq!(
        canvass.filter_by_category(TestFixtures::DATASET, Category::Blue).len(),
        canvass.filter_by_category(TestFixtures::DATASET, Category::Opposite).len()
    );
}

/// Every list has the length its dashboard count announces
#[test]
fn test_counts_match_filtered_lists() {
    let canvass = CanvassBuilder::new()
        .with_dataset(TestFixtures::DATASET, TestFixtures::three_voters())
        .with_annotation(TestFixtures::DATASET, 1, AnnotationValue::StatusColor(StatusColor::Favorite))
        .with_annotation(TestFixtures::DATASET, 2, AnnotationValue::StatusColor(StatusColor::Doubtful))
        .with_annotation(
            TestFixtures::DATASET,
            2,
            AnnotationValue::CustomCategory(CustomCategory::new(CategoryKind::Migrant, "Pune")),
        )
        .with_annotation(
            TestFixtures::DATASET,
            3,
            AnnotationValue::CustomCategory(CustomCategory::new(CategoryKind::OutOfTown, "")),
        )
        .with_annotation(TestFixtures::DATASET, 3, AnnotationValue::QuickBlue(true))
        .build();

    let counts = canvass.compute_counts(TestFixtures::DATASET);
    for category in Category::ALL {
        let listed = canvass.filter_by_category(TestFixtures::DATASET, category);
        assert_eq!(counts.get(category), listed.len(), "category {category}");
    }
    assert_eq!(counts.find + counts.not_find, counts.total);
}

/// Category lists keep roster order
#[test]
fn test_filtered_list_preserves_roster_order() {
    let canvass = CanvassBuilder::new()
        .with_dataset(TestFixtures::DATASET, TestFixtures::three_voters())
        .with_annotation(TestFixtures::DATASET, 3, AnnotationValue::StatusColor(StatusColor::Favorite))
        .with_annotation(TestFixtures::DATASET, 1, AnnotationValue::StatusColor(StatusColor::Favorite))
        .build();

    let favorites = canvass.filter_by_category(TestFixtures::DATASET, Category::Favorite);
    assert_eq!(TestHelpers::names(&favorites), vec!["Asha Patil", "Chitra Rao"]);
}

/// Annotations stay inside their dataset
#[test]
fn test_datasets_are_isolated() {
    let mut canvass = CanvassBuilder::new()
        .with_dataset(TestFixtures::DATASET, TestFixtures::three_voters())
        .with_dataset(TestFixtures::OTHER_DATASET, TestFixtures::other_voters())
        .build();

    canvass.set_annotation(TestFixtures::OTHER_DATASET, RecordId(1), AnnotationValue::StatusColor(StatusColor::Opposite));

    assert_eq!(canvass.compute_counts(TestFixtures::DATASET).opposite, 0);
    assert_eq!(canvass.compute_counts(TestFixtures::OTHER_DATASET).opposite, 1);
    assert_eq!(
        canvass.get_annotation(TestFixtures::DATASET, RecordId(1), AnnotationField::StatusColor),
        None
    );
}

/// Unknown datasets read as empty instead of failing
#[test]
fn test_unknown_dataset_is_empty() {
    let canvass = TestHelpers::three_voter_canvass();
    let unknown = shared::DatasetId(999);

    assert_eq!(canvass.compute_counts(unknown).total, 0);
    assert!(canvass.filter_by_category(unknown, Category::Find).is_empty());
    assert_eq!(canvass.survey_stats(unknown).total, 0);
    assert!(canvass.list_families(unknown).is_empty());
    assert_eq!(canvass.derive_state(unknown, RecordId(1)), None);
}

/// Clearing an annotation restores the roster-derived state
#[test]
fn test_clear_restores_roster_state() {
    let mut canvass = TestHelpers::three_voter_canvass();
    let dataset = TestFixtures::DATASET;

    canvass.set_annotation(dataset, RecordId(1), AnnotationValue::MobileOverride(String::new()));
    assert_eq!(canvass.derive_state(dataset, RecordId(1)).unwrap().display_mobile, None);

    canvass.clear_annotation(dataset, RecordId(1), AnnotationField::MobileOverride);
    canvass.clear_annotation(dataset, RecordId(1), AnnotationField::MobileOverride);
    let state = canvass.derive_state(dataset, RecordId(1)).unwrap();
    assert_eq!(state.display_mobile.as_deref(), Some("555"));
    assert!(state.reachable);
}

/// Setting a field twice keeps only the last value
#[test]
fn test_set_overwrites_previous_value() {
    let mut canvass = TestHelpers::three_voter_canvass();
    let dataset = TestFixtures::DATASET;

    canvass.set_annotation(dataset, RecordId(2), AnnotationValue::StatusColor(StatusColor::Favorite));
    canvass.set_annotation(dataset, RecordId(2), AnnotationValue::StatusColor(StatusColor::Opposite));

    let counts = canvass.compute_counts(dataset);
    assert_eq!(counts.favorite, 0);
    assert_eq!(counts.opposite, 1);
    assert_eq!(canvass.annotations().len(), 1);
}

/// Family lifecycle through the facade with a fixed clock
#[test]
fn test_family_lifecycle() {
    let mut canvass = TestHelpers::three_voter_canvass();
    let dataset = TestFixtures::DATASET;
    let voters = TestFixtures::three_voters();

    let empty = canvass.create_family(dataset, &[None, None]);
    assert_matches!(empty, Err(CanvassError::Validation { .. }));
    assert!(canvass.list_families(dataset).is_empty());

    let family = canvass.create_family(dataset, &[None, Some(&voters[1]), None]).unwrap();
    assert_eq!(family.members, vec![RecordId(2)]);
    assert_eq!(family.created_at, TestFixtures::created_at());

    let members = canvass.family_members(dataset, family.id);
    assert_eq!(TestHelpers::names(&members), vec!["Bhavesh Shah"]);

    assert!(canvass.delete_family(dataset, family.id));
    assert!(!canvass.delete_family(dataset, family.id));
    assert!(canvass.list_families(dataset).is_empty());
}

/// Drafts are saved with their name and slot order
#[test]
fn test_save_family_from_draft() {
    let mut canvass = TestHelpers::three_voter_canvass();
    let dataset = TestFixtures::DATASET;
    let voters = TestFixtures::three_voters();

    let mut draft = FamilyDraft::with_slots(3).named("Patil household");
    draft.select(0, &voters[2]);
    draft.select(2, &voters[0]);

    let family = canvass.save_family(dataset, &draft).unwrap();
    assert_eq!(family.name.as_deref(), Some("Patil household"));
    assert_eq!(
        TestHelpers::names(&canvass.family_members(dataset, family.id)),
        vec!["Chitra Rao", "Asha Patil"]
    );
    assert_eq!(canvass.families_of(dataset, RecordId(1)).len(), 1);
}

/// Families remember members even when the roster no longer holds them
#[test]
fn test_family_members_skip_missing_records() {
    let mut canvass = TestHelpers::three_voter_canvass();
    let dataset = TestFixtures::DATASET;
    let ghost = shared::VoterRecord::new(42, "Gone Voter", "XYZ0000042");
    let voters = TestFixtures::three_voters();

    let family = canvass.create_family(dataset, &[Some(&voters[0]), Some(&ghost)]).unwrap();
    assert_eq!(family.members.len(), 2);
    assert_eq!(TestHelpers::names(&canvass.family_members(dataset, family.id)), vec!["Asha Patil"]);
    assert!(canvass.family_members(dataset, FamilyId(9999)).is_empty());
}

/// The clock is read once per saved family
#[test]
fn test_clock_stamps_each_saved_family() {
    let mut canvass = CanvassBuilder::new()
        .with_dataset(TestFixtures::DATASET, TestFixtures::three_voters())
        .with_clock(|clock| {
            clock.expect_now().times(2).returning(TestFixtures::created_at);
        })
        .build();
    let voters = TestFixtures::three_voters();

    canvass.create_family(TestFixtures::DATASET, &[Some(&voters[0])]).unwrap();
    canvass.create_family(TestFixtures::DATASET, &[Some(&voters[1])]).unwrap();
}

/// CSV export contains exactly the category rows, fully quoted
#[test]
fn test_export_csv_of_category() {
    let canvass = TestHelpers::reachability_canvass();

    let csv = canvass.export_csv(TestFixtures::DATASET, Category::Find).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], r#""Asha Patil","XYZ0000001","555","-","""#);
    assert_eq!(lines[2], r#""Chitra Rao","XYZ0000003","","-","""#);
}

/// Share previews truncate names, never the reported total
#[test]
fn test_share_and_email_exports() {
    let canvass = CanvassBuilder::new()
        .with_dataset(TestFixtures::DATASET, TestFixtures::three_voters())
        .with_export_config(canvass::ExportConfig { share_preview_limit: 1 })
        .build();

    let share = canvass.share_text(TestFixtures::DATASET, Category::NotFind);
    assert_eq!(share, "List: Not Find (2)\nBhavesh Shah");

    let email = canvass.email_message(TestFixtures::DATASET, Category::NotFind);
    assert_eq!(email.subject, "Not Find (2)");
    assert_eq!(email.body.lines().count(), 2);
}

/// Roster file plus annotation seed give the same figures as in-memory setup
#[test]
fn test_roster_and_seed_files() {
    let roster_file = TestHelpers::temp_file(TestFixtures::roster_json());
    let seed_file = TestHelpers::temp_file(TestFixtures::seed_json());

    let roster = InMemoryRoster::from_json_file(roster_file.path()).unwrap();
    let mut annotations = InMemoryAnnotationStore::new();
    let applied = annotations.load_seed(load_annotation_seed(seed_file.path()).unwrap());
    let canvass = Canvass::new(roster, annotations, SystemClock);

    assert_eq!(applied, 4);
    assert_eq!(canvass.roster().dataset_ids().len(), 2);

    let counts = canvass.compute_counts(TestFixtures::DATASET);
    assert_eq!((counts.find, counts.not_find, counts.favorite), (2, 1, 1));

    let summary = canvass.dashboard_summary();
    assert_eq!(summary.datasets, 2);
    assert_eq!(summary.total_voters, 4);
    assert_eq!(summary.responded, 1);

    let stats = canvass.survey_stats(TestFixtures::DATASET);
    assert_eq!(stats.female, 1);
    assert_eq!(stats.male, 1);
    assert_eq!(stats.with_mobile, 1);
}

/// Broken files surface as load errors naming the file
#[test]
fn test_load_errors() {
    let missing = std::path::Path::new("/nonexistent/roster.json");
    assert_matches!(InMemoryRoster::from_json_file(missing), Err(CanvassError::RosterLoad { .. }));

    let bad_seed = TestHelpers::temp_file("[{\"dataset\": 101}]");
    assert_matches!(
        load_annotation_seed(bad_seed.path()),
        Err(CanvassError::AnnotationLoad { path, .. }) if path == bad_seed.path().display().to_string()
    );
}

/// The default engine wires in-memory stores and the wall clock
#[test]
fn test_default_engine() {
    let roster = InMemoryRoster::new().with_dataset(TestFixtures::DATASET, TestFixtures::three_voters());
    let mut canvass = DefaultCanvass::in_memory(roster);
    let voters = TestFixtures::three_voters();

    let family = canvass.create_family(TestFixtures::DATASET, &[Some(&voters[0])]).unwrap();
    assert!(family.created_at <= chrono::Utc::now());
    assert!(canvass.annotations().is_empty());
    assert_eq!(canvass.roster().total_voters(), 3);
    assert!(canvass.annotations_mut().get(TestFixtures::DATASET, RecordId(1), AnnotationField::FoundFlag).is_none());
}
