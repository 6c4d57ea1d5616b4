//! Canvass engine facade
//!
//! Owns the roster, the annotation store and the family registry, and routes
//! every read through the same derivation so counts, lists and exports agree.

use shared::{
    AnnotationField, AnnotationValue, DatasetId, FamilyId, RecordId, VoterRecord, dataset_debug, dataset_error,
    dataset_info,
};

use crate::{
    core::{
        aggregation, family::FamilyRegistry, survey, Category, CategoryCounts, DashboardSummary, EffectiveVoterState,
        FamilyDraft, FamilyUnit, InMemoryAnnotationStore, SurveyStats,
    },
    error::CanvassResult,
    services::{export, EmailMessage, ExportConfig, ExportRow, InMemoryRoster, SystemClock},
    traits::{AnnotationStore, Clock, RosterStore},
};

/// Engine wired with the in-memory stores and the wall clock
pub type DefaultCanvass = Canvass<InMemoryRoster, InMemoryAnnotationStore, SystemClock>;

/// Annotation and aggregation engine over a read-only roster
pub struct Canvass<R, A, C>
where
    R: RosterStore,
    A: AnnotationStore,
    C: Clock,
{
    /// Injected services
    roster: R,
    annotations: A,
    clock: C,

    families: FamilyRegistry,
    export: ExportConfig,
}

impl DefaultCanvass {
    pub fn in_memory(roster: InMemoryRoster) -> Self {
        Self::new(roster, InMemoryAnnotationStore::new(), SystemClock)
    }
}

impl<R, A, C> Canvass<R, A, C>
where
    R: RosterStore,
    A: AnnotationStore,
    C: Clock,
{
    /// Create an engine with injected dependencies
    pub fn new(roster: R, annotations: A, clock: C) -> Self {
        Self {
            roster,
            annotations,
            clock,
            families: FamilyRegistry::new(),
            export: ExportConfig::default(),
        }
    }

    pub fn with_export_config(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    pub fn roster(&self) -> &R {
        &self.roster
    }

    pub fn annotations(&self) -> &A {
        &self.annotations
    }

    pub fn annotations_mut(&mut self) -> &mut A {
        &mut self.annotations
    }

    /// Voters of a dataset, empty for an unknown dataset
    pub fn voters(&self, dataset: DatasetId) -> &[VoterRecord] {
        self.roster.dataset(dataset)
    }

    // Annotations

    pub fn get_annotation(&self, dataset: DatasetId, record: RecordId, field: AnnotationField) -> Option<AnnotationValue> {
        self.annotations.get(dataset, record, field)
    }

    pub fn set_annotation(&mut self, dataset: DatasetId, record: RecordId, value: AnnotationValue) {
        self.annotations.set(dataset, record, value);
    }

    pub fn clear_annotation(&mut self, dataset: DatasetId, record: RecordId, field: AnnotationField) {
        self.annotations.clear(dataset, record, field);
    }

    // Derived views

    /// Derived state of one voter, `None` when the roster has no such voter
    pub fn derive_state(&self, dataset: DatasetId, record: RecordId) -> Option<EffectiveVoterState> {
        let voter = self.roster.voter(dataset, record)?;
        let annotations = self.annotations.annotations_for(dataset, record);
        Some(crate::core::derive_state(voter, &annotations))
    }

    pub fn compute_counts(&self, dataset: DatasetId) -> CategoryCounts {
        aggregation::compute_counts(dataset, self.voters(dataset), &self.annotations)
    }

    pub fn filter_by_category(&self, dataset: DatasetId, category: Category) -> Vec<&VoterRecord> {
        aggregation::filter_by_category(dataset, self.voters(dataset), &self.annotations, category)
    }

    /// Category members with their derived state, in roster order
    pub fn category_rows(&self, dataset: DatasetId, category: Category) -> Vec<ExportRow<'_>> {
        aggregation::category_rows(dataset, self.voters(dataset), &self.annotations, category).collect()
    }

    pub fn survey_stats(&self, dataset: DatasetId) -> SurveyStats {
        survey::survey_stats(dataset, self.voters(dataset), &self.annotations)
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        survey::dashboard_summary(&self.roster, &self.annotations)
    }

    // Families

    /// Save a family from optional voter slots, stamped with the current time
    pub fn create_family(&mut self, dataset: DatasetId, slots: &[Option<&VoterRecord>]) -> CanvassResult<FamilyUnit> {
        let created_at = self.clock.now();
        self.families.create_family(
            dataset,
            slots.iter().map(|slot| slot.map(|voter| voter.id)),
            None,
            created_at,
        )
    }

    pub fn save_family(&mut self, dataset: DatasetId, draft: &FamilyDraft) -> CanvassResult<FamilyUnit> {
        let created_at = self.clock.now();
        let family = self.families.create_family(
            dataset,
            draft.slots().iter().copied(),
            draft.name().map(str::to_string),
            created_at,
        )?;
        dataset_info!(dataset, "Saved {} with {} members", family.id, family.members.len());
        Ok(family)
    }

    pub fn delete_family(&mut self, dataset: DatasetId, family: FamilyId) -> bool {
        self.families.delete_family(dataset, family)
    }

    pub fn list_families(&self, dataset: DatasetId) -> &[FamilyUnit] {
        self.families.list_families(dataset)
    }

    pub fn families_of(&self, dataset: DatasetId, record: RecordId) -> Vec<&FamilyUnit> {
        self.families.families_of(dataset, record)
    }

    /// Resolve family members against the roster, skipping ids it no longer holds
    pub fn family_members(&self, dataset: DatasetId, family: FamilyId) -> Vec<&VoterRecord> {
        let Some(unit) = self.families.family(dataset, family) else {
            return Vec::new();
        };
        let members: Vec<&VoterRecord> = unit
            .members
            .iter()
            .filter_map(|record| self.roster.voter(dataset, *record))
            .collect();
        if members.len() != unit.members.len() {
            dataset_debug!(
                dataset,
                "{} references {} voters missing from the roster",
                family,
                unit.members.len() - members.len()
            );
        }
        members
    }

    // Export

    pub fn export_csv(&self, dataset: DatasetId, category: Category) -> CanvassResult<String> {
        let rows = self.category_rows(dataset, category);
        let csv = export::to_csv(&rows).inspect_err(|error| {
            dataset_error!(dataset, "CSV export of {} failed: {}", category, error);
        })?;
        dataset_info!(dataset, "Exported {} rows of {}", rows.len(), category);
        Ok(csv)
    }

    pub fn share_text(&self, dataset: DatasetId, category: Category) -> String {
        export::share_text(category.title(), &self.category_rows(dataset, category), &self.export)
    }

    pub fn email_message(&self, dataset: DatasetId, category: Category) -> EmailMessage {
        export::email_message(category.title(), &self.category_rows(dataset, category))
    }
}
