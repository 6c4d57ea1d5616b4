//! Survey statistics for a dataset
//!
//! Status, special-category, contact-coverage and gender breakdowns in one
//! pass. Contact coverage counts phone numbers only; the found flag does not
//! make a voter "with mobile" here.

use serde::Serialize;
use shared::{AnnotationField, CategoryKind, DatasetId, Gender, StatusColor, VoterRecord};

use super::aggregation::derived_states;
use crate::traits::{AnnotationStore, RosterStore};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyStats {
    pub total: usize,
    pub favorite: usize,
    pub doubtful: usize,
    pub opposite: usize,
    pub migrant: usize,
    pub out_of_town: usize,
    pub dead: usize,
    pub with_mobile: usize,
    pub without_mobile: usize,
    pub male: usize,
    pub female: usize,
    pub responded: usize,
}

impl SurveyStats {
    /// Share of the dataset in percent, 0 for an empty dataset
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    pub fn status_assigned(&self) -> usize {
        self.favorite + self.doubtful + self.opposite
    }

    pub fn special_categories(&self) -> usize {
        self.migrant + self.out_of_town + self.dead
    }
}

pub fn survey_stats<A>(dataset: DatasetId, voters: &[VoterRecord], store: &A) -> SurveyStats
where
    A: AnnotationStore + ?Sized,
{
    let mut stats = SurveyStats::default();

    for (voter, state) in derived_states(dataset, voters, store) {
        stats.total += 1;

        match state.status_color {
            Some(StatusColor::Favorite) => stats.favorite += 1,
            Some(StatusColor::Doubtful) => stats.doubtful += 1,
            Some(StatusColor::Opposite) => stats.opposite += 1,
            None => {}
        }

        match state.category_label {
            Some(CategoryKind::Migrant) => stats.migrant += 1,
            Some(CategoryKind::OutOfTown) => stats.out_of_town += 1,
            Some(CategoryKind::Dead) => stats.dead += 1,
            None => {}
        }

        if state.has_mobile {
            stats.with_mobile += 1;
        } else {
            stats.without_mobile += 1;
        }

        match voter.gender {
            Gender::Male => stats.male += 1,
            Gender::Female => stats.female += 1,
            Gender::Unspecified => {}
        }

        if state.responded {
            stats.responded += 1;
        }
    }

    stats
}

/// Figures across every dataset of the roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub datasets: usize,
    pub total_voters: usize,
    /// Voters with a recorded survey response
    pub responded: usize,
}

pub fn dashboard_summary<R, A>(roster: &R, store: &A) -> DashboardSummary
where
    R: RosterStore + ?Sized,
    A: AnnotationStore + ?Sized,
{
    let mut summary = DashboardSummary::default();
    for dataset in roster.dataset_ids() {
        let voters = roster.dataset(dataset);
        summary.datasets += 1;
        summary.total_voters += voters.len();
        summary.responded += voters
            .iter()
            .filter(|voter| store.get(dataset, voter.id, AnnotationField::SurveyResponse).is_some())
            .count();
    }
    summary
}
