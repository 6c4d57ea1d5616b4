//! Category counts and drill-down lists over a dataset
//!
//! One shared definition of every dashboard category. Counting is a read-only
//! fold that visits each voter once; filtering preserves roster order.

use serde::Serialize;
use shared::{CategoryKind, DatasetId, SharedError, StatusColor, VoterRecord, dataset_debug};
use std::fmt;
use std::str::FromStr;

use super::derivation::{EffectiveVoterState, derive_state};
use crate::traits::AnnotationStore;

/// Dashboard category a voter can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Find,
    NotFind,
    Favorite,
    Doubtful,
    Opposite,
    Blue,
    Migrant,
    OutOfTown,
    Dead,
}

impl Category {
    /// Dashboard order
    pub const ALL: [Category; 9] = [
        Category::Find,
        Category::NotFind,
        Category::Favorite,
        Category::Doubtful,
        Category::Opposite,
        Category::Blue,
        Category::Migrant,
        Category::OutOfTown,
        Category::Dead,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Find => "find",
            Category::NotFind => "not-find",
            Category::Favorite => "favorite",
            Category::Doubtful => "doubtful",
            Category::Opposite => "opposite",
            Category::Blue => "blue",
            Category::Migrant => "migrant",
            Category::OutOfTown => "out-of-town",
            Category::Dead => "dead",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Find => "Find",
            Category::NotFind => "Not Find",
            Category::Favorite => "Favorite",
            Category::Doubtful => "Doubtful",
            Category::Opposite => "Opposite",
            Category::Blue => "Blue",
            Category::Migrant => "Migrant",
            Category::OutOfTown => "Out-Of-Town",
            Category::Dead => "Dead",
        }
    }

    /// Membership predicate over the derived state
    pub fn matches(&self, state: &EffectiveVoterState) -> bool {
        match self {
            Category::Find => state.reachable,
            Category::NotFind => !state.reachable,
            Category::Favorite => state.status_color == Some(StatusColor::Favorite),
            Category::Doubtful => state.status_color == Some(StatusColor::Doubtful),
            Category::Opposite => state.status_color == Some(StatusColor::Opposite),
            Category::Blue => state.quick_flag,
            Category::Migrant => state.category_label == Some(CategoryKind::Migrant),
            Category::OutOfTown => state.category_label == Some(CategoryKind::OutOfTown),
            Category::Dead => state.category_label == Some(CategoryKind::Dead),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "green" => return Ok(Category::Favorite),
            "yellow" => return Ok(Category::Doubtful),
            "red" => return Ok(Category::Opposite),
            _ => {}
        }
        Category::ALL
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| SharedError::UnknownCategory { key: s.to_string() })
    }
}

/// Per-category counts for one dataset
///
/// Only `find` and `not_find` partition the dataset; the other categories
/// overlap freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub total: usize,
    pub find: usize,
    pub not_find: usize,
    pub favorite: usize,
    pub doubtful: usize,
    pub opposite: usize,
    pub blue: usize,
    pub migrant: usize,
    pub out_of_town: usize,
    pub dead: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Find => self.find,
            Category::NotFind => self.not_find,
            Category::Favorite => self.favorite,
            Category::Doubtful => self.doubtful,
            Category::Opposite => self.opposite,
            Category::Blue => self.blue,
            Category::Migrant => self.migrant,
            Category::OutOfTown => self.out_of_town,
            Category::Dead => self.dead,
        }
    }

    /// Counts in dashboard order
    pub fn entries(&self) -> Vec<(Category, usize)> {
        Category::ALL.into_iter().map(|category| (category, self.get(category))).collect()
    }

    fn record(&mut self, state: &EffectiveVoterState) {
        self.total += 1;
        if state.reachable {
            self.find += 1;
        } else {
            self.not_find += 1;
        }
        match state.status_color {
            Some(StatusColor::Favorite) => self.favorite += 1,
            Some(StatusColor::Doubtful) => self.doubtful += 1,
            Some(StatusColor::Opposite) => self.opposite += 1,
            None => {}
        }
        if state.quick_flag {
            self.blue += 1;
        }
        match state.category_label {
            Some(CategoryKind::Migrant) => self.migrant += 1,
            Some(CategoryKind::OutOfTown) => self.out_of_town += 1,
            Some(CategoryKind::Dead) => self.dead += 1,
            None => {}
        }
    }
}

/// Derive the state of every voter, in roster order
pub fn derived_states<'a, A>(
    dataset: DatasetId,
    voters: &'a [VoterRecord],
    store: &'a A,
) -> impl Iterator<Item = (&'a VoterRecord, EffectiveVoterState)> + Clone + 'a
where
    A: AnnotationStore + ?Sized,
{
    voters.iter().map(move |voter| {
        let annotations = store.annotations_for(dataset, voter.id);
        (voter, derive_state(voter, &annotations))
    })
}

/// Count every category in a single pass
pub fn compute_counts<A>(dataset: DatasetId, voters: &[VoterRecord], store: &A) -> CategoryCounts
where
    A: AnnotationStore + ?Sized,
{
    let counts = derived_states(dataset, voters, store).fold(CategoryCounts::default(), |mut counts, (_, state)| {
        counts.record(&state);
        counts
    });
    dataset_debug!(
        dataset,
        "Counted {} voters: {} find, {} not-find",
        counts.total,
        counts.find,
        counts.not_find
    );
    counts
}

/// Lazily yield the voters of a category in roster order.
///
/// The iterator can be cloned to restart it from the beginning.
pub fn iter_category<'a, A>(
    dataset: DatasetId,
    voters: &'a [VoterRecord],
    store: &'a A,
    category: Category,
) -> impl Iterator<Item = &'a VoterRecord> + Clone + 'a
where
    A: AnnotationStore + ?Sized,
{
    category_rows(dataset, voters, store, category).map(|(voter, _)| voter)
}

/// Voters of a category in roster order
pub fn filter_by_category<'a, A>(
    dataset: DatasetId,
    voters: &'a [VoterRecord],
    store: &'a A,
    category: Category,
) -> Vec<&'a VoterRecord>
where
    A: AnnotationStore + ?Sized,
{
    iter_category(dataset, voters, store, category).collect()
}

/// Voters of a category paired with their derived state, for export
pub fn category_rows<'a, A>(
    dataset: DatasetId,
    voters: &'a [VoterRecord],
    store: &'a A,
    category: Category,
) -> impl Iterator<Item = (&'a VoterRecord, EffectiveVoterState)> + Clone + 'a
where
    A: AnnotationStore + ?Sized,
{
    derived_states(dataset, voters, store).filter(move |(_, state)| category.matches(state))
}
