//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod aggregation;
pub mod annotations;
pub mod derivation;
pub mod family;
pub mod survey;

pub use aggregation::{Category, CategoryCounts, compute_counts, filter_by_category, iter_category};
pub use annotations::{AnnotationEntry, AnnotationKey, InMemoryAnnotationStore, VoterAnnotations};
pub use derivation::{EffectiveVoterState, StatusLabel, derive_state};
pub use family::{FamilyDraft, FamilyRegistry, FamilyUnit};
pub use survey::{DashboardSummary, SurveyStats, dashboard_summary, survey_stats};
