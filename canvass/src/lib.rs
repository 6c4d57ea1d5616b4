//! Voter canvassing engine
//!
//! Field workers annotate roster voters (status color, quick flag, custom
//! category, mobile override, found flag, survey response). This library
//! derives an effective state per voter from the roster plus annotations and
//! aggregates it into dashboard counts, drill-down lists, survey statistics,
//! family groupings and exports.

pub mod core;
pub mod engine;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use core::{
    AnnotationEntry, Category, CategoryCounts, DashboardSummary, EffectiveVoterState, FamilyDraft, FamilyUnit,
    InMemoryAnnotationStore, StatusLabel, SurveyStats, VoterAnnotations,
};
pub use engine::{Canvass, DefaultCanvass};
pub use error::{CanvassError, CanvassResult};
pub use services::{EmailMessage, ExportConfig, InMemoryRoster, SystemClock};
pub use traits::{AnnotationStore, Clock, MockAnnotationStore, MockClock, RosterStore};
