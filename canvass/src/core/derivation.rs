//! Derivation of the effective per-voter state
//!
//! Pure functions combining a roster record with its annotations. Every screen
//! and export reads voters through [`derive_state`], so a voter is classified
//! the same way wherever it shows up.

use serde::Serialize;
use shared::{CategoryKind, CustomCategory, StatusColor, VoterRecord};
use std::fmt;

use super::annotations::VoterAnnotations;

/// Status shown next to a voter. A status color wins over the quick flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    Favorite,
    Doubtful,
    Opposite,
    Blue,
    None,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Favorite => "Favorite",
            StatusLabel::Doubtful => "Doubtful",
            StatusLabel::Opposite => "Opposite",
            StatusLabel::Blue => "Blue",
            StatusLabel::None => "None",
        }
    }
}

impl From<StatusColor> for StatusLabel {
    fn from(color: StatusColor) -> Self {
        match color {
            StatusColor::Favorite => StatusLabel::Favorite,
            StatusColor::Doubtful => StatusLabel::Doubtful,
            StatusColor::Opposite => StatusLabel::Opposite,
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized, derived view of a voter. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveVoterState {
    /// Non-empty override, non-empty roster mobile, or found flag
    pub reachable: bool,
    /// Non-empty override or non-empty roster mobile; ignores the found flag
    pub has_mobile: bool,
    /// Mobile to show. An empty override hides the roster mobile.
    pub display_mobile: Option<String>,
    pub status_label: StatusLabel,
    pub status_color: Option<StatusColor>,
    /// Tracked on its own; counted even when a status color hides it
    pub quick_flag: bool,
    pub category: Option<CustomCategory>,
    pub category_label: Option<CategoryKind>,
    pub responded: bool,
}

impl EffectiveVoterState {
    /// Category text for display, "None" when unset
    pub fn category_text(&self) -> &'static str {
        self.category_label.map(|kind| kind.label()).unwrap_or("None")
    }
}

fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Combine a roster record with its annotations
pub fn derive_state(voter: &VoterRecord, annotations: &VoterAnnotations) -> EffectiveVoterState {
    let override_mobile = annotations.mobile_override.as_deref();
    let has_mobile = non_empty(override_mobile) || non_empty(voter.mobile.as_deref());

    let display_mobile = match override_mobile.map(str::trim) {
        Some("") => None,
        Some(mobile) => Some(mobile.to_string()),
        None => voter.roster_mobile().map(|mobile| mobile.trim().to_string()),
    };

    let status_label = match annotations.status_color {
        Some(color) => StatusLabel::from(color),
        None if annotations.quick_blue => StatusLabel::Blue,
        None => StatusLabel::None,
    };

    let category_label = annotations.custom_category.as_ref().and_then(|category| category.kind);

    EffectiveVoterState {
        reachable: has_mobile || annotations.found,
        has_mobile,
        display_mobile,
        status_label,
        status_color: annotations.status_color,
        quick_flag: annotations.quick_blue,
        category: annotations.custom_category.clone(),
        category_label,
        responded: annotations.survey_response.is_some(),
    }
}
