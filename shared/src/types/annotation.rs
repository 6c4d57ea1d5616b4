//! Field-collected annotation values
//!
//! Each variant of [`AnnotationValue`] belongs to exactly one
//! [`AnnotationField`], so a stored value can never end up under the wrong field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Canvass status of a voter. At most one per voter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    #[serde(alias = "#28a745", alias = "green")]
    Favorite,
    #[serde(alias = "#ffc107", alias = "yellow")]
    Doubtful,
    #[serde(alias = "#dc3545", alias = "red")]
    Opposite,
}

impl StatusColor {
    pub const ALL: [StatusColor; 3] = [StatusColor::Favorite, StatusColor::Doubtful, StatusColor::Opposite];

    /// Color token the mobile app historically stored for this status
    pub fn token(&self) -> &'static str {
        match self {
            StatusColor::Favorite => "#28a745",
            StatusColor::Doubtful => "#ffc107",
            StatusColor::Opposite => "#dc3545",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusColor::Favorite => "Favorite",
            StatusColor::Doubtful => "Doubtful",
            StatusColor::Opposite => "Opposite",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusColor {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "favorite" | "green" | "#28a745" => Ok(StatusColor::Favorite),
            "doubtful" | "yellow" | "#ffc107" => Ok(StatusColor::Doubtful),
            "opposite" | "red" | "#dc3545" => Ok(StatusColor::Opposite),
            _ => Err(SharedError::UnknownStatusColor { input: s.to_string() }),
        }
    }
}

/// Special category a field worker can file a voter under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    #[serde(alias = "Migrant")]
    Migrant,
    #[serde(alias = "Out Of Town")]
    OutOfTown,
    #[serde(alias = "Dead")]
    Dead,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 3] = [CategoryKind::Migrant, CategoryKind::OutOfTown, CategoryKind::Dead];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Migrant => "Migrant",
            CategoryKind::OutOfTown => "Out Of Town",
            CategoryKind::Dead => "Dead",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "migrant" => Ok(CategoryKind::Migrant),
            "outoftown" => Ok(CategoryKind::OutOfTown),
            "dead" => Ok(CategoryKind::Dead),
            _ => Err(SharedError::UnknownCustomCategory { input: s.to_string() }),
        }
    }
}

/// Custom category: the kind and its free-text detail always travel together
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomCategory {
    #[serde(default)]
    pub kind: Option<CategoryKind>,
    #[serde(default)]
    pub value: String,
}

impl CustomCategory {
    pub fn new(kind: CategoryKind, value: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            value: value.into(),
        }
    }

    /// "Migrant: Pune" style text, empty when no kind is set
    pub fn describe(&self) -> String {
        match self.kind {
            Some(kind) => format!("{}: {}", kind.label(), self.value),
            None => String::new(),
        }
    }
}

/// The closed set of per-voter mutable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationField {
    StatusColor,
    QuickBlue,
    CustomCategory,
    MobileOverride,
    FoundFlag,
    SurveyResponse,
}

impl AnnotationField {
    pub const ALL: [AnnotationField; 6] = [
        AnnotationField::StatusColor,
        AnnotationField::QuickBlue,
        AnnotationField::CustomCategory,
        AnnotationField::MobileOverride,
        AnnotationField::FoundFlag,
        AnnotationField::SurveyResponse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationField::StatusColor => "statusColor",
            AnnotationField::QuickBlue => "quickBlue",
            AnnotationField::CustomCategory => "customCategory",
            AnnotationField::MobileOverride => "mobileOverride",
            AnnotationField::FoundFlag => "foundFlag",
            AnnotationField::SurveyResponse => "surveyResponse",
        }
    }
}

impl fmt::Display for AnnotationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnotationField {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnnotationField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SharedError::UnknownAnnotationField { input: s.to_string() })
    }
}

/// A value for one annotation field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum AnnotationValue {
    StatusColor(StatusColor),
    QuickBlue(bool),
    CustomCategory(CustomCategory),
    MobileOverride(String),
    FoundFlag(bool),
    SurveyResponse(String),
}

impl AnnotationValue {
    /// The field this value is stored under
    pub fn field(&self) -> AnnotationField {
        match self {
            AnnotationValue::StatusColor(_) => AnnotationField::StatusColor,
            AnnotationValue::QuickBlue(_) => AnnotationField::QuickBlue,
            AnnotationValue::CustomCategory(_) => AnnotationField::CustomCategory,
            AnnotationValue::MobileOverride(_) => AnnotationField::MobileOverride,
            AnnotationValue::FoundFlag(_) => AnnotationField::FoundFlag,
            AnnotationValue::SurveyResponse(_) => AnnotationField::SurveyResponse,
        }
    }
}
