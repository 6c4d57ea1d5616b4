//! Export adapter: CSV download, share text and e-mail drafts
//!
//! Receives complete, ordered rows from the engine. Any truncation for share
//! previews happens here and nowhere else.

use serde::Serialize;
use shared::VoterRecord;

use crate::core::derivation::{EffectiveVoterState, StatusLabel};
use crate::error::{CanvassError, CanvassResult};

/// A voter paired with its derived state
pub type ExportRow<'a> = (&'a VoterRecord, EffectiveVoterState);

pub const CSV_HEADER: [&str; 5] = ["Name", "Voter ID", "Mobile", "Status", "Custom"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Number of names included in a bulk-share preview
    pub share_preview_limit: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { share_preview_limit: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

fn status_text(state: &EffectiveVoterState) -> &'static str {
    match state.status_label {
        StatusLabel::None => "-",
        label => label.as_str(),
    }
}

/// Render rows as CSV with every field quoted
pub fn to_csv(rows: &[ExportRow<'_>]) -> CanvassResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for (voter, state) in rows {
        let custom = state.category.as_ref().map(|c| c.describe()).unwrap_or_default();
        writer.write_record([
            voter.name.as_str(),
            voter.voter_id.as_str(),
            state.display_mobile.as_deref().unwrap_or(""),
            status_text(state),
            custom.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| CanvassError::Export {
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| CanvassError::Export {
        reason: e.to_string(),
    })
}

/// Short message listing the first names of a list, for chat sharing
pub fn share_text(title: &str, rows: &[ExportRow<'_>], config: &ExportConfig) -> String {
    let names: Vec<&str> = rows
        .iter()
        .take(config.share_preview_limit)
        .map(|(voter, _)| voter.name.as_str())
        .collect();
    format!("List: {} ({})\n{}", title, rows.len(), names.join(", "))
}

/// E-mail draft with one line per voter
pub fn email_message(title: &str, rows: &[ExportRow<'_>]) -> EmailMessage {
    let body = rows
        .iter()
        .map(|(voter, state)| {
            format!(
                "{} - {} - {}",
                voter.name,
                voter.voter_id,
                state.display_mobile.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    EmailMessage {
        subject: format!("{} ({})", title, rows.len()),
        body,
    }
}
