//! Export encodings for the whole journal.

use clap::ValueEnum;
use quest_lib::{Quest, QuestStats, jsonfile};

use super::text::{format_quest_line, format_stats};
use crate::error::Result;

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Same layout as the journal file
    #[default]
    Json,
    /// Comma-separated values with a header row
    Csv,
    /// Plain text, one quest per line
    Txt,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Txt => "txt",
        }
    }
}

/// Encode quests in the requested format.
///
/// # Errors
///
/// Returns `Json` if JSON serialization fails.
pub fn render_export(format: ExportFormat, quests: &[Quest]) -> Result<String> {
    match format {
        ExportFormat::Json => jsonfile::to_string(quests),
        ExportFormat::Csv => Ok(render_csv(quests)),
        ExportFormat::Txt => Ok(render_txt(quests)),
    }
}

fn render_csv(quests: &[Quest]) -> String {
    let mut out = String::from("id,quest,status,priority,due_date\r\n");
    for quest in quests {
        let fields = [
            quest.id.to_string(),
            csv_field(&quest.description),
            quest.status.to_string(),
            quest.priority.to_string(),
            csv_field(&quest.due_date),
        ];
        out.push_str(&fields.join(","));
        out.push_str("\r\n");
    }
    out
}

/// Quote a field when it holds a delimiter, quote, or line break (RFC 4180).
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_txt(quests: &[Quest]) -> String {
    let mut out = String::from("Quest Journal\n=============\n\n");
    for quest in quests {
        out.push_str(&format_quest_line(quest));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format_stats(&QuestStats::from_quests(quests)));
    out
}
