//! Text formatting functions for `quest_journal`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status markers (✔ / [ ])
//! - Quest lines and the journal table
//! - Mutation and statistics summaries

use quest_lib::{Priority, Quest, QuestStats, Status};
use unicode_width::UnicodeWidthStr;

use super::output::{Action, MutationOutput};

/// Status marker characters.
pub mod icons {
    /// Discovered - completed (checkmark).
    pub const DISCOVERED: &str = "✔";
    /// Uncharted - still pending (empty box).
    pub const UNCHARTED: &str = "[ ]";
}

const TABLE_HEADERS: [&str; 5] = ["ID", "Quest", "Status", "Priority", "Deadline"];
const COLUMN_GAP: &str = "  ";

/// Format a status with its marker, e.g. `✔ Discovered`.
#[must_use]
pub fn format_status(status: &Status) -> String {
    let icon = match status {
        Status::Discovered => icons::DISCOVERED,
        Status::Uncharted => icons::UNCHARTED,
    };
    format!("{icon} {status}")
}

/// Due date, or `-` when none is set.
#[must_use]
pub fn format_due(quest: &Quest) -> &str {
    quest.due_date().unwrap_or("-")
}

/// Format a single-line quest summary.
///
/// Format: `#{id} {status} [{priority}] {description}` plus ` (due {date})`.
#[must_use]
pub fn format_quest_line(quest: &Quest) -> String {
    let mut line = format!(
        "#{} {} [{}] {}",
        quest.id,
        format_status(&quest.status),
        quest.priority,
        quest.description
    );
    if let Some(due) = quest.due_date() {
        line.push_str(&format!(" (due {due})"));
    }
    line
}

/// Render quests as an aligned table with a header row.
///
/// Column widths are measured in terminal cells, so wide characters line up.
#[must_use]
pub fn format_table(quests: &[&Quest]) -> String {
    let rows: Vec<[String; 5]> = quests
        .iter()
        .map(|q| {
            [
                q.id.to_string(),
                q.description.clone(),
                format_status(&q.status),
                q.priority.to_string(),
                format_due(q).to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &TABLE_HEADERS, &widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_row(&mut out, &rule.each_ref().map(String::as_str), &widths);
    for row in &rows {
        push_row(&mut out, &row.each_ref().map(String::as_str), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Human-readable message for a mutation outcome.
#[must_use]
pub fn format_mutation(output: &MutationOutput) -> String {
    let Some(quest) = output.quest.as_ref() else {
        return format!("Quest #{} not found in the journal.", output.id);
    };

    match output.action {
        Action::Added => format!("Quest #{} added to the journal: {}", quest.id, quest.description),
        Action::Discovered => format!("Quest #{} discovered: {}", quest.id, quest.description),
        Action::Edited => format!("Quest #{} updated: {}", quest.id, quest.description),
        Action::Deleted => format!("Quest #{} lost along the way: {}", quest.id, quest.description),
    }
}

/// Multi-line statistics summary.
#[must_use]
pub fn format_stats(stats: &QuestStats) -> String {
    let mut out = String::from("Quest statistics\n");
    out.push_str(&format!("  Total:       {}\n", stats.total));
    out.push_str(&format!("  Discovered:  {}\n", stats.discovered));
    out.push_str(&format!("  Uncharted:   {}\n", stats.uncharted));
    out.push_str(&format!("  Completion:  {:.1}%\n", stats.completion_rate()));
    out.push_str("\nBy priority\n");
    for priority in Priority::ALL.iter().rev() {
        out.push_str(&format!(
            "  {:<8}{}\n",
            format!("{priority}:"),
            stats.count_for(*priority)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_quest() -> Quest {
        Quest::new(1, "Find the idol", Priority::High, "")
    }

    #[test]
    fn test_format_status() {
        assert_eq!(format_status(&Status::Discovered), "✔ Discovered");
        assert_eq!(format_status(&Status::Uncharted), "[ ] Uncharted");
    }

    #[test]
    fn test_format_due() {
        let mut quest = make_test_quest();
        assert_eq!(format_due(&quest), "-");
        quest.due_date = "2025-12-31".to_string();
        assert_eq!(format_due(&quest), "2025-12-31");
    }

    #[test]
    fn test_format_quest_line() {
        let mut quest = make_test_quest();
        assert_eq!(
            format_quest_line(&quest),
            "#1 [ ] Uncharted [High] Find the idol"
        );
        quest.status = Status::Discovered;
        quest.due_date = "1936-06-12".to_string();
        assert_eq!(
            format_quest_line(&quest),
            "#1 ✔ Discovered [High] Find the idol (due 1936-06-12)"
        );
    }

    #[test]
    fn test_format_table_aligns_columns() {
        let a = make_test_quest();
        let b = Quest::new(12, "Map", Priority::Low, "2025-01-01");
        let table = format_table(&[&a, &b]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "ID  Quest          Status         Priority  Deadline"
        );
        assert!(lines[1].starts_with("--  -------------  "));
        assert_eq!(
            lines[2],
            "1   Find the idol  [ ] Uncharted  High      -"
        );
        assert_eq!(
            lines[3],
            "12  Map            [ ] Uncharted  Low       2025-01-01"
        );
    }

    #[test]
    fn test_format_table_measures_wide_characters() {
        let wide = Quest::new(1, "寺院", Priority::Low, "");
        let narrow = Quest::new(2, "abcd", Priority::Low, "");
        let table = format_table(&[&wide, &narrow]);
        let lines: Vec<&str> = table.lines().collect();
        let status_col = |line: &str| line.find("[ ]").unwrap();
        // Both rows put the status column after a four-cell description.
        assert_eq!(
            lines[2][..status_col(lines[2])].width(),
            lines[3][..status_col(lines[3])].width()
        );
    }

    #[test]
    fn test_format_mutation_messages() {
        let quest = make_test_quest();
        let added = MutationOutput::applied(Action::Added, quest);
        assert_eq!(
            format_mutation(&added),
            "Quest #1 added to the journal: Find the idol"
        );

        let missing = MutationOutput::not_found(Action::Edited, 99);
        assert_eq!(format_mutation(&missing), "Quest #99 not found in the journal.");
    }

    #[test]
    fn test_format_stats() {
        let mut done = make_test_quest();
        done.status = Status::Discovered;
        let quests = [done, Quest::new(2, "Map", Priority::Medium, "")];
        let text = format_stats(&QuestStats::from_quests(&quests));

        assert!(text.contains("Total:       2"));
        assert!(text.contains("Completion:  50.0%"));
        assert!(text.contains("High:   1"));
        assert!(text.contains("Medium: 1"));
        assert!(text.contains("Low:    0"));
    }
}
