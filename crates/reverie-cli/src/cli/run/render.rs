use chrono::Local;
use reverie_core::timeline::TimelineView;
use reverie_model::journal::JournalEntry;
use reverie_model::mood;
use std::fmt::Write;

/// A timeline entry as printed in the terminal.
pub(crate) fn entry(entry: &JournalEntry) -> String {
    let created_at = entry.created_at.with_timezone(&Local);
    let mut out = String::new();
    if let Some(title) = entry.title.as_deref().filter(|title| !title.is_empty()) {
        let _ = writeln!(out, "# {title}");
    }
    let _ = write!(out, "{}", created_at.format("%Y-%m-%d %H:%M"));
    if let Some(mood) = entry.mood.as_deref().filter(|mood| !mood.is_empty()) {
        let _ = write!(out, "  [{}]", mood::label(mood));
    }
    out.push('\n');
    if let Some(summary) = entry.summary.as_deref().filter(|summary| !summary.is_empty()) {
        let _ = writeln!(out, "  AI Insights: {summary}");
    }
    out.push_str(&entry.preview());
    out
}

pub(crate) fn timeline(view: &TimelineView<'_>) -> String {
    match view {
        TimelineView::Empty => {
            "Your story begins here. Start writing your first journal entry with /write.".to_owned()
        }
        TimelineView::NoMatches => {
            "No entries match your search. Try adjusting /search or /mood.".to_owned()
        }
        TimelineView::Entries(entries) => entries
            .iter()
            .map(|item| entry(item))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}
