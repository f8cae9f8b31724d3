use preview_ir::types::EventRecord;
use serde::Serialize;

pub const DEFAULT_ACTION_ICON: &str = "📌";
pub const DEFAULT_ACTION_LABEL: &str = "Check now";

/// Day-level health of the decision layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusLevel {
    #[serde(rename = "OK")]
    Ok,
    Warning,
}

impl StatusLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusLevel::Ok => "OK",
            StatusLevel::Warning => "Warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalStatus {
    pub level: StatusLevel,
    /// Decision events with a safety trigger or a human gate, each counted once.
    pub warning_count: usize,
    pub message: String,
}

pub fn global_status(decisions: &[&EventRecord]) -> GlobalStatus {
    let warning_count = decisions.iter().filter(|e| e.needs_attention()).count();
    if warning_count == 0 {
        GlobalStatus {
            level: StatusLevel::Ok,
            warning_count,
            message: "All operations are normal today".to_string(),
        }
    } else {
        let noun = if warning_count == 1 { "item needs" } else { "items need" };
        GlobalStatus {
            level: StatusLevel::Warning,
            warning_count,
            message: format!("{warning_count} {noun} attention"),
        }
    }
}

/// The day's "one thing to do".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightedAction<'a> {
    pub icon: &'a str,
    pub title: &'a str,
    pub action_label: &'a str,
}

/// First decision event of type `action`, if any.
pub fn highlighted_action<'a>(decisions: &[&'a EventRecord]) -> Option<HighlightedAction<'a>> {
    decisions
        .iter()
        .copied()
        .find(|e| e.is_action())
        .map(|event| HighlightedAction {
            icon: event.icon.as_deref().unwrap_or(DEFAULT_ACTION_ICON),
            title: event.title.as_deref().unwrap_or(""),
            action_label: event.action_label.as_deref().unwrap_or(DEFAULT_ACTION_LABEL),
        })
}
