use preview_ir::types::EventRecord;
use serde::Serialize;

use crate::signal::Severity;

/// Number of trailing decision events listed as recent history.
pub const RECENT_HISTORY_LEN: usize = 5;
pub const DEFAULT_TIME: &str = "00:00";
pub const DEFAULT_STATUS: &str = "normal";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry<'a> {
    pub time: &'a str,
    pub title: &'a str,
    /// Status tag as written, `normal` when absent.
    pub status: &'a str,
}

impl HistoryEntry<'_> {
    /// `None` for tags other than normal/warning/danger.
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_tag(self.status)
    }
}

/// The last [`RECENT_HISTORY_LEN`] decision events, oldest first.
pub fn recent_history<'a>(decisions: &[&'a EventRecord]) -> Vec<HistoryEntry<'a>> {
    let start = decisions.len().saturating_sub(RECENT_HISTORY_LEN);
    decisions[start..]
        .iter()
        .copied()
        .map(|event| HistoryEntry {
            time: event.time.as_deref().unwrap_or(DEFAULT_TIME),
            title: event.title.as_deref().unwrap_or(""),
            status: event.status.as_deref().unwrap_or(DEFAULT_STATUS),
        })
        .collect()
}
