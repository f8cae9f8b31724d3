//! Per-run counts, logged at the end of a run and returned to callers.

use preview_views::status::StatusLevel;
use preview_views::ReportViews;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Events read from the directive.
    pub events: usize,
    pub decisions: usize,
    pub audit_records: usize,
    /// Events outside stages 1–10.
    pub dropped: usize,
    pub status: StatusLevel,
    pub warning_count: usize,
    pub has_highlighted_action: bool,
}

impl RunSummary {
    pub fn new(total_events: usize, views: &ReportViews<'_>) -> Self {
        // The timeline carries one card per decision.
        let decisions = views.timeline.len();
        let audit_records = views.audit.record_count();
        Self {
            events: total_events,
            decisions,
            audit_records,
            dropped: total_events.saturating_sub(decisions + audit_records),
            status: views.status.level,
            warning_count: views.status.warning_count,
            has_highlighted_action: views.highlighted.is_some(),
        }
    }
}
