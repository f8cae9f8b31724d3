use preview_ir::types::DesignDirective;
use serde::Serialize;
use tracing::debug;

use crate::audit::{audit_panel, AuditPanel};
use crate::classify::{classify, ClassifiedSet};
use crate::history::{recent_history, HistoryEntry};
use crate::reasoning::{reasoning_coverage, ReasoningSection};
use crate::signal::{leading_signals, LeadingSignal};
use crate::status::{global_status, highlighted_action, GlobalStatus, HighlightedAction};
use crate::timeline::{decision_timeline, TimelineCard};

/// Everything the renderer needs for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportViews<'a> {
    pub system_name: &'a str,
    pub version: &'a str,
    pub status: GlobalStatus,
    /// `None` when the day has no action event; the section is then omitted.
    pub highlighted: Option<HighlightedAction<'a>>,
    pub signals: Vec<LeadingSignal<'a>>,
    pub history: Vec<HistoryEntry<'a>>,
    pub reasoning: Vec<ReasoningSection<'a>>,
    pub audit: AuditPanel<'a>,
    pub timeline: Vec<TimelineCard<'a>>,
}

impl<'a> ReportViews<'a> {
    /// Derive every view from an already classified set.
    pub fn from_classified(
        classified: &ClassifiedSet<'a>,
        system_name: &'a str,
        version: &'a str,
    ) -> Self {
        let decisions = &classified.decisions;
        Self {
            system_name,
            version,
            status: global_status(decisions),
            highlighted: highlighted_action(decisions),
            signals: leading_signals(decisions),
            history: recent_history(decisions),
            reasoning: reasoning_coverage(decisions),
            audit: audit_panel(&classified.audit),
            timeline: decision_timeline(decisions),
        }
    }
}

/// Classify the directive and build all views.
pub fn build_views(directive: &DesignDirective) -> ReportViews<'_> {
    let classified = classify(directive);
    let views = ReportViews::from_classified(
        &classified,
        &directive.system_name,
        &directive.version,
    );
    debug!(
        status = views.status.level.as_str(),
        warnings = views.status.warning_count,
        signals = views.signals.len(),
        history = views.history.len(),
        reasoning_sections = views.reasoning.len(),
        "built report views"
    );
    views
}
