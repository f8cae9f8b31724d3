use preview_ir::types::EventRecord;
use serde::Serialize;

use crate::classify::DecisionStage;
use crate::signal::Severity;

pub const DEFAULT_CARD_TITLE: &str = "Untitled Event";

/// One card of the card-by-card decision timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineCard<'a> {
    /// Zero-based position in the decision sequence.
    pub index: usize,
    pub stage: DecisionStage,
    pub severity: Severity,
    pub event_type: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub input: Option<&'a str>,
    pub output: Option<&'a str>,
    pub reasoning: Option<&'a str>,
    pub constraint: Option<&'a str>,
}

/// Every decision event as a card, in order. `index` is the event's position
/// in `decisions`.
pub fn decision_timeline<'a>(decisions: &[&'a EventRecord]) -> Vec<TimelineCard<'a>> {
    decisions
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(index, event)| Some((index, DecisionStage::from_stage(event.stage())?, event)))
        .map(|(index, stage, event)| TimelineCard {
            index,
            stage,
            severity: Severity::of(event),
            event_type: event.event_type(),
            title: event.title.as_deref().unwrap_or(DEFAULT_CARD_TITLE),
            description: event.description.as_deref().unwrap_or(""),
            input: event.input.as_deref(),
            output: event.output.as_deref(),
            reasoning: event.reasoning.as_deref(),
            constraint: event.constraint.as_deref(),
        })
        .collect()
}
