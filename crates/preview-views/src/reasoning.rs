use preview_ir::types::EventRecord;
use serde::Serialize;

use crate::classify::DecisionStage;

/// Reasoning items of one decision stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasoningSection<'a> {
    pub stage: DecisionStage,
    /// One entry per event of this stage, in input order.
    pub items: Vec<&'a str>,
}

impl ReasoningSection<'_> {
    pub fn heading(&self) -> &'static str {
        self.stage.heading()
    }
}

/// Sections for stages 1–7 in ascending order; stages with no events are skipped.
pub fn reasoning_coverage<'a>(decisions: &[&'a EventRecord]) -> Vec<ReasoningSection<'a>> {
    DecisionStage::ALL
        .into_iter()
        .filter_map(|stage| {
            let items: Vec<&'a str> = decisions
                .iter()
                .copied()
                .filter(|e| e.stage() == stage.number() as i64)
                .map(reasoning_text)
                .collect();
            (!items.is_empty()).then_some(ReasoningSection { stage, items })
        })
        .collect()
}

/// `reasoning`, else `description`, else empty. Never both.
fn reasoning_text(event: &EventRecord) -> &str {
    event
        .reasoning
        .as_deref()
        .or(event.description.as_deref())
        .unwrap_or("")
}
