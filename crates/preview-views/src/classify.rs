//! Stage-based partition of a directive's events into the operator-facing
//! decision layer and the three hidden audit buckets.

use preview_ir::types::{DesignDirective, EventRecord};
use serde::Serialize;
use tracing::{debug, warn};

/// Decision-layer categories, stages 1–7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStage {
    Reasoning = 1,
    Constraint = 2,
    Safety = 3,
    Memory = 4,
    Audit = 5,
    Routing = 6,
    Evolution = 7,
}

impl DecisionStage {
    /// All decision stages in ascending stage order.
    pub const ALL: [DecisionStage; 7] = [
        DecisionStage::Reasoning,
        DecisionStage::Constraint,
        DecisionStage::Safety,
        DecisionStage::Memory,
        DecisionStage::Audit,
        DecisionStage::Routing,
        DecisionStage::Evolution,
    ];

    pub fn from_stage(stage: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() as i64 == stage)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Heading shown to the operator above this stage's reasoning items.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Reasoning => "Why was this decided?",
            Self::Constraint => "Standards we held to",
            Self::Safety => "Risks detected and handled",
            Self::Memory => "Past records",
            Self::Audit => "Decision log",
            Self::Routing => "Operating efficiency",
            Self::Evolution => "Areas that may change",
        }
    }
}

/// Audit-layer categories, stages 8–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditCategory {
    Observation,
    Evaluation,
    Evolution,
}

impl AuditCategory {
    /// Fixed display order of the audit panel.
    pub const ALL: [AuditCategory; 3] = [
        AuditCategory::Observation,
        AuditCategory::Evaluation,
        AuditCategory::Evolution,
    ];

    pub fn from_stage(stage: i64) -> Option<Self> {
        match stage {
            8 => Some(Self::Observation),
            9 => Some(Self::Evaluation),
            10 => Some(Self::Evolution),
            _ => None,
        }
    }

    pub fn stage(self) -> u8 {
        match self {
            Self::Observation => 8,
            Self::Evaluation => 9,
            Self::Evolution => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Observation => "observation",
            Self::Evaluation => "evaluation",
            Self::Evolution => "evolution",
        }
    }
}

/// The layer a stage number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Decision(DecisionStage),
    Audit(AuditCategory),
}

impl Layer {
    /// `None` for anything outside 1–10; such events belong to no layer.
    pub fn of_stage(stage: i64) -> Option<Self> {
        DecisionStage::from_stage(stage)
            .map(Layer::Decision)
            .or_else(|| AuditCategory::from_stage(stage).map(Layer::Audit))
    }
}

/// Audit-layer events keyed by category, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditBuckets<'a> {
    pub observation: Vec<&'a EventRecord>,
    pub evaluation: Vec<&'a EventRecord>,
    pub evolution: Vec<&'a EventRecord>,
}

impl<'a> AuditBuckets<'a> {
    pub fn get(&self, category: AuditCategory) -> &[&'a EventRecord] {
        match category {
            AuditCategory::Observation => &self.observation,
            AuditCategory::Evaluation => &self.evaluation,
            AuditCategory::Evolution => &self.evolution,
        }
    }

    fn get_mut(&mut self, category: AuditCategory) -> &mut Vec<&'a EventRecord> {
        match category {
            AuditCategory::Observation => &mut self.observation,
            AuditCategory::Evaluation => &mut self.evaluation,
            AuditCategory::Evolution => &mut self.evolution,
        }
    }

    /// Buckets in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (AuditCategory, &[&'a EventRecord])> + '_ {
        AuditCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn len(&self) -> usize {
        self.observation.len() + self.evaluation.len() + self.evolution.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of classification. Holds references into the directive, never copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassifiedSet<'a> {
    /// Stage 1–7 events in input order.
    pub decisions: Vec<&'a EventRecord>,
    pub audit: AuditBuckets<'a>,
}

impl ClassifiedSet<'_> {
    pub fn len(&self) -> usize {
        self.decisions.len() + self.audit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify the directive's events.
///
/// A directive without `preview_directive.events` classifies as an empty day.
pub fn classify(directive: &DesignDirective) -> ClassifiedSet<'_> {
    if !directive.has_events_path() {
        warn!("no preview_directive.events found; rendering an empty day");
    }
    classify_events(directive.events())
}

/// Single stable pass over `events`.
///
/// Events whose stage is outside 1–10 (a missing stage reads as 0) are
/// dropped without surfacing an error.
pub fn classify_events(events: &[EventRecord]) -> ClassifiedSet<'_> {
    let mut classified = ClassifiedSet::default();
    for (index, event) in events.iter().enumerate() {
        match Layer::of_stage(event.stage()) {
            Some(Layer::Decision(_)) => classified.decisions.push(event),
            Some(Layer::Audit(category)) => classified.audit.get_mut(category).push(event),
            None => debug!(index, stage = event.stage(), "dropping event outside stages 1-10"),
        }
    }
    debug!(
        decisions = classified.decisions.len(),
        observation = classified.audit.observation.len(),
        evaluation = classified.audit.evaluation.len(),
        evolution = classified.audit.evolution.len(),
        dropped = events.len() - classified.len(),
        "classified events"
    );
    classified
}
