//! The developer/auditor panel over the hidden audit layer.

use preview_ir::types::EventRecord;
use serde::Serialize;

use crate::classify::{AuditBuckets, AuditCategory};

pub const DEFAULT_AUDIT_TITLE: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditItem<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub input: Option<&'a str>,
    pub output: Option<&'a str>,
    pub reasoning: Option<&'a str>,
}

impl<'a> AuditItem<'a> {
    fn from_event(event: &'a EventRecord) -> Self {
        Self {
            title: event.title.as_deref().unwrap_or(DEFAULT_AUDIT_TITLE),
            description: event.description.as_deref().unwrap_or(""),
            input: event.input.as_deref(),
            output: event.output.as_deref(),
            reasoning: event.reasoning.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditSection<'a> {
    pub category: AuditCategory,
    /// Empty means the panel shows a "no data recorded" placeholder.
    pub items: Vec<AuditItem<'a>>,
}

impl AuditSection<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditPanel<'a> {
    /// Always one section per category, in [`AuditCategory::ALL`] order.
    pub sections: Vec<AuditSection<'a>>,
}

impl<'a> AuditPanel<'a> {
    pub fn section(&self, category: AuditCategory) -> Option<&AuditSection<'a>> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Audit records across all sections.
    pub fn record_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

pub fn audit_panel<'a>(buckets: &AuditBuckets<'a>) -> AuditPanel<'a> {
    let sections = buckets
        .iter()
        .map(|(category, events)| AuditSection {
            category,
            items: events.iter().copied().map(AuditItem::from_event).collect(),
        })
        .collect();
    AuditPanel { sections }
}
