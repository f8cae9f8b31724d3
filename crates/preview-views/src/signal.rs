use preview_ir::types::EventRecord;
use serde::Serialize;

/// Number of decision events shown as signal cards.
pub const LEADING_SIGNAL_COUNT: usize = 4;
pub const DEFAULT_SIGNAL_ICON: &str = "📊";

/// Operator-facing severity of a decision event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Warning,
    Danger,
}

impl Severity {
    /// Safety trigger dominates human gate; the order of these checks is fixed.
    pub fn of(event: &EventRecord) -> Self {
        if event.safety_trigger() {
            Severity::Danger
        } else if event.human_gate() {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    /// Parse a `status` tag. Unknown tags have no severity.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "normal" => Some(Severity::Normal),
            "warning" => Some(Severity::Warning),
            "danger" => Some(Severity::Danger),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// A signal card: one of the first decision events of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadingSignal<'a> {
    pub severity: Severity,
    pub icon: &'a str,
    pub title: &'a str,
    pub value: String,
    /// Clamped to 0–100.
    pub progress: f64,
    pub description: &'a str,
}

impl<'a> LeadingSignal<'a> {
    fn from_event(event: &'a EventRecord) -> Self {
        Self {
            severity: Severity::of(event),
            icon: event.icon.as_deref().unwrap_or(DEFAULT_SIGNAL_ICON),
            title: event.title.as_deref().unwrap_or(""),
            value: event.value_text(),
            progress: event.progress.unwrap_or(0.0).clamp(0.0, 100.0),
            description: event.description.as_deref().unwrap_or(""),
        }
    }
}

/// The first [`LEADING_SIGNAL_COUNT`] decision events as signal cards.
pub fn leading_signals<'a>(decisions: &[&'a EventRecord]) -> Vec<LeadingSignal<'a>> {
    decisions
        .iter()
        .take(LEADING_SIGNAL_COUNT)
        .copied()
        .map(LeadingSignal::from_event)
        .collect()
}
