//! Markup fragments, one builder per view.

use std::fmt::Write;

use preview_views::audit::{AuditItem, AuditPanel, AuditSection};
use preview_views::classify::{AuditCategory, DecisionStage};
use preview_views::history::HistoryEntry;
use preview_views::reasoning::ReasoningSection;
use preview_views::signal::{LeadingSignal, Severity};
use preview_views::status::{GlobalStatus, HighlightedAction, StatusLevel};

use crate::escape::escape_html;

pub fn status_class(status: &GlobalStatus) -> &'static str {
    match status.level {
        StatusLevel::Ok => "ok",
        StatusLevel::Warning => "warning",
    }
}

pub fn status_label(status: &GlobalStatus, system_name: &str) -> String {
    match status.level {
        StatusLevel::Ok => format!("{} operating normally", escape_html(system_name)),
        StatusLevel::Warning => format!("Attention · {}", status.warning_count),
    }
}

fn signal_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal => "Normal",
        Severity::Warning => "Attention",
        Severity::Danger => "Risk",
    }
}

fn history_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal => "Done",
        Severity::Warning => "Attention",
        Severity::Danger => "Risk",
    }
}

/// Accent colour of a decision stage's reasoning section.
fn stage_color(stage: DecisionStage) -> &'static str {
    match stage {
        DecisionStage::Reasoning | DecisionStage::Constraint => "#3B82F6",
        DecisionStage::Safety => "#F59E0B",
        DecisionStage::Memory => "#10B981",
        DecisionStage::Audit => "#6B7280",
        DecisionStage::Routing => "#8B5CF6",
        DecisionStage::Evolution => "#6366F1",
    }
}

fn audit_heading(category: AuditCategory) -> &'static str {
    match category {
        AuditCategory::Observation => "📊 Observation (Stage 8)",
        AuditCategory::Evaluation => "📈 Evaluation (Stage 9)",
        AuditCategory::Evolution => "🔄 Evolution (Stage 10)",
    }
}

pub fn one_thing(action: Option<&HighlightedAction<'_>>) -> String {
    let Some(action) = action else {
        return String::new();
    };
    format!(
        r#"      <section class="card one-thing">
        <div class="one-thing-main">
          <div class="one-thing-icon">{icon}</div>
          <div>
            <p class="eyebrow">Today's one thing</p>
            <h3>{title}</h3>
          </div>
        </div>
        <button type="button">{label} →</button>
      </section>
"#,
        icon = escape_html(action.icon),
        title = escape_html(action.title),
        label = escape_html(action.action_label),
    )
}

pub fn signals(signals: &[LeadingSignal<'_>]) -> String {
    let mut out = String::new();
    for signal in signals {
        let _ = write!(
            out,
            r#"        <div class="card signal sev-{severity}">
          <div class="signal-head">
            <div class="signal-icon">{icon}</div>
            <span class="signal-label">{label}</span>
          </div>
          <h4>{title}</h4>
          <div class="signal-value">{value}</div>
          <div class="progress"><div class="progress-fill" style="width: {progress}%"></div></div>
          <p class="signal-description">{description}</p>
        </div>
"#,
            severity = signal.severity.as_str(),
            icon = escape_html(signal.icon),
            label = signal_label(signal.severity),
            title = escape_html(signal.title),
            value = escape_html(&signal.value),
            progress = signal.progress,
            description = escape_html(signal.description),
        );
    }
    out
}

pub fn history(entries: &[HistoryEntry<'_>]) -> String {
    let mut out = String::new();
    for entry in entries {
        // Unrecognised tags keep their own text on the normal colour.
        let (severity, label) = match entry.severity() {
            Some(severity) => (severity, history_label(severity).to_string()),
            None => (Severity::Normal, escape_html(entry.status)),
        };
        let _ = write!(
            out,
            r#"            <div class="history-row">
              <div><span class="history-time">{time}</span> <span class="history-title">{title}</span></div>
              <span class="pill sev-{severity}">{label}</span>
            </div>
"#,
            time = escape_html(entry.time),
            title = escape_html(entry.title),
            severity = severity.as_str(),
        );
    }
    out
}

pub fn reasoning(sections: &[ReasoningSection<'_>]) -> String {
    let mut out = String::new();
    for section in sections {
        let items: String = section
            .items
            .iter()
            .map(|item| format!("<li>• {}</li>", escape_html(item)))
            .collect();
        let _ = write!(
            out,
            r#"            <div class="reasoning-section" data-stage="{stage}">
              <h4><span class="stage-dot" style="background: {color}"></span>{heading}</h4>
              <ul>{items}</ul>
            </div>
"#,
            stage = section.stage.number(),
            color = stage_color(section.stage),
            heading = escape_html(section.heading()),
        );
    }
    out
}

fn audit_item(item: &AuditItem<'_>, stage: u8) -> String {
    let mut meta = String::new();
    for (label, text) in [
        ("Input", item.input),
        ("Output", item.output),
        ("Reasoning", item.reasoning),
    ] {
        if let Some(text) = text {
            let _ = write!(meta, "<div><strong>{label}:</strong> {}</div>", escape_html(text));
        }
    }
    format!(
        r#"          <div class="audit-item">
            <div class="audit-item-header"><strong>{title}</strong><span class="audit-stage-badge">Stage {stage}</span></div>
            <p class="audit-description">{description}</p>
            <div class="audit-meta">{meta}</div>
          </div>
"#,
        title = escape_html(item.title),
        description = escape_html(item.description),
    )
}

fn audit_section(section: &AuditSection<'_>) -> String {
    let heading = audit_heading(section.category);
    let category = section.category.name();
    if section.is_empty() {
        return format!(
            r#"        <div class="audit-section" data-category="{category}"><h4>{heading}</h4><p class="audit-empty">No data recorded</p></div>
"#
        );
    }
    let stage = section.category.stage();
    let items: String = section.items.iter().map(|i| audit_item(i, stage)).collect();
    format!(
        r#"        <div class="audit-section" data-category="{category}">
          <h4>{heading}</h4>
{items}        </div>
"#
    )
}

pub fn audit_panel(panel: &AuditPanel<'_>) -> String {
    let sections: String = panel.sections.iter().map(audit_section).collect();
    format!(
        r#"  <div class="audit-panel" id="auditPanel">
    <div class="audit-header">
      <h3>🧠 Audit Layer (Developer / Auditor Mode)</h3>
      <p class="audit-disclaimer">This panel shows system-level observation and evaluation. It does not affect operator decisions.</p>
    </div>
    <div class="audit-body">
{sections}    </div>
  </div>
"#
    )
}
