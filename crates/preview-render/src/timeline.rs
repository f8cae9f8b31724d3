//! Card-by-card decision timeline with a client-side progression log.

use std::fmt::Write;

use preview_views::signal::Severity;
use preview_views::timeline::TimelineCard;

use crate::escape::escape_html;

fn card(card: &TimelineCard<'_>) -> String {
    let (card_class, badge, button) = match card.severity {
        Severity::Danger => (
            "event-card safety-event",
            r#"<span class="badge badge-danger">🛑 SAFETY</span>"#,
            "⚠️ Proceed with Caution",
        ),
        Severity::Warning => (
            "event-card human-gate",
            r#"<span class="badge badge-warning">👤 Human Gate</span>"#,
            "▶️ Execute Event",
        ),
        Severity::Normal => ("event-card", "", "▶️ Execute Event"),
    };

    let mut meta = format!(
        r#"<span class="meta-item"><strong>Type:</strong> {}</span>"#,
        escape_html(card.event_type)
    );
    for (label, text) in [
        ("Input", card.input),
        ("Output", card.output),
        ("Reasoning", card.reasoning),
        ("Constraint", card.constraint),
    ] {
        if let Some(text) = text {
            let _ = write!(
                meta,
                r#"<span class="meta-item"><strong>{label}:</strong> {}</span>"#,
                escape_html(text)
            );
        }
    }

    format!(
        r#"        <article class="card {card_class}" data-index="{index}" data-type="{event_type}">
          <div class="card-header">
            <h3><span class="event-number">#{number}</span><span class="event-title">{title}</span></h3>
            <div class="badges"><span class="badge badge-stage">Stage {stage}</span>{badge}</div>
          </div>
          <p class="description">{description}</p>
          <div class="event-meta">{meta}</div>
          <button class="btn" type="button" onclick="processEvent({index})">{button}</button>
        </article>
"#,
        index = card.index,
        number = card.index + 1,
        event_type = escape_html(card.event_type),
        title = escape_html(card.title),
        stage = card.stage.number(),
        description = escape_html(card.description),
    )
}

pub fn timeline(cards: &[TimelineCard<'_>]) -> String {
    let cards: String = cards.iter().map(card).collect();
    format!(
        r#"      <section class="timeline">
        <h3>🗂 Decision timeline</h3>
{cards}        <ol class="progress-log" id="progressLog"></ol>
      </section>
"#
    )
}
