//! HTML rendering of report views.
//!
//! Purely presentational: everything shown comes from [`ReportViews`].

pub mod config;
pub mod escape;
pub mod sections;
pub mod template;
pub mod timeline;

use preview_views::ReportViews;
use tracing::debug;

pub use config::RenderOptions;

use crate::escape::{escape_html, js_string};
use crate::template::{fill, DOCUMENT, STYLES, TIMELINE_SCRIPT};

/// Render one self-contained HTML document.
pub fn render_document(views: &ReportViews<'_>, options: &RenderOptions) -> String {
    let lang = escape_html(&options.lang);
    let title_suffix = escape_html(&options.document_title_suffix);
    let system_name = escape_html(views.system_name);
    let version = escape_html(views.version);
    let status_message = escape_html(&views.status.message);
    let status_label = sections::status_label(&views.status, views.system_name);
    let one_thing = sections::one_thing(views.highlighted.as_ref());
    let signals = sections::signals(&views.signals);
    let history = sections::history(&views.history);
    let reasoning = sections::reasoning(&views.reasoning);
    let audit_panel = sections::audit_panel(&views.audit);
    let dev_query_key = js_string(&options.dev_query_key);
    let (timeline, timeline_script) = if options.include_timeline {
        (timeline::timeline(&views.timeline), TIMELINE_SCRIPT)
    } else {
        (String::new(), "")
    };

    let document = fill(
        DOCUMENT,
        &[
            ("__LANG__", lang.as_str()),
            ("__TITLE_SUFFIX__", title_suffix.as_str()),
            ("__STYLES__", STYLES),
            ("__SYSTEM_NAME__", system_name.as_str()),
            ("__VERSION__", version.as_str()),
            ("__STATUS_CLASS__", sections::status_class(&views.status)),
            ("__STATUS_MESSAGE__", status_message.as_str()),
            ("__STATUS_LABEL__", status_label.as_str()),
            ("__ONE_THING__", one_thing.as_str()),
            ("__SIGNALS__", signals.as_str()),
            ("__HISTORY__", history.as_str()),
            ("__REASONING__", reasoning.as_str()),
            ("__TIMELINE__", timeline.as_str()),
            ("__AUDIT_PANEL__", audit_panel.as_str()),
            ("__DEV_QUERY_KEY__", dev_query_key.as_str()),
            ("__TIMELINE_SCRIPT__", timeline_script),
        ],
    );
    debug!(
        bytes = document.len(),
        timeline = options.include_timeline,
        "rendered document"
    );
    document
}
