/// Layout toggles and document-level text for the rendered preview.
use serde::{Deserialize, Serialize};

/// Configuration for the generated document.
///
/// None of these change what the views contain, only how they are laid out
/// and which client-side conventions the page honours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Append the card-by-card decision timeline with its progression log.
    pub include_timeline: bool,
    /// Query parameter that opens the audit panel on load when set to `true`.
    pub dev_query_key: String,
    /// Product name shown in the document title and footer.
    pub document_title_suffix: String,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_timeline: false,
            dev_query_key: "dev".to_string(),
            document_title_suffix: "Launchrail Standard OS".to_string(),
            lang: "en".to_string(),
        }
    }
}
