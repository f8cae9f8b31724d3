use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display name used when the directive has no `system_name`.
pub const DEFAULT_SYSTEM_NAME: &str = "JJO System";
/// Version string used when the directive has no `version`.
pub const DEFAULT_VERSION: &str = "1.0";
/// Event type assumed when a record carries no `type` tag.
pub const DEFAULT_EVENT_TYPE: &str = "normal";

/// Top-level design directive: system metadata plus the day's events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignDirective {
    pub system_name: String,
    pub version: String,
    /// Events from `preview_directive.events`, in file order.
    ///
    /// `None` when that path is missing or does not hold an array. Consumers
    /// treat it as an empty day rather than an error.
    pub events: Option<Vec<EventRecord>>,
}

impl DesignDirective {
    /// Events in file order, empty when the events path was absent.
    pub fn events(&self) -> &[EventRecord] {
        self.events.as_deref().unwrap_or(&[])
    }

    pub fn has_events_path(&self) -> bool {
        self.events.is_some()
    }
}

// ── Event records ────────────────────────────────────────────────────

/// One entry of `preview_directive.events`.
///
/// Every field is optional in the file. A JSON `null` reads the same as a
/// missing key, and a value of the wrong JSON type never fails the record:
/// display text keeps the value's JSON text, numbers accept numeric strings,
/// flags follow truthiness and a non-integral stage reads as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Layer discriminator: 1–7 decision, 8–10 audit. Missing reads as 0.
    #[serde(default, deserialize_with = "lenient::stage")]
    pub stage: Option<i64>,
    #[serde(default, rename = "type", deserialize_with = "lenient::text")]
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    /// Headline figure of a signal card; a string or a number in practice.
    #[serde(default)]
    pub value: Option<Value>,
    /// Percentage, nominally 0–100.
    #[serde(default, deserialize_with = "lenient::number")]
    pub progress: Option<f64>,
    /// Wall-clock label, `HH:MM`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub time: Option<String>,
    /// Free-form status tag; `normal`, `warning` and `danger` are recognised.
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub human_gate: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub safety_trigger: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub action_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub input: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub output: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reasoning: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub constraint: Option<String>,
}

impl EventRecord {
    pub fn stage(&self) -> i64 {
        self.stage.unwrap_or(0)
    }

    pub fn event_type(&self) -> &str {
        self.event_type.as_deref().unwrap_or(DEFAULT_EVENT_TYPE)
    }

    pub fn is_action(&self) -> bool {
        self.event_type.as_deref() == Some("action")
    }

    pub fn human_gate(&self) -> bool {
        self.human_gate.unwrap_or(false)
    }

    pub fn safety_trigger(&self) -> bool {
        self.safety_trigger.unwrap_or(false)
    }

    /// True when the event tripped a safety condition or waits on a human.
    pub fn needs_attention(&self) -> bool {
        self.safety_trigger() || self.human_gate()
    }

    /// `value` as display text: strings verbatim, anything else as JSON.
    pub fn value_text(&self) -> String {
        match &self.value {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Field readers that degrade instead of rejecting the record.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Strings verbatim, other non-null values as their JSON text.
    pub fn text<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        })
    }

    /// Any integral JSON number, including `3.0`.
    pub fn stage<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            _ => None,
        })
    }

    /// JSON truthiness: `false`, `0`, `""` and `null` are false.
    pub fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<Option<bool>, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::Null => None,
            Value::Bool(b) => Some(b),
            Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0)),
            Value::String(s) => Some(!s.is_empty()),
            Value::Array(_) | Value::Object(_) => Some(true),
        })
    }
}
