//! Log event structure

use super::log_context::{FieldValue, LogContext};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A single event handed to a formatter
///
/// The level is free-form text; formatters decide how to present it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub timestamp: DateTime<FixedOffset>,
    pub level: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "LogContext::is_empty")]
    pub fields: LogContext,
}

impl LogEvent {
    pub fn new(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().fixed_offset(),
            level: level.into(),
            message: message.into(),
            fields: LogContext::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<DateTime<FixedOffset>>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.fields = context;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_builder() {
        let ts = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let event = LogEvent::new("warn", "disk low")
            .with_timestamp(ts)
            .with_field("host", "srv1");

        assert_eq!(event.level, "warn");
        assert_eq!(event.message, "disk low");
        assert_eq!(event.timestamp, ts.fixed_offset());
        assert_eq!(event.fields.len(), 1);
    }

    #[test]
    fn test_with_context_replaces_fields() {
        let event = LogEvent::new("info", "msg")
            .with_field("old", 1)
            .with_context(LogContext::new().with_field("new", 2));

        assert!(event.fields.get("old").is_none());
        assert_eq!(event.fields.get("new"), Some(&FieldValue::Int(2)));
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        let event = LogEvent::new("info", "line one\nline two");
        assert_eq!(event.message, "line one\nline two");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let ts = offset.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        let event = LogEvent::new("error", "boom")
            .with_timestamp(ts)
            .with_field("code", 500);

        let json = serde_json::to_string(&event).expect("serialize");
        let back: LogEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }
}
