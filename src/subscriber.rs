//! `tracing-subscriber` integration
//!
//! [`TemplateFormatter`] implements [`FormatEvent`], so it can replace the
//! default line format of a `tracing_subscriber::fmt` subscriber:
//!
//! ```no_run
//! use template_log_formatter::{FormatterConfig, TemplateFormatter};
//!
//! let config = FormatterConfig::new().with_template("%time% %lvl% %msg%");
//! tracing_subscriber::fmt()
//!     .event_format(TemplateFormatter::new(&config))
//!     .init();
//!
//! tracing::info!(user = "alice", "login");
//! // 2021-01-01T00:00:00Z INFO login | user=alice
//! ```
//!
//! Field kinds map as follows: strings, signed integers and booleans keep
//! their kind; unsigned integers become integers when they fit `i64`;
//! floats are carried but never rendered; anything recorded through `Debug`
//! or `Display` (`?value`, `%value`) becomes a string.

use crate::core::{FieldValue, LogContext, LogEvent, TemplateFormatter};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

const MESSAGE_FIELD: &str = "message";

impl<S, N> FormatEvent<S, N> for TemplateFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let log_event = event_from_tracing(event);
        writer.write_str(&self.render_string(&log_event))
    }
}

/// Convert a `tracing` event into a [`LogEvent`] stamped with the current time
pub fn event_from_tracing(event: &Event<'_>) -> LogEvent {
    let mut visitor = FieldVisitor::default();
    event.record(&mut visitor);

    LogEvent::new(
        event.metadata().level().to_string(),
        visitor.message.unwrap_or_default(),
    )
    .with_context(visitor.fields)
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: LogContext,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: impl Into<FieldValue>) {
        self.fields.add_field(field.name(), value);
    }

    fn insert_wide(&mut self, field: &Field, value: Option<i64>, lossy: f64) {
        match value {
            Some(i) => self.insert(field, i),
            None => self.insert(field, lossy),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == MESSAGE_FIELD {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert_wide(field, i64::try_from(value).ok(), value as f64);
    }

    fn record_i128(&mut self, field: &Field, value: i128) {
        self.insert_wide(field, i64::try_from(value).ok(), value as f64);
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        self.insert_wide(field, i64::try_from(value).ok(), value as f64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == MESSAGE_FIELD {
            self.message = Some(format!("{:?}", value));
        } else {
            self.insert(field, format!("{:?}", value));
        }
    }
}
