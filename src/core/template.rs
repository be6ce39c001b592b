//! Template rendering for log events
//!
//! A template is literal text with `%token%` placeholders. Rendering runs in
//! a fixed order over a single working buffer:
//!
//! 1. `%time%`, `%msg%` and `%lvl%` are substituted, first occurrence only.
//! 2. Each scalar field replaces the first `%key%` still present, or is
//!    appended as ` | key=value` when no such placeholder remains.
//! 3. The line is terminated with exactly one `\n`.
//!
//! Every step sees the output of the previous ones, so a built-in consumes
//! its token before a field with the same name is considered. A field named
//! `msg` therefore always ends up appended.

use super::formatter::Formatter;
use super::log_event::LogEvent;
use super::timestamp::{FormatterConfig, TimestampFormat};
use super::Result;

pub const TIME_TOKEN: &str = "%time%";
pub const MESSAGE_TOKEN: &str = "%msg%";
pub const LEVEL_TOKEN: &str = "%lvl%";

/// Render `event` with `config`, resolving defaults on every call
///
/// Prefer [`TemplateFormatter`] when formatting many events with the same
/// configuration.
///
/// Substituted text is inserted verbatim except at the very end of the
/// line: trailing `\n` characters there are collapsed into the single line
/// terminator, so a message `"a\n"` rendered through `"%msg%"` yields
/// `"a\n"`, not `"a\n\n"`.
///
/// # Examples
///
/// ```
/// use template_log_formatter::core::{render, FormatterConfig, LogEvent};
/// use chrono::{TimeZone, Utc};
///
/// let event = LogEvent::new("warn", "disk low")
///     .with_timestamp(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
///     .with_field("host", "srv1");
///
/// let line = render(&FormatterConfig::default(), &event);
/// assert_eq!(line, b"[WARN]: 2021-01-01T00:00:00Z - disk low | host=srv1\n");
/// ```
#[must_use]
pub fn render(config: &FormatterConfig, event: &LogEvent) -> Vec<u8> {
    let mut out = String::new();
    render_template(
        config.effective_template(),
        &config.effective_timestamp_format(),
        event,
        &mut out,
    );
    out.into_bytes()
}

fn render_template(
    template: &str,
    timestamp_format: &TimestampFormat,
    event: &LogEvent,
    out: &mut String,
) {
    out.clear();
    out.push_str(template);

    // The timestamp is always computed, even when the template omits it
    let timestamp = timestamp_format.format(&event.timestamp);
    replace_first(out, TIME_TOKEN, &timestamp);
    replace_first(out, MESSAGE_TOKEN, &event.message);
    replace_first(out, LEVEL_TOKEN, &event.level.to_uppercase());

    let mut token = String::new();
    for (key, value) in event.fields.iter() {
        let Some(scalar) = value.as_scalar() else {
            continue;
        };
        let text = scalar.as_text();

        token.clear();
        token.push('%');
        token.push_str(key);
        token.push('%');

        if !replace_first(out, &token, &text) {
            out.push_str(" | ");
            out.push_str(key);
            out.push('=');
            out.push_str(&text);
        }
    }

    out.truncate(out.trim_end_matches('\n').len());
    out.push('\n');
}

/// Splice `value` over the first occurrence of `token`, in place
fn replace_first(buf: &mut String, token: &str, value: &str) -> bool {
    match buf.find(token) {
        Some(start) => {
            buf.replace_range(start..start + token.len(), value);
            true
        }
        None => false,
    }
}

/// Formatter that renders events through a fixed template
///
/// Defaults are resolved once at construction. The formatter holds no
/// mutable state and can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use template_log_formatter::prelude::*;
///
/// let formatter = TemplateFormatter::new(&FormatterConfig::new().with_template("%lvl%: %msg%"));
/// let event = LogEvent::new("info", "login").with_field("user", "alice");
///
/// assert_eq!(formatter.render_string(&event), "INFO: login | user=alice\n");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateFormatter {
    template: String,
    timestamp_format: TimestampFormat,
}

impl TemplateFormatter {
    /// Create a formatter, replacing an unusable timestamp format with RFC 3339
    pub fn new(config: &FormatterConfig) -> Self {
        let mut timestamp_format = config.effective_timestamp_format();
        if let Err(err) = timestamp_format.validate() {
            tracing::warn!(error = %err, "falling back to RFC 3339 timestamps");
            timestamp_format = TimestampFormat::Rfc3339;
        }
        Self::from_parts(config, timestamp_format)
    }

    /// Create a formatter, rejecting an unusable timestamp format
    pub fn try_new(config: &FormatterConfig) -> Result<Self> {
        let timestamp_format = config.effective_timestamp_format();
        timestamp_format.validate()?;
        Ok(Self::from_parts(config, timestamp_format))
    }

    fn from_parts(config: &FormatterConfig, timestamp_format: TimestampFormat) -> Self {
        let template = config.effective_template().to_string();
        tracing::debug!(template = %template, ?timestamp_format, "template formatter created");
        Self {
            template,
            timestamp_format,
        }
    }

    /// Template in use
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Timestamp format in use
    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Render into `out`, replacing its previous contents
    pub fn render_into(&self, event: &LogEvent, out: &mut String) {
        render_template(&self.template, &self.timestamp_format, event, out);
    }

    /// Render to an owned string
    #[must_use]
    pub fn render_string(&self, event: &LogEvent) -> String {
        let mut out = String::with_capacity(self.template.len() + event.message.len() + 32);
        self.render_into(event, &mut out);
        out
    }
}

impl Default for TemplateFormatter {
    fn default() -> Self {
        Self::new(&FormatterConfig::default())
    }
}

impl Formatter for TemplateFormatter {
    fn format(&self, event: &LogEvent) -> Vec<u8> {
        self.render_string(event).into_bytes()
    }

    fn name(&self) -> &str {
        "template"
    }
}
