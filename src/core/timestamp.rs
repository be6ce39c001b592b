//! Timestamp formatting and formatter configuration
//!
//! Timestamps render as RFC 3339 unless the configuration names a custom
//! strftime-compatible format.

use super::error::{FormatterError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::sync::Arc;

/// Template used when the configured template is empty
///
/// Renders as `[INFO]: 2021-01-01T00:00:00Z - Log message`.
pub const DEFAULT_TEMPLATE: &str = "[%lvl%]: %time% - %msg%";

/// Resolved timestamp format
///
/// # Examples
///
/// ```
/// use template_log_formatter::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap().fixed_offset();
/// assert_eq!(TimestampFormat::Rfc3339.format(&ts), "2021-01-01T00:00:00Z");
///
/// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
/// assert_eq!(format.format(&ts), "01/Jan/2021:00:00:00 +0000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2021-01-01T00:00:00Z`
    ///
    /// UTC renders with a `Z` suffix, other offsets as `+02:00`.
    #[default]
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a timestamp according to this format
    ///
    /// A custom format chrono cannot render falls back to RFC 3339.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<FixedOffset>) -> String {
        match self {
            TimestampFormat::Rfc3339 => Self::rfc3339(datetime),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => Self::rfc3339(datetime),
                }
            }
        }
    }

    /// Check that this format can be rendered
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Rfc3339 => Ok(()),
            TimestampFormat::Custom(format_str) => {
                if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                    Err(FormatterError::timestamp_format(format_str))
                } else {
                    Ok(())
                }
            }
        }
    }

    fn rfc3339(datetime: &DateTime<FixedOffset>) -> String {
        datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl From<&str> for TimestampFormat {
    /// An empty string selects RFC 3339
    fn from(format_str: &str) -> Self {
        if format_str.is_empty() {
            TimestampFormat::Rfc3339
        } else {
            TimestampFormat::Custom(format_str.to_string())
        }
    }
}


/// Configuration for the template formatter
///
/// Empty strings select the defaults: [`DEFAULT_TEMPLATE`] and RFC 3339.
///
/// # Examples
///
/// ```
/// use template_log_formatter::core::FormatterConfig;
///
/// let config = FormatterConfig::new()
///     .with_template("%lvl% %msg%")
///     .with_timestamp_format("%H:%M:%S");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Output template with `%token%` placeholders
    pub template: String,
    /// strftime-compatible timestamp format
    pub timestamp_format: String,
}

impl FormatterConfig {
    /// Create a configuration that uses both defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output template
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Set the timestamp format
    #[must_use]
    pub fn with_timestamp_format(mut self, format_str: impl Into<String>) -> Self {
        self.timestamp_format = format_str.into();
        self
    }

    /// Template in effect after applying the default
    #[must_use]
    pub fn effective_template(&self) -> &str {
        if self.template.is_empty() {
            DEFAULT_TEMPLATE
        } else {
            &self.template
        }
    }

    /// Timestamp format in effect after applying the default
    #[must_use]
    pub fn effective_timestamp_format(&self) -> TimestampFormat {
        TimestampFormat::from(self.timestamp_format.as_str())
    }

    /// Check that the timestamp format can be rendered
    pub fn validate(&self) -> Result<()> {
        self.effective_timestamp_format().validate()
    }

    /// Wrap this config in an Arc for sharing across threads
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod formatter_config_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.effective_template(), DEFAULT_TEMPLATE);
        assert_eq!(config.effective_timestamp_format(), TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_builder_pattern() {
        let config = FormatterConfig::new()
            .with_template("%msg%")
            .with_timestamp_format("%Y");

        assert_eq!(config.effective_template(), "%msg%");
        assert_eq!(
            config.effective_timestamp_format(),
            TimestampFormat::Custom("%Y".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_bad_timestamp() {
        let config = FormatterConfig::new().with_timestamp_format("%Q");
        assert!(config.validate().is_err());
        assert!(FormatterConfig::new().validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: FormatterConfig =
            serde_json::from_str(r#"{"template":"%lvl% %msg%"}"#).expect("deserialize");
        assert_eq!(config.template, "%lvl% %msg%");
        assert_eq!(config.timestamp_format, "");
    }

    #[test]
    fn test_shared_config() {
        let config = FormatterConfig::new().with_template("%msg%").shared();
        let config2 = Arc::clone(&config);
        assert_eq!(config.template, config2.template);
    }
}
