//! # Template Log Formatter
//!
//! Renders structured log events into single text lines driven by a
//! template string.
//!
//! ## Features
//!
//! - **Built-in tokens**: `%time%`, `%msg%` and `%lvl%`
//! - **Custom fields**: `%key%` placeholders, or trailing ` | key=value` pairs
//! - **Stateless**: one formatter can be shared across any number of threads
//! - **tracing integration**: plugs into `tracing_subscriber::fmt` (feature `subscriber`)
//!
//! ## Example
//!
//! ```
//! use template_log_formatter::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! let event = LogEvent::new("warn", "disk low")
//!     .with_timestamp(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
//!     .with_field("host", "srv1");
//!
//! let formatter = TemplateFormatter::default();
//! assert_eq!(
//!     formatter.render_string(&event),
//!     "[WARN]: 2021-01-01T00:00:00Z - disk low | host=srv1\n"
//! );
//! ```

pub mod core;
pub mod macros;

#[cfg(feature = "subscriber")]
pub mod subscriber;

pub mod prelude {
    pub use crate::core::{
        render, FieldValue, Formatter, FormatterConfig, FormatterError, LogContext, LogEvent,
        Result, ScalarValue, TemplateFormatter, TimestampFormat, DEFAULT_TEMPLATE,
    };
}

pub use crate::core::{
    render, FieldValue, Formatter, FormatterConfig, FormatterError, LogContext, LogEvent, Result,
    ScalarValue, TemplateFormatter, TimestampFormat, DEFAULT_TEMPLATE,
};
