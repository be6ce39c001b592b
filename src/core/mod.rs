//! Core formatter types and traits

pub mod error;
pub mod formatter;
pub mod log_context;
pub mod log_event;
pub mod template;
pub mod timestamp;

pub use error::{FormatterError, Result};
pub use formatter::Formatter;
pub use log_context::{FieldValue, LogContext, ScalarValue};
pub use log_event::LogEvent;
pub use template::{render, TemplateFormatter, LEVEL_TOKEN, MESSAGE_TOKEN, TIME_TOKEN};
pub use timestamp::{FormatterConfig, TimestampFormat, DEFAULT_TEMPLATE};
