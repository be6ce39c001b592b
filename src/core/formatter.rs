//! Formatter trait for turning log events into output bytes

use super::log_event::LogEvent;

/// Pluggable formatting strategy invoked once per emitted event
///
/// Formatting cannot fail; write errors belong to whatever sink receives
/// the bytes.
pub trait Formatter: Send + Sync {
    fn format(&self, event: &LogEvent) -> Vec<u8>;
    fn name(&self) -> &str;
}
