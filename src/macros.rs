//! Macros for building event fields.
//!
//! # Examples
//!
//! ```
//! use template_log_formatter::prelude::*;
//! use template_log_formatter::fields;
//!
//! let event = LogEvent::new("info", "request served")
//!     .with_context(fields! { "path" => "/health", "status" => 200, "cached" => false });
//!
//! assert_eq!(event.fields.len(), 3);
//! ```

/// Build a [`LogContext`](crate::LogContext) from `key => value` pairs.
///
/// Values go through `Into<FieldValue>`, so strings, integers, booleans
/// and the unsupported kinds are all accepted.
///
/// # Examples
///
/// ```
/// use template_log_formatter::{fields, FieldValue};
///
/// let ctx = fields! { "user" => "alice", "count" => 3 };
/// assert_eq!(ctx.get("count"), Some(&FieldValue::Int(3)));
///
/// let empty = fields! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::LogContext::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut context = $crate::LogContext::new();
        $(context.add_field($key, $value);)+
        context
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::FieldValue;

    #[test]
    fn test_fields_macro() {
        let ctx = fields! {
            "host" => "srv1",
            "port" => 8080,
            "tls" => true,
        };

        assert_eq!(ctx.len(), 3);
        assert_eq!(ctx.get("host"), Some(&FieldValue::String("srv1".into())));
        assert_eq!(ctx.get("port"), Some(&FieldValue::Int(8080)));
        assert_eq!(ctx.get("tls"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_fields_macro_owned_keys() {
        let key = String::from("dynamic");
        let ctx = fields! { key => 1.5 };
        assert_eq!(ctx.get("dynamic"), Some(&FieldValue::Float(1.5)));
    }

    #[test]
    fn test_fields_macro_empty() {
        let ctx = fields! {};
        assert!(ctx.is_empty());
    }
}
