//! Tests for rendering `tracing` events through `tracing_subscriber::fmt`

#![cfg(feature = "subscriber")]

use std::io;
use std::sync::{Arc, Mutex};
use template_log_formatter::prelude::*;

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("capture lock").clone()).expect("utf-8 output")
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(template: &str, f: F) -> String {
    let writer = CaptureWriter::default();
    let make_writer = writer.clone();
    let formatter = TemplateFormatter::new(&FormatterConfig::new().with_template(template));

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || make_writer.clone())
        .event_format(formatter)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

#[test]
fn test_tracing_event_rendering() {
    let out = capture("%lvl% %msg%", || {
        tracing::info!(user = "alice", "login");
    });

    assert_eq!(out, "INFO login | user=alice\n");
}

#[test]
fn test_tracing_field_kinds() {
    let out = capture("%msg% %count% %ok% %name% %big%", || {
        tracing::warn!(
            count = 3,
            ok = true,
            name = %"display",
            big = u64::MAX,
            ratio = 0.5,
            "kinds"
        );
    });

    assert_eq!(out, "kinds 3 true display %big%\n");
}

#[test]
fn test_tracing_wide_integers() {
    let out = capture("%msg% %small% %negative% %huge% %unsigned%", || {
        tracing::info!(
            small = 7i128,
            negative = -7i128,
            huge = i128::MAX,
            unsigned = u128::MAX,
            "wide"
        );
    });

    // Values outside i64 are carried as floats and never rendered
    assert_eq!(out, "wide 7 -7 %huge% %unsigned%\n");
}

#[test]
fn test_tracing_debug_values_become_strings() {
    let out = capture("%msg% %tags%", || {
        let tags = vec!["a", "b"];
        tracing::error!(tags = ?tags, "tagged");
    });

    assert_eq!(out, "tagged [\"a\", \"b\"]\n");
}

#[test]
fn test_tracing_one_line_per_event() {
    let out = capture("%lvl%: %msg%", || {
        tracing::debug!("first");
        tracing::trace!(step = 2, "second");
    });

    assert_eq!(out, "DEBUG: first\nTRACE: second | step=2\n");
}

#[test]
fn test_tracing_default_template_has_timestamp() {
    let out = capture("", || {
        tracing::info!("started");
    });

    assert!(out.starts_with("[INFO]: "));
    assert!(out.ends_with(" - started\n"));
}
