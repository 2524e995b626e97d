mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::TimeZone;
use common::SharedBuf;
use tablog::{Attr, Logger, Options, TabHandler, Value, attrs};

fn logger_with(buf: &SharedBuf, opts: Options) -> Logger {
    Logger::new(TabHandler::new(buf.clone(), opts.time_format("")))
}

#[test]
fn scalar_kinds_render_unquoted_except_strings() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    logger.info(
        "kinds",
        attrs![
            "s" => "text",
            "yes" => true,
            "no" => false,
            "neg" => -42i64,
            "big" => 18_446_744_073_709_551_615u64,
            "pi" => 3.14,
        ],
    );

    assert_eq!(
        buf.contents(),
        "INFO\tkinds s=\"text\" yes=true no=false neg=-42 big=18446744073709551615 pi=3.14\n"
    );
}

#[test]
fn durations_render_in_canonical_compact_form() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    logger.info(
        "timing",
        attrs![
            "elapsed" => Duration::from_secs(90),
            "poll" => Duration::from_millis(90),
            "half" => Duration::from_millis(1_500),
        ],
    );

    assert_eq!(
        buf.contents(),
        "INFO\ttiming elapsed=1m30s poll=90ms half=1.5s\n"
    );
}

#[test]
fn time_attributes_use_the_time_attribute_format() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new().time_attr_in_utc(true));

    let at = chrono::Utc
        .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
        .unwrap();
    logger.info("when", attrs!["at" => at]);

    assert_eq!(
        buf.contents(),
        "INFO\twhen at=2024-01-15T10:30:00.000+00:00\n"
    );
}

#[test]
fn time_attribute_format_is_independent_of_timestamp_format() {
    let buf = SharedBuf::new();
    let logger = logger_with(
        &buf,
        Options::new()
            .time_attr_format("%H:%M:%S")
            .time_attr_in_utc(true),
    );

    let at = chrono::Utc
        .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
        .unwrap();
    logger.info("when", attrs!["at" => at]);

    assert_eq!(buf.contents(), "INFO\twhen at=10:30:00\n");
}

#[test]
fn display_catch_all_renders_unquoted() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    let ip = std::net::Ipv4Addr::new(127, 0, 0, 1);
    logger.info("conn", vec![Attr::new("peer", Value::display(ip))]);

    assert_eq!(buf.contents(), "INFO\tconn peer=127.0.0.1\n");
}

#[test]
fn lazy_values_resolve_at_render_time() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    let value = Value::lazy(|| Value::I64(7));
    logger.info("deferred", vec![Attr::new("computed", value)]);

    assert_eq!(buf.contents(), "INFO\tdeferred computed=7\n");
}

#[test]
fn lazy_values_resolve_exactly_once_per_record() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let value = Value::lazy(move || {
        counted.fetch_add(1, Ordering::SeqCst);
        Value::I64(7)
    });

    logger.info("deferred", vec![Attr::new("computed", value)]);

    assert_eq!(buf.contents(), "INFO\tdeferred computed=7\n");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn noop_sentinel_attribute_renders_nothing() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    logger.info("msg", vec![Attr::new("", "")]);

    assert_eq!(buf.contents(), "INFO\tmsg\n");
}

#[test]
fn nested_group_values_extend_the_dotted_prefix() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    let db = Attr::group(
        "db",
        vec![
            Attr::new("host", "localhost"),
            Attr::group("conn", vec![Attr::new("retries", 3)]),
        ],
    );
    logger.info("ready", vec![db]);

    assert_eq!(
        buf.contents(),
        "INFO\tready  db.host=\"localhost\"  db.conn.retries=3\n"
    );
}

#[test]
fn group_values_separate_before_their_children() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    logger.info("msg", vec![Attr::group("g", vec![Attr::new("a", 1)])]);

    // The group's own separator plus the child's.
    assert_eq!(buf.contents(), "INFO\tmsg  g.a=1\n");
}

#[test]
fn keyless_group_values_inline_their_children() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    let inline = Attr::group("", vec![Attr::new("a", 1), Attr::new("b", 2)]);
    logger.info("msg", vec![inline]);

    assert_eq!(buf.contents(), "INFO\tmsg  a=1 b=2\n");
}

#[test]
fn empty_group_values_contribute_nothing() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    logger.info("msg", vec![Attr::group("empty", vec![])]);

    assert_eq!(buf.contents(), "INFO\tmsg\n");
}

#[test]
fn group_prefix_applies_inside_nested_group_values() {
    let buf = SharedBuf::new();
    let logger = logger_with(&buf, Options::new());

    logger
        .with_group("req")
        .info("msg", vec![Attr::group("hdr", vec![Attr::new("len", 10)])]);

    assert_eq!(buf.contents(), "INFO\tmsg  req.hdr.len=10\n");
}
