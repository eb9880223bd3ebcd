//! End-to-end behaviour of the facade over the logfmt backend.

use std::io;

use ctxlog::{context, fields, Context};

mod common;

#[test]
fn test_context_and_handle_scenario() {
    let (log, sink) = common::memory_logger();

    let ctx = context::with_fields(&Context::background(), &fields! { "k1" => "v1" });
    log.with_fields(&fields! { "k2" => "v2" }).info_c(&ctx, "info");

    log.with_field("k3", "v3").warnf_c(&ctx, format_args!("warn{}", 1));

    log.with_error(&io::Error::new(io::ErrorKind::Other, "err")).error("msg");

    let expected = "level=info msg=info k1=v1 k2=v2\n\
                    level=warning msg=warn1 k1=v1 k3=v3\n\
                    level=error msg=msg error=err\n";
    assert_eq!(sink.contents(), expected);
}

#[test]
fn test_sibling_contexts_do_not_observe_each_other() {
    let (log, sink) = common::memory_logger();

    let ctx0 = context::with_field(&Context::background(), "base", "b");
    let ctx1 = context::with_field(&ctx0, "a", "1");
    let ctx2 = context::with_field(&ctx0, "a", "2");

    log.info_c(&ctx1, "one");
    log.info_c(&ctx2, "two");
    log.info_c(&ctx0, "zero");

    assert_eq!(
        sink.lines(),
        vec![
            "level=info msg=one a=1 base=b",
            "level=info msg=two a=2 base=b",
            "level=info msg=zero base=b",
        ]
    );
}

#[test]
fn test_handle_derivations_are_independent() {
    let (h0, sink) = common::memory_logger();
    let h1 = h0.with_field("x", "1");
    let h2 = h0.with_field("x", "2");

    h2.info("two");
    h0.info("zero");
    h1.info("one");

    assert_eq!(
        sink.lines(),
        vec!["level=info msg=two x=2", "level=info msg=zero", "level=info msg=one x=1"]
    );
}

#[test]
fn test_hybrid_precedence() {
    let (log, sink) = common::memory_logger();
    let ctx = context::with_field(&Context::background(), "k1", "v1");

    log.with_field("k2", "v2").info_c(&ctx, "both");

    let ctx = context::with_field(&ctx, "same", "from-context");
    log.with_field("same", "from-handle").info_c(&ctx, "conflict");

    assert_eq!(
        sink.lines(),
        vec![
            "level=info msg=both k1=v1 k2=v2",
            "level=info msg=conflict k1=v1 same=from-handle",
        ]
    );
}

#[test]
fn test_ambient_and_handle_styles_render_identically() {
    let (log, sink) = common::memory_logger();
    let ctx = context::with_fields(&Context::background(), &fields! { "user" => "alice", "n" => 3 });

    // context style
    log.debugf_c(&ctx, format_args!("step {}", 1));
    // explicit handle style carrying the same fields
    ctxlog::Logger::from_context(&ctx)
        .with_backend(common::memory_backend(&sink))
        .debugf(format_args!("step {}", 1));

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
    assert_eq!(lines[0], "level=debug msg=\"step 1\" n=3 user=alice");
}

#[test]
fn test_plain_form_ignores_context() {
    let (log, sink) = common::memory_logger();
    let _ctx = context::with_field(&Context::background(), "k1", "v1");

    log.error("no fields");
    assert_eq!(sink.lines(), vec!["level=error msg=\"no fields\""]);
}

#[test]
fn test_repeated_key_in_context_chain_keeps_latest() {
    let (log, sink) = common::memory_logger();
    let ctx = context::with_field(&Context::background(), "k", "1");
    let ctx = context::with_fields(&ctx, &fields! { "k" => "2" });

    log.info_c(&ctx, "latest");
    assert_eq!(sink.lines(), vec!["level=info msg=latest k=2"]);
}
