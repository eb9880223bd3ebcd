//! Fatal records end the process; checked across a process boundary.

use std::process::{Command, Output};

fn run_ctxlog(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ctxlog"))
        .args(args)
        .env_remove("CTXLOG_LEVEL")
        .env_remove("CTXLOG_OUTPUT")
        .output()
        .expect("failed to spawn ctxlog")
}

#[test]
fn test_non_fatal_record_continues() {
    let output = run_ctxlog(&["-c", "k1=v1", "-f", "k2=v2", "--level", "warn", "careful"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "done\n");
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "level=warning msg=careful k1=v1 k2=v2\n"
    );
}

#[test]
fn test_fatal_record_is_written_then_process_exits() {
    let output = run_ctxlog(&["-c", "k1=v1", "--error", "boom", "--level", "fatal", "giving up"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "code after fatal must not run");
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "level=fatal msg=\"giving up\" error=boom k1=v1\n"
    );
}

#[test]
fn test_fatal_ignores_min_level() {
    let output = run_ctxlog(&["--min-level", "error", "--stdout", "--level", "fatal", "x"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "level=fatal msg=x\n");
}

#[test]
fn test_request_id_is_attached() {
    let output = run_ctxlog(&["--request-id", "--stdout", "hello"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    let record = lines.next().unwrap();
    assert!(record.starts_with("level=info msg=hello request_id="));
    assert_eq!(record.len(), "level=info msg=hello request_id=".len() + 36);
    assert_eq!(lines.next(), Some("done"));
}

#[test]
fn test_every_fatal_form_exits_after_emitting() {
    let cases = [
        (false, "plain", "level=fatal msg=bye k2=v2\n"),
        (false, "f", "level=fatal msg=bye k2=v2\n"),
        (false, "c", "level=fatal msg=bye k1=v1 k2=v2\n"),
        (false, "fc", "level=fatal msg=bye k1=v1 k2=v2\n"),
        (true, "plain", "level=fatal msg=bye\n"),
        (true, "f", "level=fatal msg=bye\n"),
        (true, "c", "level=fatal msg=bye k1=v1\n"),
        (true, "fc", "level=fatal msg=bye k1=v1\n"),
    ];

    for (ambient, form, expected) in cases {
        let mut args = vec!["-c", "k1=v1", "-f", "k2=v2", "--level", "fatal", "--form", form];
        if ambient {
            args.push("--ambient");
        }
        args.push("bye");

        let output = run_ctxlog(&args);
        let label = format!("ambient={} form={}", ambient, form);
        assert_eq!(output.status.code(), Some(1), "{}", label);
        assert!(output.stdout.is_empty(), "{}: code after fatal ran", label);
        assert_eq!(String::from_utf8_lossy(&output.stderr), expected, "{}", label);
    }
}

#[test]
fn test_non_fatal_forms_respect_context() {
    let plain = run_ctxlog(&["-c", "k1=v1", "--form", "plain", "--ambient", "hi"]);
    assert!(plain.status.success());
    assert_eq!(String::from_utf8_lossy(&plain.stderr), "level=info msg=hi\n");

    let with_ctx = run_ctxlog(&["-c", "k1=v1", "--form", "fc", "--ambient", "hi"]);
    assert_eq!(String::from_utf8_lossy(&with_ctx.stderr), "level=info msg=hi k1=v1\n");
    assert_eq!(String::from_utf8_lossy(&with_ctx.stdout), "done\n");
}
