//! Hot reload through the file watcher.
//!
//! Kept in its own test binary because a reload swaps the process-wide
//! default backend.

use std::fs;
use std::thread;
use std::time::{Duration, Instant};

use ctxlog::config::ConfigWatcher;
use ctxlog::Level;

const DEADLINE: Duration = Duration::from_secs(10);

#[test]
fn test_watcher_applies_and_reports_changed_config() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("ctxlog_watch_{}.toml", std::process::id()));
    let log_path = dir.join(format!("ctxlog_watch_{}.log", std::process::id()));
    let _ = fs::remove_file(&log_path);
    let write_config = |level: &str| {
        fs::write(
            &path,
            format!(
                "level = \"{}\"\noutput = \"file\"\nfile_path = {:?}\n",
                level,
                log_path.to_string_lossy()
            ),
        )
        .unwrap();
    };
    write_config("warn");

    let (watcher, rx) = ConfigWatcher::new(&path);
    let _guard = watcher.run().unwrap();

    thread::sleep(Duration::from_millis(200));
    write_config("error");

    // A single write may be reported more than once, possibly mid-write.
    let started = Instant::now();
    let applied = loop {
        let remaining = DEADLINE.checked_sub(started.elapsed()).unwrap_or_default();
        match rx.recv_timeout(remaining) {
            Ok(config) if config.level == Level::Error => break config,
            Ok(_) => continue,
            Err(e) => panic!("no reload reported within {:?}: {}", DEADLINE, e),
        }
    };
    assert_eq!(applied.file_path.as_deref(), Some(log_path.to_string_lossy().as_ref()));

    ctxlog::warn("dropped");
    ctxlog::error("swapped");
    ctxlog::backend::default_backend().flush();

    let started = Instant::now();
    let contents = loop {
        let contents = fs::read_to_string(&log_path).unwrap_or_default();
        if contents.contains("swapped") || started.elapsed() > DEADLINE {
            break contents;
        }
        thread::sleep(Duration::from_millis(50));
        ctxlog::backend::default_backend().flush();
    };
    assert!(contents.contains("level=error msg=swapped\n"), "log file: {:?}", contents);
    assert!(!contents.contains("dropped"));

    fs::remove_file(&path).unwrap_or_default();
    fs::remove_file(&log_path).unwrap_or_default();
}
