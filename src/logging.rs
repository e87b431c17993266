//! Structured JSONL logging plus human-readable stderr output.
//!
//! This module provides dual-output logging for embedding applications and
//! tests:
//! - **JSONL to file** (~/.screen-stack/logs/screen-stack.jsonl) - structured,
//!   one JSON object per line
//! - **Pretty to stderr** - compact, human-readable
//!
//! Library code logs through `tracing` macros only; initializing a
//! subscriber is the embedding application's choice. Call [`init`] once at
//! startup and keep the returned guard alive for the duration of the
//! program.
//!
//! ```rust,ignore
//! let _guard = screen_stack::logging::init();
//! tracing::info!(tracker = "launcher", "Tracker started");
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system with the default log directory.
pub fn init() -> LoggingGuard {
    init_with_dir(default_log_dir())
}

/// Initialize the dual-output logging system, writing the JSONL file into
/// `log_dir`.
pub fn init_with_dir(log_dir: PathBuf) -> LoggingGuard {
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_dir.join("screen-stack.jsonl");

    // Open log file with append mode
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .unwrap_or_else(|e| {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            OpenOptions::new()
                .write(true)
                .open("/dev/null")
                .expect("Failed to open /dev/null")
        });

    // Non-blocking writer so lifecycle callbacks never stall on disk I/O
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);

    // Default to info, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSONL layer for file output
    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    // Pretty layer for stderr
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::info!(
        event_type = "lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Get the log directory path (~/.screen-stack/logs/)
fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".screen-stack").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("screen-stack-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    default_log_dir().join("screen-stack.jsonl")
}
