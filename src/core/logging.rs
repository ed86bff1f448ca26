//! Logging setup.
//!
//! Application code logs through the `log` facade; those records are
//! bridged into `tracing` and written as JSON lines to a daily rolling file
//! under the user data directory. Nothing is written to stdout because the
//! TUI owns the terminal. Previous days' files are gzip-compressed in the
//! background.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

/// Rolling log file prefix; the appender adds `.YYYY-MM-DD`.
pub const LOG_FILE_PREFIX: &str = "employee-directory.log";

/// Directory the log files are written to.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(crate::NAME).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize file logging for TUI mode.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the
/// application so buffered lines are flushed on shutdown.
pub fn init_tui() -> WorkerGuard {
    let log_dir = log_dir();

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter);

    // `log` records reach the subscriber through LogTracer.
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }
    let subscriber = tracing_subscriber::registry().with(file_layer);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }

    let log_dir_clone = log_dir.clone();
    std::thread::spawn(move || {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        compress_old_logs(&log_dir_clone, &today);
    });

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_PREFIX)
    );

    guard
}

/// Whether a file in the log directory is a finished day that should be gzipped.
fn should_compress(name: &str, today_suffix: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX)
        && name.len() > LOG_FILE_PREFIX.len()
        && !name.ends_with(today_suffix)
        && !name.ends_with(".gz")
}

/// Compress every rolled log file except today's.
fn compress_old_logs(log_dir: &Path, today_suffix: &str) {
    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_compress(name, today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(()) => log::info!("Compressed old log: {:?}", path),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

fn compress_file(path: &Path) -> io::Result<()> {
    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?
        .join(gz_name);

    // Skip if already exists
    if gz_path.exists() {
        return Ok(());
    }

    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
}
