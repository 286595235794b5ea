//! Tracing subscriber initialization: pretty console output by default,
//! JSON lines when `--json` is passed, and an optional rotated file sink.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

pub fn init_tracing(json: bool, log_level: &str, file: Option<&str>, rotation: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if let Some(path) = file {
        let (dir, prefix) = split_file_path(path);
        let appender = match rotation {
            Some("hourly") => tracing_appender::rolling::hourly(dir, prefix),
            Some("daily") => tracing_appender::rolling::daily(dir, prefix),
            _ => tracing_appender::rolling::never(dir, prefix),
        };
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer);
        registry.with(file_layer).init();
    } else if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn split_file_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((dir, file)) if !dir.is_empty() => (dir, file),
        _ => (".", path),
    }
}
