use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// `LogKind` represents where log lines go.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogKind {
    /// Logs to console, the default choice.
    Stdout,

    /// Logs to a daily file `broadside.<date>` in the temp directory.
    File,
}

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole run.
pub fn init(kind: LogKind) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match kind {
        LogKind::Stdout => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
        LogKind::File => {
            let dir = std::env::temp_dir();
            println!("Logging to directory: {}", dir.display());

            let appender = tracing_appender::rolling::daily(dir, "broadside");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
    }
}
