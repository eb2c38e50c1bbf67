//! Telemetry setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogSettings;
use crate::constants::LOG_FILE_PREFIX;

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. The returned guard must be held for the life of the
/// process when file logging is enabled, otherwise buffered lines are lost.
pub fn init_telemetry(settings: &LogSettings) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let json_layer = settings.json.then(|| fmt::layer().json().with_target(true));
    let text_layer = (!settings.json).then(|| fmt::layer().with_target(true));

    let (file_layer, guard) = match settings.directory.as_deref() {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .init();

    guard
}
