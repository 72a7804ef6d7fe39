use crate::domain::settings::LogSettings;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub struct LoggingGuard {
    // Must stay alive for file logs to be flushed
    _guards: Vec<WorkerGuard>,
}

pub fn init_logging(settings: &LogSettings) -> anyhow::Result<LoggingGuard> {
    let mut guards = Vec::new();

    // RUST_LOG wins over the configured level
    let level_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::from_str(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = settings.console_logging_enabled.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(settings.show_target)
            .with_ansi(settings.ansi_colors)
    });

    let file_layer = if settings.file_logging_enabled {
        let rotation = match settings.rotation.to_lowercase().as_str() {
            "hourly" => Rotation::HOURLY,
            "minutely" => Rotation::MINUTELY,
            "never" => Rotation::NEVER,
            _ => Rotation::DAILY,
        };

        let appender =
            RollingFileAppender::new(rotation, &settings.log_dir, &settings.file_name_prefix);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        guards.push(guard);
        Some(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(settings.show_target),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(level_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized");

    Ok(LoggingGuard { _guards: guards })
}
