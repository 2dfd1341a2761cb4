use crate::config::Config;
use anyhow::Context;
use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::EnvFilter,
    layer::SubscriberExt,
};

/// Try to setup a logger.
///
/// Logs go to the stderr, and to the log file if one is configured.
/// The returned guard flushes the log file when dropped.
pub fn setup(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(&config.log_filter).context("invalid log filter")?;
    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_formatting_layer, worker_guard) = match config.log_file.as_deref() {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_str().is_empty()) {
                std::fs::create_dir_all(dir).context("failed to create log file dir")?;
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file `{path}`"))?;
            let (writer, worker_guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);

            (Some(layer), Some(worker_guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(file_formatting_layer)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(worker_guard)
}
