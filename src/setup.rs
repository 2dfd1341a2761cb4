use crate::config::{
    Config,
    Severity,
};
use anyhow::{
    ensure,
    Context,
};
use camino::Utf8Path;

/// The config that is loaded if no path is given, when it exists.
pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

/// Load a config.
///
/// With no path, `./config.toml` is used if it exists, and the defaults otherwise.
///
/// This prints to the stderr directly.
/// It is intended to be called BEFORE the loggers are set up.
pub(crate) fn load_config(path: Option<&Utf8Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path,
        None => {
            let path = Utf8Path::new(DEFAULT_CONFIG_PATH);
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    eprintln!("loading `{}`...", path);
    let config =
        Config::load_from_path(path).with_context(|| format!("failed to load `{}`", path))?;

    let errors = config.validate();
    let mut error_count = 0;
    for e in errors {
        match e.severity() {
            Severity::Warn => {
                eprintln!("validation warning: {}", e.error());
            }
            Severity::Error => {
                eprintln!("validation error: {}", e.error());
                error_count += 1;
            }
        }
    }

    ensure!(
        error_count == 0,
        "validation failed with {error_count} errors."
    );

    Ok(config)
}
