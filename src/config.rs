use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use serde::Deserialize;
use std::collections::HashMap;
use tic_tac_toe::Player;
use tracing_subscriber::filter::EnvFilter;

fn default_depth_adjusted() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Deserialize, Debug)]
pub struct Config {
    /// The side the human plays.
    #[serde(default)]
    pub human: HumanSide,

    /// Whether the computer prefers faster wins and slower losses.
    #[serde(default = "default_depth_adjusted")]
    pub depth_adjusted: bool,

    /// A tracing filter directive, like `info` or `tic_tac_toe=debug`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// A file to append logs to.
    pub log_file: Option<Utf8PathBuf>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from '{path}'"))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if let Err(e) = EnvFilter::try_new(&self.log_filter) {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidLogFilter(e.to_string()),
            });
        }

        if let Some(log_file) = &self.log_file {
            if log_file.is_dir() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::LogFileIsDir(log_file.clone()),
                });
            }
        }

        let mut unknown_keys: Vec<_> = self.extra.keys().collect();
        unknown_keys.sort();
        for key in unknown_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key.clone()),
            });
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human: HumanSide::default(),
            depth_adjusted: default_depth_adjusted(),
            log_filter: default_log_filter(),
            log_file: None,
            extra: HashMap::new(),
        }
    }
}

/// The side a human plays, if any.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumanSide {
    #[default]
    X,
    O,
    None,
}

impl HumanSide {
    /// The player the human controls.
    pub fn player(self) -> Option<Player> {
        match self {
            Self::X => Some(Player::One),
            Self::O => Some(Player::Two),
            Self::None => None,
        }
    }
}

/// Failed to parse a [`HumanSide`].
#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a side, expected x, o, or none")]
pub struct InvalidHumanSideError(String);

impl std::str::FromStr for HumanSide {
    type Err = InvalidHumanSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }

        match s.parse::<Player>() {
            Ok(Player::One) => Ok(Self::X),
            Ok(Player::Two) => Ok(Self::O),
            Err(_) => Err(InvalidHumanSideError(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid log filter: {0}")]
    InvalidLogFilter(String),

    #[error("log file '{0}' is a directory")]
    LogFileIsDir(Utf8PathBuf),

    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::load_from_str("").expect("failed to parse config");
        assert_eq!(config.human, HumanSide::X);
        assert!(config.depth_adjusted);
        assert_eq!(config.log_filter, "warn");
        assert!(config.log_file.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn full_config() {
        let config = Config::load_from_str(
            r#"
human = "none"
depth_adjusted = false
log_filter = "tic_tac_toe=debug"
log_file = "tic-tac-toe.log"
"#,
        )
        .expect("failed to parse config");
        assert_eq!(config.human, HumanSide::None);
        assert_eq!(config.human.player(), None);
        assert!(!config.depth_adjusted);
        assert_eq!(config.log_file.as_deref(), Some(Utf8Path::new("tic-tac-toe.log")));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn invalid_side_fails_to_parse() {
        assert!(Config::load_from_str(r#"human = "z""#).is_err());
    }

    #[test]
    fn unknown_keys_warn() {
        let config = Config::load_from_str("colour = true").expect("failed to parse config");
        let messages = config.validate();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].severity(), Severity::Warn);
        assert!(matches!(
            messages[0].error(),
            ValidationError::UnknownKey(key) if key == "colour"
        ));
    }

    #[test]
    fn bad_log_filter_errors() {
        let config = Config::load_from_str(r#"log_filter = "tic_tac_toe=loud""#)
            .expect("failed to parse config");
        let messages = config.validate();
        assert!(messages
            .iter()
            .any(|message| message.severity() == Severity::Error));
    }

    #[test]
    fn parse_human_side() {
        assert_eq!("x".parse::<HumanSide>().ok(), Some(HumanSide::X));
        assert_eq!("O".parse::<HumanSide>().ok(), Some(HumanSide::O));
        assert_eq!("None".parse::<HumanSide>().ok(), Some(HumanSide::None));
        assert!("both".parse::<HumanSide>().is_err());
    }
}
