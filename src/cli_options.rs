use crate::config::HumanSide;
use camino::Utf8PathBuf;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "Play tic-tac-toe against a minimax opponent")]
pub struct CliOptions {
    #[argh(
        option,
        description = "the path to the config, `./config.toml` is used if it exists"
    )]
    pub config: Option<Utf8PathBuf>,

    #[argh(
        option,
        description = "the side the human plays: x, o, or none to watch the computer play itself"
    )]
    pub human: Option<HumanSide>,
}
