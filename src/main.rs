#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # Tic-Tac-Toe
//!
//! Play against a minimax opponent in the terminal.

pub mod cli_options;
pub mod config;
pub mod game;
pub mod input;
pub mod logger;
pub mod renderer;
pub mod setup;

use crate::{
    cli_options::CliOptions,
    config::Config,
    game::GameOptions,
};
use anyhow::Context as _;
use tic_tac_toe::{
    GameOutcome,
    Minimax,
};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Data from the setup function
struct SetupData {
    config: Config,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: CliOptions) -> anyhow::Result<SetupData> {
    let mut config = setup::load_config(cli_options.config.as_deref())
        .context("failed to load config")?;

    if let Some(human) = cli_options.human {
        config.human = human;
    }

    let worker_guard = logger::setup(&config).context("failed to initialize logger")?;

    Ok(SetupData {
        config,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// This allows more things to drop correctly.
/// This also loads the config, logging errors to the stderr instead of the loggers, which are not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options = argh::from_env();

    let setup_data = setup(cli_options)?;
    real_main(setup_data)?;
    Ok(())
}

/// The actual entry point
fn real_main(setup_data: SetupData) -> anyhow::Result<()> {
    let options = GameOptions {
        human: setup_data.config.human.player(),
        minimax: Minimax::new().depth_adjusted(setup_data.config.depth_adjusted),
    };
    info!(?options, "starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let ret = game::run(options, stdin.lock(), stdout.lock());

    // Errors are reported by `main`.
    match &ret {
        Ok(GameOutcome::Win(winner)) => info!(%winner, "game over"),
        Ok(outcome) => info!(?outcome, "game over"),
        Err(_) => {}
    }

    // Logging no longer reliable past this point
    drop(setup_data.worker_guard);

    ret.map(|_| ())
}
