//! `trellis`: inspects Matrix event dumps with `trellis-core`.

pub mod config;
pub mod error;
pub mod inspect;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

pub use error::{AppError, AppResult};
pub use trellis_core as core;

use crate::config::AppConfig;
use crate::core::OwnedUserId;

#[derive(Debug, Parser)]
#[command(name = "trellis", version, about)]
struct Cli {
    /// Config file to read instead of `$TRELLIS_CONFIG` or `trellis.toml`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// - Decode `m.room.encrypted` content and print it re-encoded
    Decode {
        /// JSON file holding the content or the whole event, `-` for stdin
        file: PathBuf,
    },

    /// - Build room state from an event dump and print memberships
    State {
        /// JSON array of events, or an object with an `events` array, `-` for
        /// stdin
        file: PathBuf,

        /// Print this user's membership instead of the joined members
        #[arg(long)]
        user: Option<OwnedUserId>,
    },
}

fn run(command: Command, conf: &AppConfig) -> AppResult<()> {
    match command {
        Command::Decode { file } => {
            let bytes = inspect::read_input(&file)?;
            println!("{}", inspect::decode(&bytes)?);
        }
        Command::State { file, user } => {
            let bytes = inspect::read_input(&file)?;
            let events = inspect::load_events(&bytes)?;
            let room = inspect::build_room(events, conf.default_room_id()?)?;
            for line in inspect::state(&room, user.as_ref()) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let dotenv_result = dotenv();
    let cli = Cli::parse();

    let conf = match config::load(cli.config.as_deref()) {
        Ok(conf) => conf,
        Err(e) => {
            eprintln!("It looks like your config is invalid. The following error occurred: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&conf.logger);
    if let Err(e) = dotenv_result {
        tracing::debug!("dotenv error: {:?}", e);
    }

    match run(cli.command, &conf) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
