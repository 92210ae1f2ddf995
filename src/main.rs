mod cli;
mod common;
mod config;
mod error;

use cli::{normalize_args, Cmd};
use common::report_unknown_image;
use config::Config;
use error::{Error, Result};

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use env_logger::Env;
use std::process::exit;

#[mutants::skip] // Cannot test directly at the moment
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();

    CompleteEnv::with_factory(|| Cmd::command().name("notify"))
        .completer("notify")
        .complete();

    let cmd = Cmd::parse_from(normalize_args(std::env::args_os()));

    match run(&cmd) {
        Ok(code) => exit(code),
        Err(Error::UnknownImage(key)) => {
            let _ = report_unknown_image(&mut std::io::stderr().lock(), &key);
            exit(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            exit(1)
        }
    }
}

#[mutants::skip] // Cannot test directly, runs commands and shows notifications
fn run(cmd: &Cmd) -> Result<i32> {
    let config = Config::new();

    if cmd.list_images {
        config.print_images(&mut std::io::stdout().lock(), cmd.json)?;
        return Ok(0);
    }

    config.run(cmd, &mut config.notifier())
}
