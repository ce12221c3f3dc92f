//! Terminal frontend for the birthday book.
//!
//! # Responsibility
//! - Resolve configuration (data directory, log level), bootstrap logging
//!   and the store, and dispatch one command per invocation.
//! - Keep all user-facing output in the render layer.

mod cli;
mod commands;
mod error;
mod render;

use crate::cli::{Cli, Command};
use crate::error::AppError;
use crate::render::TerminalSink;
use birthdaybook_core::{
    core_version, default_log_level, init_logging, open_store, BirthdayAnnouncer, FriendDraft,
    FriendService, SqliteFriendMirror, STORE_FILE_NAME,
};
use chrono::Local;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    std::fs::create_dir_all(&data_dir).map_err(|source| AppError::CreateDataDir {
        path: data_dir.clone(),
        source,
    })?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &data_dir.join("logs")) {
        // The app stays usable without a log file.
        eprintln!("logging unavailable: {err}");
    }
    info!(
        "event=app_start module=cli status=ok command={} version={}",
        cli.command.name(),
        core_version()
    );

    let conn = open_store(data_dir.join(STORE_FILE_NAME))?;
    let mirror = SqliteFriendMirror::try_new(&conn)?;
    let mut service = FriendService::load(mirror)?;

    let now = Local::now().naive_local();
    let mut announcer = BirthdayAnnouncer::new();
    let mut sink = TerminalSink;

    match cli.command {
        Command::Add {
            name,
            email,
            birthday,
        } => {
            let draft = FriendDraft::new(name, email, birthday);
            commands::run_add(&mut service, &draft, now, &mut announcer, &mut sink)
        }
        Command::Remove { id } => {
            commands::run_remove(&mut service, &id, now, &mut announcer, &mut sink)
        }
        Command::List => commands::run_list(&service, now, &mut announcer, &mut sink),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf, AppError> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    dirs::data_dir()
        .map(|base| base.join("birthdaybook"))
        .ok_or(AppError::DataDirUnavailable)
}
