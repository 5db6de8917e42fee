//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `hotprospects_core` linkage.
//! - Print one filtered, sorted view of a prospect database when given a path.
//!
//! Usage: `hotprospects_cli [db_path [all|contacted|uncontacted [name|date]]]`
//!
//! Logs go to `$HOTPROSPECTS_LOG_DIR` (absolute), or `<tmp>/hotprospects-logs`.

use hotprospects_core::db::open_db;
use hotprospects_core::{
    ProspectFilter, ProspectStore, QueryEngine, SortKey, SqliteProspectRepository,
};
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "HOTPROSPECTS_LOG_DIR";

fn main() -> ExitCode {
    println!("hotprospects_core ping={}", hotprospects_core::ping());
    println!("hotprospects_core version={}", hotprospects_core::core_version());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = start_logging().and_then(|()| match args.first() {
        Some(db_path) => print_view(db_path, args.get(1), args.get(2)),
        None => Ok(()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging() -> Result<(), String> {
    let dir = std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("hotprospects-logs"));
    let log_dir = dir
        .to_str()
        .ok_or_else(|| format!("log dir `{}` is not valid UTF-8", dir.display()))?;

    hotprospects_core::init_logging(hotprospects_core::default_log_level(), log_dir)
}

fn print_view(
    db_path: &str,
    filter_arg: Option<&String>,
    sort_arg: Option<&String>,
) -> Result<(), String> {
    let filter = match filter_arg {
        Some(value) => {
            let message = format!("unknown filter `{value}`; expected all|contacted|uncontacted");
            ProspectFilter::parse(value).ok_or(message)?
        }
        None => ProspectFilter::default(),
    };
    let sort = match sort_arg {
        Some(value) => {
            let message = format!("unknown sort `{value}`; expected name|date");
            SortKey::parse(value).ok_or(message)?
        }
        None => SortKey::default(),
    };

    let conn = open_db(db_path).map_err(|err| err.to_string())?;
    let store = ProspectStore::new(SqliteProspectRepository::new(conn));
    let prospects = QueryEngine::new(&store)
        .view(filter, sort)
        .map_err(|err| err.to_string())?;

    println!("{} ({})", filter.title(), prospects.len());
    for prospect in prospects {
        let marker = if prospect.is_contacted { "x" } else { " " };
        println!("[{marker}] {} <{}>", prospect.name, prospect.email_address);
    }
    Ok(())
}
