pub mod args;

use std::io::{self, Write};
use std::path::PathBuf;

use practice_core::config::Config;
use practice_core::{PracticeTotal, Session, SessionStore};

use self::args::{Cli, Command};

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let path = match cli.file {
        Some(path) => path,
        None => Config::load()?.data_file(),
    };
    tracing::debug!(path = %path.display(), "using session log");

    match cli.command {
        Command::Add { duration } => cmd_add(path, duration)?,
        Command::List { json } => cmd_list(path, json)?,
        Command::Total { json } => cmd_total(path, json)?,
    }

    Ok(())
}

fn cmd_add(path: PathBuf, duration: i64) -> color_eyre::Result<()> {
    // Validate before touching the log.
    let session = Session::today(duration)?;
    let mut store = SessionStore::open(path)?;
    store.append(session)?;
    tracing::debug!(path = %store.path().display(), sessions = store.len(), "appended session");
    print_added(&mut io::stdout().lock(), &session)?;
    Ok(())
}

fn cmd_list(path: PathBuf, json: bool) -> color_eyre::Result<()> {
    let store = SessionStore::open(path)?;
    let sessions = store.sessions();
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&sessions)?)?;
    } else {
        print_sessions(&mut out, &sessions)?;
    }
    Ok(())
}

fn cmd_total(path: PathBuf, json: bool) -> color_eyre::Result<()> {
    let store = SessionStore::open(path)?;
    let total = store.summary();
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&total)?)?;
    } else {
        print_total(&mut out, &total)?;
    }
    Ok(())
}

fn print_added(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "Added session:  {} minutes", session.duration_minutes())
}

fn print_sessions(out: &mut impl Write, sessions: &[Session]) -> io::Result<()> {
    if sessions.is_empty() {
        return writeln!(out, "No sessions added yet.");
    }
    for s in sessions {
        writeln!(out, "{}  {} minutes", s.date(), s.duration_minutes())?;
    }
    Ok(())
}

fn print_total(out: &mut impl Write, total: &PracticeTotal) -> io::Result<()> {
    writeln!(out, "Total practice time: {total}")
}
