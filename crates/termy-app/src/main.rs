//! TermySH desktop entry point.
//!
//! A line-oriented terminal host: reads commands from stdin, dispatches
//! them through the shell core, and renders the resulting scrollback.
//! The session lives only as long as the process.

mod editor;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use termy_platform::DesktopPlatform;
use termy_shell::{Dispatcher, Environment, Session, Signal};
use termy_store::DiskStore;
use termy_types::config::ShellConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = data_dir();
    let config = ShellConfig::load(&data_dir.join("termysh.toml"))?;
    log::info!("Starting TermySH (data dir: {})", data_dir.display());

    let platform = DesktopPlatform::new();
    let mut store = DiskStore::new(data_dir.clone())?;
    let dispatcher = Dispatcher::new(config);
    let mut session = Session::new(dispatcher.config());

    for line in &session.scrollback {
        println!("{line}");
    }

    let stdin = io::stdin();
    loop {
        print!("{}", dispatcher.config().echo_prefix);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF ends the session.
        }
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }
        session.record(&input);
        session
            .scrollback
            .push(format!("{}{}", dispatcher.config().echo_prefix, input));

        let result = {
            let mut env = Environment {
                process: &platform,
                store: &store,
                time: Some(&platform),
                data_dir: data_dir.display().to_string(),
            };
            dispatcher.dispatch(&input, &session, &mut env)
        };

        if let Some(patch) = result.patch {
            session.apply(patch);
        }
        match result.signal {
            Some(Signal::Clear) => {
                session.scrollback = result.lines;
                redraw(&session.scrollback);
            },
            Some(Signal::Edit(request)) => {
                editor::run(&mut store, &request)?;
            },
            None => {
                for line in &result.lines {
                    println!("{line}");
                }
                session.scrollback.extend(result.lines);
            },
        }
    }

    log::info!("TermySH session ended");
    Ok(())
}

/// Clear the terminal and repaint the scrollback.
fn redraw(scrollback: &[String]) {
    print!("\x1b[2J\x1b[H");
    for line in scrollback {
        println!("{line}");
    }
}

/// Per-user data directory for files, config, and the `ls` default path.
fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termysh")
}
