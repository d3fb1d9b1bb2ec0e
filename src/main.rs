mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod menu;
mod pointer;
mod util;
mod warning;
use crate::app::App;
use crate::cli::{Arguments, CliCommand};
use crate::config::Config;
use crate::warning::Warning;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match CliCommand::from_parser(lexopt::Parser::from_env()) {
        Ok(CliCommand::Run(args)) => run(args),
        Ok(CliCommand::Help) => {
            print!("{}", CliCommand::USAGE);
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", env!("CARGO_PKG_NAME"));
            eprintln!("Run with --help for usage.");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Arguments) -> ExitCode {
    let mut problems = Vec::new();
    let config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
        problems.push(e);
        Config::default()
    });
    if let Some(path) = args.log_file.as_ref().or(config.log.file.as_ref()) {
        if let Err(e) = logging::init(path, &config.log.level)
            .with_context(|| format!("Could not log to {}", path.display()))
        {
            problems.push(e);
        }
    }
    let mouse = config.input.mouse && !args.no_mouse;
    for e in &problems {
        tracing::warn!(error = ?e, "problem at startup");
    }
    tracing::info!(mouse, "starting up");
    let warnings = problems.iter().map(Warning::from).collect();
    let app = App::new(mouse, warnings);
    let terminal = ratatui::init();
    let r = if mouse {
        let r = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
            .and_then(|()| app.run(terminal));
        let _ = execute!(io::stdout(), DisableMouseCapture, DisableFocusChange);
        r
    } else {
        app.run(terminal)
    };
    ratatui::restore();
    tracing::info!("shutting down");
    io_exit(r)
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(p) => Config::load(p, false)
            .with_context(|| format!("Could not load configuration from {}", p.display()))?,
        None => {
            let p = Config::default_path().context("Could not locate configuration")?;
            Config::load(&p, true)
                .with_context(|| format!("Could not load configuration from {}", p.display()))?
        }
    };
    Ok(config)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
