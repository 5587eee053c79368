// Entry point: program main
// Loads configuration and albums, then lists, selects or runs the picker TUI

use album_keys::albums;
use album_keys::cli::{Args, Commands};
use album_keys::commands;
use album_keys::config::Config;
use album_keys::error::AppError;
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, debug};
use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

fn init_logging(config: &Config) -> Result<(), AppError> {
    let mut builder = Builder::new();
    builder.filter_level(level_filter(&config.logging.level));
    if config.logging.log_to_file {
        // the picker owns the terminal, so logs go to a file
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.logging.log_file)
            .map_err(|e| AppError::LogFile(config.logging.log_file.clone(), e.to_string()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_config(args: &Args) -> Result<Config, AppError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(path) = &args.albums {
        config.albums.file = Some(path.clone());
    }
    Ok(config)
}

async fn run_app(args: Args) -> Result<i32, AppError> {
    let config = load_config(&args)?;
    init_logging(&config)?;
    debug!("configuration: {config:?}");

    let source = config
        .albums
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from("-"));
    if albums::waits_on_terminal(&source, io::stdin().is_terminal()) {
        eprintln!("reading albums as JSON from stdin (pass --albums FILE to use a file)");
    }
    let albums = albums::load_albums(&source)?;

    match args.command {
        Some(Commands::List { json }) => {
            commands::list(&albums, json, &mut io::stdout().lock())?;
            Ok(0)
        }
        Some(Commands::Select { keys }) => commands::select(
            &albums,
            &keys,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        ),
        None => {
            let selected = album_keys::ui::run(albums, config.ui.show_unbound).await?;
            match selected {
                Some(id) => {
                    println!("{id}");
                    Ok(0)
                }
                None => Ok(1),
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    match run_app(args).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}
