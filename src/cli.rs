// CLI module - command-line argument parsing and handlers
//
// The deck is usually launched bare or with a bookmarked address. The
// `config` subcommand manages the config file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};

/// demodeck - a terminal demo deck, one demo at a time
#[derive(Parser)]
#[command(name = "demodeck")]
#[command(version = VERSION)]
#[command(about = "Terminal demo deck - bookmarkable demos with history", long_about = None)]
pub struct Cli {
    /// Launch address, typically one printed by a previous run
    /// (e.g. "http://localhost:8080/index.html?module=2")
    pub address: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Handle subcommands. Returns true if one was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Config { show, path, reset }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                println!("Usage: demodeck config [--show|--path|--reset]");
            }
            true
        }
        None => false,
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    print!("{}", Config::from_env().to_toml());
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: could not determine config path");
        std::process::exit(1);
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error: could not create {}: {}", parent.display(), e);
            std::process::exit(1);
        }
    }
    match std::fs::write(&path, Config::default().to_toml()) {
        Ok(()) => println!("Config reset: {}", path.display()),
        Err(e) => {
            eprintln!("Error: could not write {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
