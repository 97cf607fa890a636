mod appointment;
mod cli;
mod config;
mod error;
mod lifecycle;
mod macros;
mod model;
mod notify;
mod registry;
mod replay;
mod service;

use std::{error::Error, path::PathBuf};

use clap::Parser;
use log::debug;
use registry::Registry;

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(bin_name = env!("CARGO_BIN_NAME"))]
enum Cli {
    #[command(about = "Prints tool version")]
    #[command(long_about = None)]
    Version,

    #[command(about = "Starts interactive service center session")]
    #[command(long_about = None)]
    Run(RunArgs),

    #[command(about = "Applies a JSON script of steps to a fresh service center")]
    #[command(long_about = None)]
    Replay(ReplayArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    #[arg(short='c', long, default_value=Some("./config.toml"))]
    config_path: PathBuf,
}

#[derive(clap::Args)]
struct ReplayArgs {
    #[arg(short='c', long, default_value=Some("./config.toml"))]
    config_path: PathBuf,

    #[arg(long)]
    in_path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match Cli::parse() {
        Cli::Version => {
            println!(env!("CARGO_PKG_VERSION"));
        }
        Cli::Run(args) => {
            debug!("Подгружаем конфиг из {:?}", args.config_path);
            let cfg = config::load(args.config_path)?;

            let registry = Registry::new();

            cli::run(&cfg, &registry)?;
        }
        Cli::Replay(args) => {
            debug!("Подгружаем конфиг из {:?}", args.config_path);
            let cfg = config::load(args.config_path)?;

            debug!("Подгружаем сценарий из {:?}", args.in_path);
            let steps = replay::load(&args.in_path)?;

            let registry = Registry::new();

            replay::run(&cfg, &registry, &steps);
        }
    };

    Ok(())
}
