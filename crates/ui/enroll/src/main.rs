mod action;
mod app;
mod cli;
mod components;
mod config;
mod errors;
mod logging;
mod pages;
mod services;
mod theme;
mod tui;

use clap::Parser;
use color_eyre::Result;

use crate::app::App;
use crate::cli::{Cli, Cmd};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    crate::errors::init()?;
    crate::logging::init()?;

    match args.cmd {
        Some(Cmd::List { json }) => cli::list(&Config::new()?, json),
        Some(Cmd::Run) | None => {
            let mut app = App::new()?;
            app.run().await
        }
    }
}
