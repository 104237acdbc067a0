use clap::{Parser, Subcommand};
use color_eyre::Result;

use crate::config::Config;
use crate::services::store;

#[derive(Parser)]
#[command(name = "enroll", version, about = "Project Pro academy registration")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Run the interactive registration wizard (the default)
    Run,
    /// List stored registrations
    List {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// `enroll list`: dump the local registration store.
pub fn list(config: &Config, json: bool) -> Result<()> {
    let records = store::read_registrations(&config.config.data_dir)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("No registrations yet.");
        return Ok(());
    }
    for record in &records {
        println!(
            "{}  {}  {} <{}>  {} player(s)",
            record.id,
            record.submitted_at,
            record.guardian.name,
            record.guardian.email,
            record.players.len()
        );
        for player in &record.players {
            println!("    {} ({})", player.name, player.date_of_birth);
        }
    }
    Ok(())
}
