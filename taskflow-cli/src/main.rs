use std::io::{self, Write};

use clap::Parser;

use taskflow_core::tr;

use crate::app::App;
use crate::cli::{Cli, Commands, OnOff};
use crate::config::ConfigStore;
use crate::error::Result;

mod api;
mod app;
mod cli;
mod config;
mod display;
mod error;
mod notify;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = ConfigStore::default_location()?;
    let mut config = store.load()?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    let lang = config.language;

    let mut app = App::new(config, store);

    match cli.command {
        Commands::Register { username, password } => {
            app.register(&username, &password).await?;
        }
        Commands::Login { username, password } => {
            app.login(&username, &password).await?;
        }
        Commands::Logout => {
            app.logout()?;
        }
        Commands::List { status } => {
            app.list(status.map(Into::into)).await?;
        }
        Commands::Search { query } => {
            app.search(&query.join(" ")).await?;
        }
        Commands::Add {
            title,
            description,
            due,
        } => {
            app.add(&title.join(" "), description, due).await?;
        }
        Commands::Advance { id } => {
            app.advance(id).await?;
        }
        Commands::Remove { id, force } => {
            let confirmed =
                force || confirm(&format!("{} (#{id})", tr(lang, "confirm_delete")))?;
            app.remove(id, confirmed).await?;
        }
        Commands::Theme { theme } => {
            app.set_theme(theme.into())?;
        }
        Commands::Lang { language } => {
            app.set_language(language.into())?;
        }
        Commands::Notify { state } => {
            app.set_notifications(matches!(state, OnOff::On))?;
        }
        Commands::Link => {
            app.link()?;
        }
        Commands::Ping => {
            app.ping().await?;
        }
    }

    Ok(())
}

/// Ask user for confirmation
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase() == "y")
}
