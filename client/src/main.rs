use anyhow::Result;
use clap::{Parser, Subcommand};

use client::TextClient;

#[derive(Parser)]
#[command(name = "textboard", about = "Command-line client for the textboard service")]
struct Cli {
    /// Base URL of the textboard server
    #[arg(long, env = "TEXTBOARD_URL", default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a text
    Submit {
        /// The text to store
        text: String,
    },
    /// List all stored texts, newest first
    List,
    /// Check whether the service is healthy
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = TextClient::new(cli.url)?;

    match cli.command {
        Command::Submit { text } => {
            let message = client.submit(&text).await?;
            println!("{message}");
        }
        Command::List => {
            for entry in client.list().await? {
                println!(
                    "{}\t{}\t{}",
                    entry.id,
                    entry.created_at.to_rfc3339(),
                    entry.text
                );
            }
        }
        Command::Health => {
            if client.health_check().await? {
                println!("healthy");
            } else {
                println!("unhealthy");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
