#![deny(clippy::all, clippy::pedantic)]
//! slack-api — call the Slack Web API from the CLI.

use clap::Parser;

use slackcli::cli::Cli;
use slackcli::{SlackClient, commands};

fn main() {
    let cli = Cli::parse();

    // Token resolution happens before any request; absence is fatal.
    let client = match SlackClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    };

    match commands::dispatch(&cli.command, &client) {
        Ok(()) => {}
        Err(err) => {
            // Request-failure messages name their own class ("HTTP Error: …",
            // "Request failed: …"); no extra prefix.
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
