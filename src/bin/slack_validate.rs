#![deny(clippy::all, clippy::pedantic)]
//! slack-validate — validate Slack search query syntax.

use clap::Parser;

use slackcli::cli::ValidateCli;
use slackcli::query::validate;

fn main() {
    let cli = ValidateCli::parse();

    let result = validate(&cli.query);
    if result.is_valid() {
        println!("✓ Valid query");
    } else {
        eprintln!("✗ Invalid query:");
        for error in &result.errors {
            eprintln!("  - {error}");
        }
        std::process::exit(1);
    }
}
