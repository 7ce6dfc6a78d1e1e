/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

use crate::format::{DEFAULT_MAX_TEXT_LENGTH, FormatMode};

/// slack-api — Slack Web API client.
#[derive(Debug, Parser)]
#[command(
    name = "slack-api",
    about = "Call the Slack Web API from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// All slack-api subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Post a message to a channel.
    PostMessage(PostMessageArgs),
    /// Fetch channel message history.
    GetHistory(HistoryArgs),
    /// Fetch replies in a thread.
    GetThread(ThreadArgs),
    /// Search messages.
    Search(SearchArgs),
    /// Fetch user info by ID.
    GetUser(UserArgs),
    /// Search the caller's own posts on a given date.
    MyPosts(MyPostsArgs),
}

/// Arguments for `slack-api post-message`.
#[derive(Debug, Parser)]
pub struct PostMessageArgs {
    /// Channel name or ID (e.g. #general or C1234567890).
    #[arg(long, short = 'c', value_name = "CHANNEL")]
    pub channel: String,

    /// Message text.
    #[arg(long, short = 't', value_name = "TEXT")]
    pub text: String,

    /// Thread timestamp to reply to.
    #[arg(long, value_name = "TS")]
    pub thread_ts: Option<String>,

    /// Block Kit blocks (JSON string).
    #[arg(long, value_name = "JSON")]
    pub blocks: Option<String>,
}

/// Arguments for `slack-api get-history`.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// Channel ID.
    #[arg(long, short = 'c', value_name = "CHANNEL")]
    pub channel: String,

    /// Number of messages to fetch.
    #[arg(long, short = 'l', value_name = "N", default_value_t = 100)]
    pub limit: u32,

    /// Start of time range (timestamp).
    #[arg(long, value_name = "TS")]
    pub oldest: Option<String>,

    /// End of time range (timestamp).
    #[arg(long, value_name = "TS")]
    pub latest: Option<String>,

    /// Output format: text (minimal), compact (default), full (all fields).
    #[arg(long, short = 'f', value_name = "FORMAT", value_enum, default_value = "compact")]
    pub format: FormatMode,

    /// Max text length per message (0 = unlimited).
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_TEXT_LENGTH)]
    pub max_text_length: usize,
}

/// Arguments for `slack-api get-thread`.
#[derive(Debug, Parser)]
pub struct ThreadArgs {
    /// Channel ID.
    #[arg(long, short = 'c', value_name = "CHANNEL")]
    pub channel: String,

    /// Thread timestamp.
    #[arg(long, value_name = "TS")]
    pub ts: String,

    /// Number of messages to fetch.
    #[arg(long, short = 'l', value_name = "N", default_value_t = 100)]
    pub limit: u32,

    /// Output format: text (minimal), compact (default), full (all fields).
    #[arg(long, short = 'f', value_name = "FORMAT", value_enum, default_value = "compact")]
    pub format: FormatMode,

    /// Max text length per message (0 = unlimited).
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_TEXT_LENGTH)]
    pub max_text_length: usize,
}

/// Arguments for `slack-api search`.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query (supports modifiers like from:, in:, before:).
    #[arg(long, short = 'q', value_name = "QUERY")]
    pub query: String,

    /// Number of results.
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub count: u32,

    /// Page number.
    #[arg(long, value_name = "N")]
    pub page: Option<u32>,

    /// Sort order.
    #[arg(long, value_name = "KEY", value_parser = ["score", "timestamp"])]
    pub sort: Option<String>,

    /// Sort direction.
    #[arg(long, value_name = "DIR", value_parser = ["asc", "desc"])]
    pub sort_dir: Option<String>,
}

/// Arguments for `slack-api get-user`.
#[derive(Debug, Parser)]
pub struct UserArgs {
    /// User ID (U1234567890).
    #[arg(long, short = 'u', value_name = "USER_ID")]
    pub user: String,
}

/// Arguments for `slack-api my-posts`.
#[derive(Debug, Parser)]
pub struct MyPostsArgs {
    /// Date (YYYY-MM-DD).
    #[arg(long, short = 'd', value_name = "DATE")]
    pub date: String,

    /// Number of results.
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub count: u32,
}

/// slack-validate — check search-query syntax without calling the API.
#[derive(Debug, Parser)]
#[command(
    name = "slack-validate",
    about = "Validate Slack search query syntax",
    version,
    arg_required_else_help = true
)]
pub struct ValidateCli {
    /// Search query to validate.
    pub query: String,
}
