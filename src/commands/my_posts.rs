/// `my-posts` command: the caller's own posts on a given date.
///
/// Convenience wrapper over `search.messages` with the query
/// `from:me on:{date}`, sorted by timestamp ascending.
use serde_json::{Map, Value, json};

use crate::api::SlackClient;
use crate::cli::args::MyPostsArgs;
use crate::error::SlackError;
use crate::format::to_pretty;

/// Build the `search.messages` parameters for the fixed own-posts query.
#[must_use]
pub fn params(args: &MyPostsArgs) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("query".to_owned(), json!(format!("from:me on:{}", args.date)));
    params.insert("count".to_owned(), json!(args.count));
    params.insert("sort".to_owned(), json!("timestamp"));
    params.insert("sort_dir".to_owned(), json!("asc"));
    params
}

/// Run `slack-api my-posts`.
///
/// # Errors
///
/// Returns `SlackError` on any fatal request failure.
pub fn run(args: &MyPostsArgs, client: &SlackClient) -> Result<(), SlackError> {
    let result = client.call("search.messages", &params(args), true)?;
    println!("{}", to_pretty(&result));
    Ok(())
}
