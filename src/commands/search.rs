/// `search` command: search messages via `search.messages`.
use serde_json::{Map, Value, json};

use crate::api::SlackClient;
use crate::cli::args::SearchArgs;
use crate::error::SlackError;
use crate::format::to_pretty;

/// Build the `search.messages` parameters. Sort and paging options are only
/// sent when given.
#[must_use]
pub fn params(args: &SearchArgs) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("query".to_owned(), json!(args.query));
    params.insert("count".to_owned(), json!(args.count));
    if let Some(sort) = &args.sort {
        params.insert("sort".to_owned(), json!(sort));
    }
    if let Some(sort_dir) = &args.sort_dir {
        params.insert("sort_dir".to_owned(), json!(sort_dir));
    }
    // Page 0 is meaningless to the API; treat it like an unset page.
    if let Some(page) = args.page.filter(|&p| p > 0) {
        params.insert("page".to_owned(), json!(page));
    }
    params
}

/// Run `slack-api search`.
///
/// # Errors
///
/// Returns `SlackError` on any fatal request failure.
pub fn run(args: &SearchArgs, client: &SlackClient) -> Result<(), SlackError> {
    let result = client.call("search.messages", &params(args), true)?;
    println!("{}", to_pretty(&result));
    Ok(())
}
