/// `post-message` command: post a message via `chat.postMessage`.
use serde_json::{Map, Value, json};

use crate::api::SlackClient;
use crate::cli::args::PostMessageArgs;
use crate::error::SlackError;
use crate::format::to_pretty;

/// Build the `chat.postMessage` parameters.
///
/// # Errors
///
/// Returns `SlackError::InvalidBlocks` when `--blocks` is not valid JSON.
pub fn params(args: &PostMessageArgs) -> Result<Map<String, Value>, SlackError> {
    let mut params = Map::new();
    params.insert("channel".to_owned(), json!(args.channel));
    params.insert("text".to_owned(), json!(args.text));
    if let Some(thread_ts) = &args.thread_ts {
        params.insert("thread_ts".to_owned(), json!(thread_ts));
    }
    if let Some(blocks) = &args.blocks {
        let blocks: Value = serde_json::from_str(blocks).map_err(SlackError::InvalidBlocks)?;
        params.insert("blocks".to_owned(), blocks);
    }
    Ok(params)
}

/// Run `slack-api post-message`.
///
/// # Errors
///
/// Returns `SlackError` on bad `--blocks` JSON or any request failure.
pub fn run(args: &PostMessageArgs, client: &SlackClient) -> Result<(), SlackError> {
    let result = client.call("chat.postMessage", &params(args)?, false)?;
    println!("{}", to_pretty(&result));
    Ok(())
}
