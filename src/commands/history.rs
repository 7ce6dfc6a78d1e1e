/// `get-history` command: fetch channel history via `conversations.history`.
use serde_json::{Map, Value, json};

use crate::api::SlackClient;
use crate::cli::args::HistoryArgs;
use crate::error::SlackError;
use crate::format::{format_messages, to_pretty};

/// Build the `conversations.history` parameters. Time bounds are only sent
/// when given.
#[must_use]
pub fn params(args: &HistoryArgs) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("channel".to_owned(), json!(args.channel));
    params.insert("limit".to_owned(), json!(args.limit));
    if let Some(oldest) = &args.oldest {
        params.insert("oldest".to_owned(), json!(oldest));
    }
    if let Some(latest) = &args.latest {
        params.insert("latest".to_owned(), json!(latest));
    }
    params
}

/// Run `slack-api get-history`.
///
/// On success the messages are rendered in the requested format; a response
/// with `"ok": false` is printed verbatim so the `error` field stays visible.
///
/// # Errors
///
/// Returns `SlackError` on any fatal request failure.
pub fn run(args: &HistoryArgs, client: &SlackClient) -> Result<(), SlackError> {
    let result = client.call("conversations.history", &params(args), true)?;
    print_history(&result, args);
    Ok(())
}

fn print_history(result: &Value, args: &HistoryArgs) {
    if result.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        let messages = result
            .get("messages")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        println!(
            "{}",
            format_messages(&messages, args.format, args.max_text_length)
        );
    } else {
        println!("{}", to_pretty(result));
    }
}
