/// `get-thread` command: fetch thread replies via `conversations.replies`.
use serde_json::{Map, Value, json};

use crate::api::SlackClient;
use crate::cli::args::ThreadArgs;
use crate::error::SlackError;
use crate::format::{format_messages, to_pretty};

/// Build the `conversations.replies` parameters.
#[must_use]
pub fn params(args: &ThreadArgs) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("channel".to_owned(), json!(args.channel));
    params.insert("ts".to_owned(), json!(args.ts));
    params.insert("limit".to_owned(), json!(args.limit));
    params
}

/// Run `slack-api get-thread`.
///
/// Output rule matches `get-history`: formatted on success, raw body on
/// `"ok": false`.
///
/// # Errors
///
/// Returns `SlackError` on any fatal request failure.
pub fn run(args: &ThreadArgs, client: &SlackClient) -> Result<(), SlackError> {
    let result = client.call("conversations.replies", &params(args), true)?;
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
        println!("{}", to_pretty(&result));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatMode;

    #[test]
    fn test_params_carry_channel_ts_limit() {
        let args = ThreadArgs {
            channel: "C123".to_owned(),
            ts: "1700000000.000100".to_owned(),
            limit: 50,
            format: FormatMode::Text,
            max_text_length: 0,
        };
        let p = params(&args);
        assert_eq!(p["channel"], json!("C123"));
        assert_eq!(p["ts"], json!("1700000000.000100"));
        assert_eq!(p["limit"], json!(50));
        assert_eq!(p.len(), 3);
    }
}
