/// Message output formatting: text, compact, and full modes.
use clap::ValueEnum;
use serde_json::{Map, Value, json};

/// Message fields kept in compact mode.
const COMPACT_MESSAGE_FIELDS: &[&str] = &[
    "user",
    "text",
    "ts",
    "thread_ts",
    "reply_count",
    "reply_users_count",
];

/// Default max text length per message (0 = unlimited).
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 500;

/// Output format variants for message listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum FormatMode {
    /// Header line per message plus truncated text (minimal).
    Text,
    /// Fixed subset of fields, text truncated, pretty JSON.
    #[default]
    Compact,
    /// Every field of the raw API response, pretty JSON.
    Full,
}

/// Truncate `text` if it exceeds `max_length` characters.
///
/// `max_length == 0` means unlimited. Counts characters, not bytes, so
/// multi-byte text is never split mid-character. Truncated text gains a
/// marker line reporting how many characters were dropped.
#[must_use]
pub fn truncate_text(text: &str, max_length: usize) -> String {
    let total = text.chars().count();
    if max_length == 0 || total <= max_length {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max_length).collect();
    let remaining = total - max_length;
    format!("{kept}\n(省略: 残り {remaining} 文字)")
}

/// Render messages in the requested format.
///
/// `full` preserves every field; `text` emits `=== {user} ({ts}) ===` headers
/// with truncated bodies; `compact` keeps only [`COMPACT_MESSAGE_FIELDS`] and
/// truncates `text`. JSON output is pretty-printed with non-ASCII characters
/// left unescaped.
#[must_use]
pub fn format_messages(messages: &[Value], mode: FormatMode, max_text_length: usize) -> String {
    match mode {
        FormatMode::Full => to_pretty(&json!({ "ok": true, "messages": messages })),
        FormatMode::Text => {
            let mut lines = Vec::new();
            for msg in messages {
                let user = msg.get("user").and_then(Value::as_str).unwrap_or("unknown");
                let text = msg.get("text").and_then(Value::as_str).unwrap_or("");
                let ts = msg.get("ts").and_then(Value::as_str).unwrap_or("");
                lines.push(format!("=== {user} ({ts}) ==="));
                lines.push(truncate_text(text, max_text_length));
                lines.push(String::new());
            }
            lines.join("\n")
        }
        FormatMode::Compact => {
            let compact: Vec<Value> = messages
                .iter()
                .map(|msg| compact_message(msg, max_text_length))
                .collect();
            to_pretty(&json!({ "ok": true, "messages": compact }))
        }
    }
}

/// Keep only the compact field subset; truncate `text` when present.
fn compact_message(msg: &Value, max_text_length: usize) -> Value {
    let Some(obj) = msg.as_object() else {
        return msg.clone();
    };
    let mut kept = Map::new();
    for (key, value) in obj {
        if !COMPACT_MESSAGE_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match (key.as_str(), value.as_str()) {
            ("text", Some(text)) => {
                kept.insert(
                    key.clone(),
                    Value::String(truncate_text(text, max_text_length)),
                );
            }
            _ => {
                kept.insert(key.clone(), value.clone());
            }
        }
    }
    Value::Object(kept)
}

/// Pretty-print a JSON value. serde_json writes UTF-8 directly, so non-ASCII
/// characters come through unescaped.
#[must_use]
pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
