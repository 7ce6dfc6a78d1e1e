/// Slack Web API client: token resolution and request dispatch.
///
/// One blocking HTTP request per call, no retries, no timeout configuration.
/// Read-style methods (`conversations.*`, `search.messages`, `users.info`)
/// go out as GET with urlencoded parameters; mutating methods
/// (`chat.postMessage`) as POST with a JSON body.
use std::env;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use crate::error::SlackError;

/// Base URL for all Web API methods.
pub const SLACK_API_BASE: &str = "https://slack.com/api";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "SLACK_TOKEN";

/// An authenticated Web API client. The token is resolved once at
/// construction and never refreshed.
pub struct SlackClient {
    token: String,
    base: String,
    http: Client,
}

impl SlackClient {
    /// Build a client from the [`TOKEN_ENV_VAR`] environment variable.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::MissingToken` when the variable is unset or empty.
    pub fn from_env() -> Result<Self, SlackError> {
        let token = env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(SlackError::MissingToken { var: TOKEN_ENV_VAR })?;
        Ok(Self::new(token))
    }

    /// Build a client with an explicit token against the production base URL.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self::with_base(token, SLACK_API_BASE.to_owned())
    }

    /// Test seam: point the client at a different base URL.
    pub(crate) fn with_base(token: String, base: String) -> Self {
        Self {
            token,
            base,
            http: Client::new(),
        }
    }

    /// Call a Web API method and return the parsed response body.
    ///
    /// A response with `"ok": false` is reported on stderr but still returned,
    /// so the caller can inspect the `error` field itself.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::Http` on any non-success status,
    /// `SlackError::Transport` when no response arrives, and
    /// `SlackError::Json` when the body is not valid JSON.
    pub fn call(
        &self,
        method: &str,
        params: &Map<String, Value>,
        use_get: bool,
    ) -> Result<Value, SlackError> {
        let url = format!("{}/{method}", self.base);

        let request = if use_get {
            self.http.get(&url).query(&query_pairs(params))
        } else {
            self.http
                .post(&url)
                .header(CONTENT_TYPE, "application/json; charset=utf-8")
                .body(serde_json::to_string(params)?)
        };

        let response = request.bearer_auth(&self.token).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SlackError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_owned(),
            });
        }

        let body: Value = serde_json::from_str(&response.text()?)?;
        if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            let reason = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            eprintln!("API Error: {reason}");
        }
        Ok(body)
    }
}

/// Flatten a JSON parameter map into urlencodable string pairs.
///
/// Strings pass through verbatim; numbers and booleans render in their
/// canonical decimal/literal form; anything structured is JSON-encoded.
fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => serde_json::to_string(other).unwrap_or_default(),
            };
            (key.clone(), rendered)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[test]
    fn test_query_pairs_strings_verbatim() {
        let params = map(&[("channel", json!("C123")), ("oldest", json!("1700000000.0"))]);
        let pairs = query_pairs(&params);
        assert!(pairs.contains(&("channel".to_owned(), "C123".to_owned())));
        assert!(pairs.contains(&("oldest".to_owned(), "1700000000.0".to_owned())));
    }

    #[test]
    fn test_query_pairs_numbers_decimal() {
        let params = map(&[("limit", json!(100)), ("page", json!(2))]);
        let pairs = query_pairs(&params);
        assert!(pairs.contains(&("limit".to_owned(), "100".to_owned())));
        assert!(pairs.contains(&("page".to_owned(), "2".to_owned())));
    }

    #[test]
    fn test_with_base_controls_endpoint() {
        let client = SlackClient::with_base("xoxb-test".to_owned(), "http://example".to_owned());
        assert_eq!(client.base, "http://example");
        assert_eq!(
            format!("{}/{}", client.base, "users.info"),
            "http://example/users.info"
        );
    }
}
