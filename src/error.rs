/// Errors from the API client layer.
use thiserror::Error;

/// Errors that can occur while talking to the Slack Web API.
///
/// Application-level failures (`ok: false` in a parsed response) are not
/// represented here: the response body is still returned to the caller so it
/// can inspect the `error` field itself.
#[derive(Debug, Error)]
pub enum SlackError {
    /// The token environment variable is not set.
    #[error("{var} environment variable not set")]
    MissingToken {
        /// Name of the environment variable that was consulted.
        var: &'static str,
    },

    /// The server answered with a non-success HTTP status.
    #[error("HTTP Error: {status} {reason}")]
    Http {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase, or "Unknown" when the status is non-standard.
        reason: String,
    },

    /// The request never produced a response (connection failure, TLS, DNS).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body that was not valid JSON.
    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// The `--blocks` argument was not valid Block Kit JSON.
    #[error("Invalid JSON for --blocks: {0}")]
    InvalidBlocks(serde_json::Error),
}

impl SlackError {
    /// Return the CLI exit code for this error.
    ///
    /// Every fatal path exits 1: missing credential, transport failure,
    /// unparseable response, bad `--blocks` payload.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingToken { .. }
            | Self::Http { .. }
            | Self::Transport(_)
            | Self::Json(_)
            | Self::InvalidBlocks(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_diagnostic_names_status_and_reason() {
        let err = SlackError::Http {
            status: 404,
            reason: "Not Found".to_owned(),
        };
        assert_eq!(err.to_string(), "HTTP Error: 404 Not Found");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_token_names_the_variable() {
        let err = SlackError::MissingToken { var: "SLACK_TOKEN" };
        assert_eq!(err.to_string(), "SLACK_TOKEN environment variable not set");
        assert_eq!(err.exit_code(), 1);
    }
}
