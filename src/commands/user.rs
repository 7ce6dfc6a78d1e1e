/// `get-user` command: fetch user info via `users.info`.
use serde_json::{Map, Value, json};

use crate::api::SlackClient;
use crate::cli::args::UserArgs;
use crate::error::SlackError;
use crate::format::to_pretty;

/// Build the `users.info` parameters.
#[must_use]
pub fn params(args: &UserArgs) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("user".to_owned(), json!(args.user));
    params
}

/// Run `slack-api get-user`.
///
/// # Errors
///
/// Returns `SlackError` on any fatal request failure.
pub fn run(args: &UserArgs, client: &SlackClient) -> Result<(), SlackError> {
    let result = client.call("users.info", &params(args), true)?;
    println!("{}", to_pretty(&result));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_single_user_field() {
        let args = UserArgs {
            user: "U1234567890".to_owned(),
        };
        let p = params(&args);
        assert_eq!(p["user"], json!("U1234567890"));
        assert_eq!(p.len(), 1);
    }
}
