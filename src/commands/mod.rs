/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod history;
pub mod my_posts;
pub mod post_message;
pub mod search;
pub mod thread;
pub mod user;

use crate::api::SlackClient;
use crate::cli::args::Command;
use crate::error::SlackError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `SlackError` on any fatal request failure.
pub fn dispatch(command: &Command, client: &SlackClient) -> Result<(), SlackError> {
    match command {
        Command::PostMessage(args) => post_message::run(args, client),
        Command::GetHistory(args) => history::run(args, client),
        Command::GetThread(args) => thread::run(args, client),
        Command::Search(args) => search::run(args, client),
        Command::GetUser(args) => user::run(args, client),
        Command::MyPosts(args) => my_posts::run(args, client),
    }
}
