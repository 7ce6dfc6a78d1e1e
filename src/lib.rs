#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! slackcli — Slack Web API client and search-query validator.

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod format;
pub mod query;

pub use api::SlackClient;
pub use error::SlackError;
