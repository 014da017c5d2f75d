//! Client for the remote account service the app authenticates against.
//!
//! Accounts live in a hosted table reached over REST; this crate wraps the
//! handful of calls the app makes: listing accounts for the admin panel,
//! creating, updating and deleting them, and credential login with a
//! `last_login` stamp.

pub use client::Client;
pub use config::{AccountsConfig, load, load_from};
pub use error::{ClientError, Result};

mod client;
mod config;
mod error;
