//! Wire types shared between the app and the remote account service.
//!
//! Field names match the remote table columns exactly; do not rename
//! without a matching migration on the service side.

pub mod account {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AccountRole {
        #[default]
        User,
        Admin,
    }

    impl AccountRole {
        #[must_use]
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::User => "user",
                Self::Admin => "admin",
            }
        }
    }

    /// One row of the account table.
    ///
    /// `pass` only travels on login responses; list queries never select it.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Account {
        pub id: i64,
        pub user: String,
        pub role: AccountRole,
        pub last_login: Option<NaiveDate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub pass: Option<String>,
    }

    /// Payload for creating an account.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub user: String,
        pub pass: String,
        pub role: AccountRole,
    }

    /// Partial update; absent fields stay untouched on the service.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct AccountPatch {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pass: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub role: Option<AccountRole>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_login: Option<NaiveDate>,
    }
}
