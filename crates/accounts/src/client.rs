use api_types::account::{Account, AccountNew, AccountPatch};
use chrono::Utc;
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;

use crate::config::AccountsConfig;
use crate::error::{ClientError, Result};

/// Columns the account list exposes; `pass` is deliberately not among them.
const LIST_COLUMNS: &str = "id,user,role,last_login";

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Client for the remote account table, spoken PostgREST-style: filters and
/// column selection travel as query parameters, updates as PATCH bodies.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    api_key: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: &AccountsConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            api_key: config.api_key.clone(),
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self) -> Result<Url> {
        // base_url must end with a slash or the table segment replaces the
        // last path component.
        self.base_url
            .join("users")
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// All accounts, without credentials.
    pub async fn list(&self) -> Result<Vec<Account>> {
        let res = self
            .authorize(self.http.get(self.endpoint()?))
            .query(&[("select", LIST_COLUMNS)])
            .send()
            .await?;
        let res = check(res).await?;
        res.json::<Vec<Account>>().await.map_err(ClientError::Transport)
    }

    pub async fn create(&self, account: &AccountNew) -> Result<()> {
        let res = self
            .authorize(self.http.post(self.endpoint()?))
            .json(account)
            .send()
            .await?;
        check(res).await?;
        Ok(())
    }

    /// Deletes by username; the service treats an unknown name as a no-op.
    pub async fn delete(&self, user: &str) -> Result<()> {
        let res = self
            .authorize(self.http.delete(self.endpoint()?))
            .query(&[("user", format!("eq.{user}"))])
            .send()
            .await?;
        check(res).await?;
        Ok(())
    }

    pub async fn update(&self, user: &str, patch: &AccountPatch) -> Result<()> {
        let res = self
            .authorize(self.http.patch(self.endpoint()?))
            .query(&[("user", format!("eq.{user}"))])
            .json(patch)
            .send()
            .await?;
        check(res).await?;
        Ok(())
    }

    /// Checks the credentials against the table and, on a match, stamps
    /// `last_login` with today's date. A failed stamp does not fail the
    /// login.
    pub async fn login(&self, user: &str, pass: &str) -> Result<Account> {
        let res = self
            .authorize(self.http.get(self.endpoint()?))
            .query(&[
                ("user", format!("eq.{user}")),
                ("pass", format!("eq.{pass}")),
                ("select", "*".to_string()),
            ])
            .send()
            .await?;
        let res = check(res).await?;
        let mut matches = res
            .json::<Vec<Account>>()
            .await
            .map_err(ClientError::Transport)?;
        if matches.is_empty() {
            return Err(ClientError::Unauthorized);
        }
        let account = matches.remove(0);

        let stamp = AccountPatch {
            last_login: Some(Utc::now().date_naive()),
            ..AccountPatch::default()
        };
        if let Err(err) = self.update(&account.user, &stamp).await {
            tracing::warn!(user = %account.user, %err, "failed to stamp last_login");
        }
        Ok(account)
    }
}

async fn check(res: Response) -> Result<Response> {
    if res.status().is_success() {
        return Ok(res);
    }
    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.message)
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(classify(status, body))
}

fn classify(status: StatusCode, body: String) -> ClientError {
    match status.as_u16() {
        401 => ClientError::Unauthorized,
        403 => ClientError::Forbidden,
        404 => ClientError::NotFound,
        409 => ClientError::Conflict(body),
        422 => ClientError::Validation(body),
        _ => ClientError::Server(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_auth_statuses() {
        assert!(matches!(
            classify(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            classify(StatusCode::FORBIDDEN, String::new()),
            ClientError::Forbidden
        ));
        assert!(matches!(
            classify(StatusCode::NOT_FOUND, String::new()),
            ClientError::NotFound
        ));
    }

    #[test]
    fn classify_keeps_service_message() {
        let err = classify(StatusCode::CONFLICT, "duplicate user".to_string());
        assert!(matches!(err, ClientError::Conflict(msg) if msg == "duplicate user"));

        let err = classify(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        assert!(matches!(err, ClientError::Server(msg) if msg == "boom"));
    }
}
