//! Auth API.

use serde_json::Value;

use crate::client::MindgardenClient;
use crate::error::{Error, Result};
use crate::types::AuthRequest;

/// Auth API client.
pub struct AuthApi {
    client: MindgardenClient,
}

impl AuthApi {
    pub(crate) fn new(client: MindgardenClient) -> Self {
        Self { client }
    }

    /// Log in and persist the returned token.
    ///
    /// Fails with [`Error::Shape`] when the HTTP call succeeds but the
    /// token field is missing or not a string; the stored token is left
    /// untouched in that case.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let request = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body: Value = self
            .client
            .post_raw(self.client.login_path(), &request)
            .await?;

        let field = self.client.token_field();
        let token = match body.get(field).and_then(Value::as_str) {
            Some(token) => token.to_string(),
            None => {
                return Err(Error::Shape(format!(
                    "login response is missing \"{field}\""
                )));
            }
        };

        self.client.session().set_token(&token);
        Ok(token)
    }

    /// Create an account. The response body is not validated.
    pub async fn signup(&self, email: &str, password: &str) -> Result<()> {
        let request = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post_unit("/auth/signup", &request).await
    }

    /// Drop the local session: the token and the cached tier.
    ///
    /// Local only; no network call is made.
    pub fn logout(&self) {
        self.client.session().clear();
    }
}
