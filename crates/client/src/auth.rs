//! Session and account operations.

use reqwest::Method;
use serde_json::json;

use pat_protocol::{Account, Ack, SessionToken};

use crate::client::Client;
use crate::error::Error;

impl Client {
    /// Returns whether the server accepts the current token.
    ///
    /// Any dispatch failure — rejected token, network trouble, server
    /// error — reads as `false`. This is the only method that swallows
    /// errors; everything else propagates them.
    pub async fn check_auth(&self) -> bool {
        self.request::<Ack>(Method::GET, "/v1/auth/check", &[], None)
            .await
            .is_ok()
    }

    /// Exchanges credentials for a bearer token.
    ///
    /// The token is returned, not stored; pass it to
    /// [`Client::set_token`] to authenticate subsequent calls.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken, Error> {
        let body = json!({ "username": username, "password": password });
        self.request(Method::POST, "/v1/auth/login", &[], Some(body)).await
    }

    /// Starts a password reset for the given account.
    pub async fn request_reset(&self, username: &str) -> Result<Ack, Error> {
        let body = json!({ "username": username });
        self.request(Method::POST, "/v1/auth/reset", &[], Some(body)).await
    }

    /// Completes a password reset with the emailed reset token.
    pub async fn complete_reset(
        &self,
        reset_token: &str,
        new_password: &str,
    ) -> Result<Ack, Error> {
        let body = json!({ "resetToken": reset_token, "newPassword": new_password });
        self.request(Method::POST, "/v1/auth/reset/complete", &[], Some(body))
            .await
    }

    /// Invalidates every outstanding token for the account.
    ///
    /// The token this client holds stops working too; call
    /// [`Client::clear_token`] or [`Client::set_token`] afterwards.
    pub async fn invalidate_sessions(&self) -> Result<Ack, Error> {
        self.request(Method::GET, "/v1/auth/invalidate", &[], None).await
    }

    /// Replaces the account's token, invalidating the current one.
    pub async fn regenerate_token(&self) -> Result<SessionToken, Error> {
        self.request(Method::GET, "/v1/auth/regenerate", &[], None).await
    }

    /// Fetches the authenticated account's profile.
    pub async fn me(&self) -> Result<Account, Error> {
        self.request(Method::GET, "/v1/me", &[], None).await
    }

    /// Points a custom domain at the account's public files.
    pub async fn set_domain(&self, domain: &str) -> Result<Account, Error> {
        let body = json!({ "domain": domain });
        self.request(Method::POST, "/v1/domain", &[], Some(body)).await
    }
}
