//! Admin-only operations: usage reporting and account provisioning.

use reqwest::Method;
use serde_json::{Map, Value};

use pat_protocol::{Account, NewUser, UsageEntry};

use crate::client::Client;
use crate::error::Error;

impl Client {
    /// Per-account storage usage across the instance.
    pub async fn usage_report(&self) -> Result<Vec<UsageEntry>, Error> {
        self.request(Method::GET, "/v1/admin/usage", &[], None).await
    }

    /// Provisions a new account.
    pub async fn create_user(&self, user: &NewUser) -> Result<Account, Error> {
        let mut body = Map::new();
        body.insert("username".to_string(), user.username.clone().into());
        body.insert("password".to_string(), user.password.clone().into());
        if !user.email.is_empty() {
            body.insert("email".to_string(), user.email.clone().into());
        }
        body.insert("admin".to_string(), user.admin.into());
        self.request(Method::POST, "/v1/admin/mkuser", &[], Some(Value::Object(body)))
            .await
    }
}
