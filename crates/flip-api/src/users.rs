//! Account registration and login.
//!
//! Both calls are opaque to the storefront: credentials go out, a public
//! profile (or a server-provided failure message) comes back. No tokens or
//! session protocol are modeled here.

use crate::transport::{HttpTransport, Request, Response, Transport};
use crate::ApiError;
use flip_commerce::account::UserProfile;
use flip_commerce::ids::UserId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    id: i64,
    email: String,
    #[serde(default)]
    name: Option<String>,
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        UserProfile::new(UserId::new(record.id.to_string()), record.email, record.name)
    }
}

/// Login responses wrap the profile in a `user` envelope.
#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    user: UserRecord,
}

/// Failure responses carry a human-readable message.
#[derive(Debug, Deserialize)]
struct FailureMessage {
    message: String,
}

/// Client for the remote user service.
pub struct AccountClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl AccountClient {
    /// Create a client against a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Arc::new(HttpTransport::new()))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Register a new account.
    pub async fn register(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let url = format!("{}/users/register", self.base_url);
        let request = Request::post_json(&url, &Credentials { email, password })?;
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(rejection(&response));
        }
        let record: UserRecord = response.json()?;
        Ok(record.into())
    }

    /// Log in to an existing account.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let url = format!("{}/users/login", self.base_url);
        let request = Request::post_json(&url, &Credentials { email, password })?;
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(rejection(&response));
        }
        let envelope: LoginEnvelope = response.json()?;
        Ok(envelope.user.into())
    }
}

/// Map a non-2xx account response to an error, preferring the server's own
/// `{message}` when it sent one.
fn rejection(response: &Response) -> ApiError {
    match response.json::<FailureMessage>() {
        Ok(failure) => ApiError::Rejected(failure.message),
        Err(_) => ApiError::Http {
            status: response.status,
            message: response.text(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::ScriptedTransport;

    fn client(transport: Arc<ScriptedTransport>) -> AccountClient {
        AccountClient::with_transport("http://api.test", transport)
    }

    #[tokio::test]
    async fn test_register_success() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(Response::new(
            201,
            br#"{"id": 7, "email": "ada@example.com", "name": "Ada"}"#.to_vec(),
        ))]));
        let profile = client(transport)
            .register("ada@example.com", "hunter2")
            .await
            .unwrap();

        assert_eq!(profile.id, UserId::new("7"));
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.display_name(), "Ada");
    }

    #[tokio::test]
    async fn test_register_failure_surfaces_server_message() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(Response::new(
            409,
            br#"{"message": "Email already registered"}"#.to_vec(),
        ))]));
        let result = client(transport).register("ada@example.com", "pw").await;

        match result {
            Err(ApiError::Rejected(message)) => assert_eq!(message, "Email already registered"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_unwraps_user_envelope() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(Response::new(
            200,
            br#"{"user": {"id": 7, "email": "ada@example.com"}}"#.to_vec(),
        ))]));
        let profile = client(transport)
            .login("ada@example.com", "hunter2")
            .await
            .unwrap();

        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.display_name(), "ada@example.com");
    }

    #[tokio::test]
    async fn test_login_failure_without_message_body() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(Response::new(
            500,
            b"gateway timeout".to_vec(),
        ))]));
        let result = client(transport).login("ada@example.com", "pw").await;
        assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
    }
}
