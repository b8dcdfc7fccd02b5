//! Login and logout.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wasatext_core::SessionCredential;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpBackend;
use crate::request::Request;
use crate::url::SESSION_PATH;

use super::ApiClient;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
}

/// The backend answers with a numeric identifier; older builds sent a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Identifier {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
struct LoginResponse {
    identifier: Identifier,
}

impl<B: HttpBackend> ApiClient<B> {
    /// Log in or register `username` and store the credential in the session.
    pub async fn login(&self, username: &str) -> ClientResult<SessionCredential> {
        let request = Request::post(SESSION_PATH).json(&LoginRequest { username })?;
        let response: LoginResponse = self.call(request).await?;

        let raw = match response.identifier {
            Identifier::Number(n) => n.to_string(),
            Identifier::Text(s) => s,
        };
        let credential =
            SessionCredential::try_from(raw).map_err(|e| ClientError::InvalidResponse {
                message: format!("login returned an unusable identifier: {e}"),
            })?;

        self.session.sign_in(&credential);
        info!(username, "signed in");
        Ok(credential)
    }

    /// Forget the session credential.
    pub fn logout(&self) {
        self.session.sign_out();
        debug!("signed out");
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::fake_client;
    use crate::error::ClientError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;
    use wasatext_core::Session;

    #[tokio::test]
    async fn test_login_stores_numeric_identifier() {
        let backend = FakeBackend::new()
            .with_response("/session", CannedResponse::ok(json!({"identifier": 42})));
        let session = Session::ephemeral();
        let client = fake_client(session.clone(), backend.clone());

        let credential = client.login("alice").await.unwrap();

        assert_eq!(credential.expose(), "42");
        assert_eq!(session.credential().unwrap().expose(), "42");
        let sent = backend.last_request();
        assert_eq!(sent.body, Some(json!({"username": "alice"})));
        assert!(sent.headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_login_accepts_string_identifier() {
        let backend = FakeBackend::new()
            .with_response("/session", CannedResponse::ok(json!({"identifier": "abc123"})));
        let client = fake_client(Session::ephemeral(), backend);

        let credential = client.login("alice").await.unwrap();
        assert_eq!(credential.expose(), "abc123");
    }

    #[tokio::test]
    async fn test_login_rejects_empty_identifier() {
        let backend = FakeBackend::new()
            .with_response("/session", CannedResponse::ok(json!({"identifier": ""})));
        let session = Session::ephemeral();
        let client = fake_client(session.clone(), backend);

        let err = client.login("alice").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse { .. }));
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_session() {
        let backend = FakeBackend::new().with_response(
            "/session",
            CannedResponse::Json {
                status: 400,
                json: json!({"error": "name must be between 3 and 16 characters"}),
            },
        );
        let session = crate::client::tests::signed_in_session("old");
        let client = fake_client(session.clone(), backend);

        let err = client.login("al").await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(session.credential().unwrap().expose(), "old");
    }

    #[tokio::test]
    async fn test_logout_clears_session_without_request() {
        let backend = FakeBackend::new();
        let session = crate::client::tests::signed_in_session("abc123");
        let client = fake_client(session.clone(), backend.clone());

        client.logout();

        assert!(!session.is_signed_in());
        assert!(backend.requests().is_empty());
    }
}
