//! Authentication endpoints

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::error::ClientError;
use hris_core::domain::{LoginRequest, TokenPair, UserProfile};
use hris_core::ports::AuthGateway;
use hris_core::DomainError;
use hris_shared::constants::{AUTH_LOGIN_PATH, AUTH_PROFILE_PATH};

pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for AuthService {
    /// Credentials go out without a bearer token and never trigger a refresh;
    /// a 401 here is a rejected login, not an expired session.
    async fn login(&self, request: &LoginRequest) -> Result<TokenPair, DomainError> {
        self.api
            .post_json_unauthenticated(AUTH_LOGIN_PATH, request, "Login failed")
            .await
            .map_err(|e| match e {
                ClientError::Status { status, message } => DomainError::Request {
                    status: status.as_u16(),
                    message,
                },
                other => other.into(),
            })
    }

    async fn profile(&self) -> Result<UserProfile, DomainError> {
        Ok(self
            .api
            .get_json(AUTH_PROFILE_PATH, "Failed to fetch profile")
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hris_core::ports::{MemoryTokenStorage, NoopRedirector};
    use hris_core::ports::TokenStorage;
    use hris_shared::constants::{ACCESS_TOKEN_KEY, AUTH_REFRESH_PATH, REFRESH_TOKEN_KEY};
    use hris_shared::ApiSettings;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn service(server: &MockServer) -> AuthService {
        service_with(server, Arc::new(MemoryTokenStorage::new()))
    }

    fn service_with(server: &MockServer, storage: Arc<MemoryTokenStorage>) -> AuthService {
        let settings = ApiSettings {
            base_url: server.uri(),
            timeout_seconds: 5,
        };
        let api = ApiClient::new(&settings, storage, Arc::new(NoopRedirector)).unwrap();
        AuthService::new(Arc::new(api))
    }

    #[tokio::test]
    async fn test_login_posts_user_name_and_reads_snake_case_tokens() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(AUTH_LOGIN_PATH))
            .and(body_json(json!({ "userName": "admin", "password": "secret" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "access_token": "a", "refresh_token": "r" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let tokens = service(&server)
            .await
            .login(&LoginRequest::new("admin", "secret"))
            .await
            .unwrap();
        assert_eq!(tokens.access_token, "a");
        assert_eq!(tokens.refresh_token, "r");
    }

    #[tokio::test]
    async fn test_rejected_login_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(AUTH_LOGIN_PATH))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid credentials" })),
            )
            .mount(&server)
            .await;

        let err = service(&server)
            .await
            .login(&LoginRequest::new("admin", "nope"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Request {
                status: 400,
                message: "Invalid credentials".into()
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_credentials_leave_stored_tokens_alone() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(AUTH_LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path(AUTH_REFRESH_PATH))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let storage = Arc::new(MemoryTokenStorage::with_tokens("old", "old-refresh"));
        let err = service_with(&server, storage.clone())
            .login(&LoginRequest::new("admin", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::Request {
                status: 401,
                message: "Login failed".into()
            }
        );
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("old"));
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("old-refresh"));
    }
}
