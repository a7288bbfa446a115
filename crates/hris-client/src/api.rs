// ============================================================================
// HRIS Client - API Client
// File: crates/hris-client/src/api.rs
// ============================================================================
//! Authenticated HTTP client.
//!
//! Every request carries the stored bearer token. A 401 triggers at most one
//! token refresh followed by one retry; when no refresh is possible the
//! session is force-logged-out.

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{ensure_success, read_json, ClientError};
use hris_core::domain::{RefreshRequest, TokenPair};
use hris_core::ports::token_storage::{access_token, refresh_token};
use hris_core::ports::{clear_session_tokens, store_session_tokens, Redirector, TokenStorage};
use hris_shared::constants::{AUTH_REFRESH_PATH, LOGIN_ROUTE};
use hris_shared::utils::{is_absolute_url, redact};
use hris_shared::{ApiSettings, QueryParams};

/// Callback run after a forced logout has cleared the tokens.
pub type LogoutHook = Arc<dyn Fn() + Send + Sync>;

/// Extra per-request settings.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub query: QueryParams,
}

impl RequestOptions {
    pub fn with_query(query: QueryParams) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    storage: Arc<dyn TokenStorage>,
    redirector: Arc<dyn Redirector>,
    logout_hooks: RwLock<Vec<LogoutHook>>,
}

impl ApiClient {
    pub fn new(
        settings: &ApiSettings,
        storage: Arc<dyn TokenStorage>,
        redirector: Arc<dyn Redirector>,
    ) -> Result<Self, ClientError> {
        if settings.base_url.trim().is_empty() {
            return Err(ClientError::Config("api.base_url is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            storage,
            redirector,
            logout_hooks: RwLock::new(Vec::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn storage(&self) -> &Arc<dyn TokenStorage> {
        &self.storage
    }

    /// Register a callback for forced logouts, e.g. to reset the session store.
    pub fn on_forced_logout(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.logout_hooks.write().push(Arc::new(hook));
    }

    /// Absolute URLs pass through; anything else is joined to the base URL.
    pub fn resolve_url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Send a request, refreshing the token once on 401.
    ///
    /// A network failure on the original request is returned as an error. A
    /// failed refresh is not: it forces a logout and the original 401 response
    /// is returned instead.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        options: &RequestOptions,
    ) -> Result<Response, ClientError> {
        let url = self.resolve_url(path);
        let token = access_token(self.storage.as_ref());

        debug!("{} {}", method, url);
        let response = self
            .send(&method, &url, body.as_deref(), options, token.as_deref())
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED || !self.storage.is_available() {
            return Ok(response);
        }

        let Some(refresh) = refresh_token(self.storage.as_ref()) else {
            warn!("401 from {} with no refresh token", url);
            self.force_logout();
            return Ok(response);
        };

        match self.refresh_tokens(&refresh).await {
            Ok(tokens) => {
                store_session_tokens(self.storage.as_ref(), &tokens);
                debug!("Retrying {} {} with refreshed token", method, url);
                self.send(&method, &url, body.as_deref(), options, Some(&tokens.access_token))
                    .await
            }
            Err(e) => {
                warn!("Token refresh failed: {}", e);
                self.force_logout();
                Ok(response)
            }
        }
    }

    pub async fn get(&self, path: &str) -> Result<Response, ClientError> {
        self.request(Method::GET, path, None, &RequestOptions::default())
            .await
    }

    pub async fn get_with_query(&self, path: &str, query: QueryParams) -> Result<Response, ClientError> {
        self.request(Method::GET, path, None, &RequestOptions::with_query(query))
            .await
    }

    /// Send without a bearer token and outside the refresh protocol.
    ///
    /// Used for credential exchanges, where a 401 means rejected credentials
    /// rather than an expired session.
    pub async fn request_unauthenticated(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        options: &RequestOptions,
    ) -> Result<Response, ClientError> {
        let url = self.resolve_url(path);
        debug!("{} {} (unauthenticated)", method, url);
        self.send(&method, &url, body.as_deref(), options, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, ClientError> {
        let body = serde_json::to_vec(body)?;
        self.request(Method::POST, path, Some(body), &RequestOptions::default())
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, ClientError> {
        let body = serde_json::to_vec(body)?;
        self.request(Method::PUT, path, Some(body), &RequestOptions::default())
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ClientError> {
        self.request(Method::DELETE, path, None, &RequestOptions::default())
            .await
    }

    // JSON conveniences used by the entity services. `context` is the message
    // reported when the server gives none.

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T, ClientError> {
        read_json(self.get(path).await?, context).await
    }

    pub async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryParams,
        context: &str,
    ) -> Result<T, ClientError> {
        read_json(self.get_with_query(path, query).await?, context).await
    }

    pub async fn post_json_unauthenticated<B, T>(&self, path: &str, body: &B, context: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)?;
        let response = self
            .request_unauthenticated(Method::POST, path, Some(body), &RequestOptions::default())
            .await?;
        read_json(response, context).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B, context: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        read_json(self.post(path, body).await?, context).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B, context: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        read_json(self.put(path, body).await?, context).await
    }

    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B, context: &str) -> Result<(), ClientError> {
        ensure_success(self.post(path, body).await?, context).await?;
        Ok(())
    }

    pub async fn delete_unit(&self, path: &str, context: &str) -> Result<(), ClientError> {
        ensure_success(self.delete(path).await?, context).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: &Method,
        url: &str,
        body: Option<&[u8]>,
        options: &RequestOptions,
        token: Option<&str>,
    ) -> Result<Response, ClientError> {
        let mut builder = self
            .http
            .request(method.clone(), url)
            .headers(options.headers.clone());

        if !options.query.is_empty() {
            builder = builder.query(options.query.pairs());
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        Ok(builder.send().await?)
    }

    /// Exchange the refresh token for a new pair.
    async fn refresh_tokens(&self, refresh: &str) -> Result<TokenPair, ClientError> {
        debug!("Refreshing access token with {}", redact(refresh));
        let tokens: TokenPair = self
            .post_json_unauthenticated(
                AUTH_REFRESH_PATH,
                &RefreshRequest {
                    refresh_token: refresh,
                },
                "Token refresh failed",
            )
            .await?;
        info!("Access token refreshed");
        Ok(tokens)
    }

    /// Clear both tokens, notify hooks and redirect to the login view.
    pub fn force_logout(&self) {
        clear_session_tokens(self.storage.as_ref());
        let hooks = self.logout_hooks.read().clone();
        for hook in hooks {
            hook();
        }
        warn!("Session ended, redirecting to {}", LOGIN_ROUTE);
        self.redirector.redirect(LOGIN_ROUTE);
    }
}
