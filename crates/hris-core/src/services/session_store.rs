// ============================================================================
// HRIS Core - Session Store
// File: crates/hris-core/src/services/session_store.rs
// ============================================================================
//! Session lifecycle: restore from stored tokens, login and logout

use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{LoginRequest, Session, SessionState, TokenPair, UserProfile};
use crate::error::DomainError;
use crate::ports::token_storage::{access_token, refresh_token};
use crate::ports::{clear_session_tokens, store_session_tokens, AuthGateway, Redirector, TokenStorage};
use crate::store::Store;
use hris_shared::constants::LOGIN_ROUTE;

pub struct SessionStore<A: AuthGateway> {
    auth: Arc<A>,
    storage: Arc<dyn TokenStorage>,
    redirector: Arc<dyn Redirector>,
    session: Store<Session>,
}

impl<A: AuthGateway> SessionStore<A> {
    pub fn new(
        auth: Arc<A>,
        storage: Arc<dyn TokenStorage>,
        redirector: Arc<dyn Redirector>,
    ) -> Self {
        Self {
            auth,
            storage,
            redirector,
            session: Store::new(Session::anonymous()),
        }
    }

    /// Observable session handle.
    pub fn session(&self) -> Store<Session> {
        self.session.clone()
    }

    pub fn state(&self) -> SessionState {
        self.session.with(Session::state)
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.session.with(|s| s.user.clone())
    }

    /// Restore the session from stored tokens.
    ///
    /// Without a stored access token this resolves to anonymous without any
    /// network call. A failed profile fetch also resolves to anonymous; when
    /// the failure was an unrecoverable 401 the HTTP layer has already cleared
    /// the tokens.
    pub async fn init(&self) -> SessionState {
        let Some(access) = access_token(self.storage.as_ref()) else {
            self.session.set(Session::anonymous());
            return SessionState::Anonymous;
        };

        self.session.set(Session::loading());
        match self.auth.profile().await {
            Ok(user) => {
                info!("Session restored for {}", user.user_name);
                // The HTTP layer may have rotated the pair while fetching the profile
                let tokens = TokenPair {
                    access_token: access_token(self.storage.as_ref()).unwrap_or(access),
                    refresh_token: refresh_token(self.storage.as_ref()).unwrap_or_default(),
                };
                self.session.set(Session::authenticated(tokens, user));
                SessionState::Authenticated
            }
            Err(e) => {
                warn!("Could not restore session: {}", e);
                self.session.set(Session::anonymous());
                SessionState::Anonymous
            }
        }
    }

    /// Authenticate with credentials. Failures are returned to the caller.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<UserProfile, DomainError> {
        let request = LoginRequest::new(user_name, password);
        self.session.set(Session::loading());

        if let Err(e) = request.validate() {
            self.session.set(Session::anonymous());
            return Err(e.into());
        }
        info!("Login attempt for {}", request.user_name);

        let tokens = match self.auth.login(&request).await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("Login failed for {}: {}", request.user_name, e);
                self.session.set(Session::anonymous());
                return Err(e);
            }
        };
        store_session_tokens(self.storage.as_ref(), &tokens);

        match self.auth.profile().await {
            Ok(user) => {
                info!("Login successful for {}", user.user_name);
                self.session
                    .set(Session::authenticated(tokens, user.clone()));
                Ok(user)
            }
            Err(e) => {
                warn!("Profile fetch after login failed: {}", e);
                clear_session_tokens(self.storage.as_ref());
                self.session.set(Session::anonymous());
                Err(e)
            }
        }
    }

    /// Explicit logout: clear tokens, reset state and go to the login view.
    pub fn logout(&self) {
        clear_session_tokens(self.storage.as_ref());
        self.session.set(Session::anonymous());
        info!("Logged out");
        self.redirector.redirect(LOGIN_ROUTE);
    }

    /// Reset the in-memory session after the HTTP layer forced a logout.
    pub fn reset_to_anonymous(&self) {
        self.session.set(Session::anonymous());
    }
}
