//! Authentication backend port

use async_trait::async_trait;

use crate::domain::{LoginRequest, TokenPair, UserProfile};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<TokenPair, DomainError>;

    /// `GET /auth/me` using whatever access token is stored
    async fn profile(&self) -> Result<UserProfile, DomainError>;
}
