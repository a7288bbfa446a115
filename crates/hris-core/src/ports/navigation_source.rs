//! Navigation backend port

use async_trait::async_trait;

use crate::domain::UserNavigationItem;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NavigationSource: Send + Sync {
    /// Navigation roots for the current user, in display order.
    async fn user_navigation(&self) -> Result<Vec<UserNavigationItem>, DomainError>;
}
