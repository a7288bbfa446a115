//! Navigation endpoints

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::ClientError;
use hris_core::domain::{CreateNavigationItem, NavigationItem, UpdateNavigationItem, UserNavigationItem};
use hris_core::ports::NavigationSource;
use hris_core::DomainError;
use hris_shared::constants::NAVIGATION_USER_PATH;
use hris_shared::QueryParams;

pub struct NavigationService {
    api: Arc<ApiClient>,
}

impl NavigationService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// All items, optionally filtered by the active flag.
    pub async fn list(&self, is_active: Option<bool>) -> Result<Vec<NavigationItem>, ClientError> {
        let query = QueryParams::new().push_opt("is_active", is_active);
        self.api
            .get_json_query("/navigation", query, "Failed to fetch navigation")
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<NavigationItem, ClientError> {
        self.api
            .get_json(&format!("/navigation/{}", id), "Failed to fetch navigation item")
            .await
    }

    pub async fn create(&self, item: &CreateNavigationItem) -> Result<NavigationItem, ClientError> {
        self.api
            .post_json("/navigation", item, "Failed to create navigation item")
            .await
    }

    pub async fn update(&self, id: Uuid, changes: &UpdateNavigationItem) -> Result<NavigationItem, ClientError> {
        self.api
            .put_json(&format!("/navigation/{}", id), changes, "Failed to update navigation item")
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.api
            .delete_unit(&format!("/navigation/{}", id), "Failed to delete navigation item")
            .await
    }
}

#[async_trait]
impl NavigationSource for NavigationService {
    async fn user_navigation(&self) -> Result<Vec<UserNavigationItem>, DomainError> {
        Ok(self
            .api
            .get_json(NAVIGATION_USER_PATH, "Failed to fetch user navigation")
            .await?)
    }
}
