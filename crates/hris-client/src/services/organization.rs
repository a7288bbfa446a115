// ============================================================================
// HRIS Client - Organization Services
// File: crates/hris-client/src/services/organization.rs
// ============================================================================
//! Departments, positions, persons, user accounts and permission grants

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{
    AssignPermission, CreateOrgUnit, CreatePerson, CreateUser, OrgUnit, Permission, PermissionFilter,
    Person, PersonPage, PersonQuery, UpdateOrgUnit, UpdatePerson,
};
use hris_core::domain::UserProfile;
use hris_core::DomainError;
use hris_shared::QueryParams;

/// CRUD over one org-unit collection (`/departments` or `/positions`).
pub struct OrgUnitService {
    api: Arc<ApiClient>,
    resource: &'static str,
    label: &'static str,
}

impl OrgUnitService {
    pub fn departments(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            resource: "/departments",
            label: "department",
        }
    }

    pub fn positions(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            resource: "/positions",
            label: "position",
        }
    }

    pub async fn list(&self, is_active: Option<bool>) -> Result<Vec<OrgUnit>, ClientError> {
        let query = QueryParams::new().push_opt("is_active", is_active);
        self.api
            .get_json_query(self.resource, query, &format!("Failed to fetch {}s", self.label))
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<OrgUnit, ClientError> {
        self.api
            .get_json(&self.item_path(id), &format!("Failed to fetch {}", self.label))
            .await
    }

    pub async fn create(&self, unit: &CreateOrgUnit) -> Result<OrgUnit, ClientError> {
        self.api
            .post_json(self.resource, unit, &format!("Failed to create {}", self.label))
            .await
    }

    pub async fn update(&self, id: Uuid, changes: &UpdateOrgUnit) -> Result<OrgUnit, ClientError> {
        self.api
            .put_json(&self.item_path(id), changes, &format!("Failed to update {}", self.label))
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.api
            .delete_unit(&self.item_path(id), &format!("Failed to delete {}", self.label))
            .await
    }

    fn item_path(&self, id: Uuid) -> String {
        format!("{}/{}", self.resource, id)
    }
}

pub struct PersonService {
    api: Arc<ApiClient>,
}

impl PersonService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &PersonQuery) -> Result<PersonPage, ClientError> {
        self.api
            .get_json_query("/persons", query.to_params(), "Failed to fetch persons")
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Person, ClientError> {
        self.api
            .get_json(&format!("/persons/{}", id), "Failed to fetch person")
            .await
    }

    pub async fn create(&self, person: &CreatePerson) -> Result<Person, ClientError> {
        self.api
            .post_json("/persons", person, "Failed to create person")
            .await
    }

    pub async fn update(&self, id: Uuid, changes: &UpdatePerson) -> Result<Person, ClientError> {
        self.api
            .put_json(&format!("/persons/{}", id), changes, "Failed to update person")
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.api
            .delete_unit(&format!("/persons/{}", id), "Failed to delete person")
            .await
    }
}

pub struct UserService {
    api: Arc<ApiClient>,
}

impl UserService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<UserProfile>, DomainError> {
        Ok(self.api.get_json("/users", "Failed to fetch users").await?)
    }

    /// Validated locally before anything is sent.
    pub async fn create(&self, user: &CreateUser) -> Result<UserProfile, DomainError> {
        user.validate()?;
        let created: UserProfile = self
            .api
            .post_json("/users", user, "Failed to create user")
            .await?;
        info!("User account created: {}", created.user_name);
        Ok(created)
    }
}

pub struct PermissionService {
    api: Arc<ApiClient>,
}

impl PermissionService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, filter: &PermissionFilter) -> Result<Vec<Permission>, ClientError> {
        self.api
            .get_json_query("/permissions", filter.to_params(), "Failed to fetch permissions")
            .await
    }

    pub async fn assign(&self, grant: &AssignPermission) -> Result<(), ClientError> {
        self.api
            .post_unit("/permissions", grant, "Failed to assign permission")
            .await
    }

    pub async fn revoke(&self, id: Uuid) -> Result<(), ClientError> {
        self.api
            .delete_unit(&format!("/permissions/{}", id), "Failed to delete permission")
            .await
    }
}
