//! Departments, positions, persons, users and permissions

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hris_shared::{Pagination, QueryParams};

/// Departments and positions share one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgUnit {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

pub type Department = OrgUnit;
pub type Position = OrgUnit;

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrgUnit {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrgUnit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePerson {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PersonQuery {
    pub pagination: Option<Pagination>,
    pub search: Option<String>,
}

impl PersonQuery {
    /// The person list takes `page_size`, unlike the staff lists.
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("page", self.pagination.map(|p| p.page))
            .push_opt("page_size", self.pagination.map(|p| p.page_size))
            .push_opt("search", self.search.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonPage {
    pub persons: Vec<Person>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub person_id: Uuid,
    #[validate(length(min = 1, message = "Username is required"))]
    pub user_name: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    pub phone: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: Uuid,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub position_id: Option<Uuid>,
    pub position_name: Option<String>,
    pub navigation_item_id: Uuid,
    pub navigation_name: String,
    pub navigation_path: String,
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignPermission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<Uuid>,
    pub navigation_item_id: Uuid,
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PermissionFilter {
    pub department_id: Option<Uuid>,
    pub position_id: Option<Uuid>,
    pub navigation_item_id: Option<Uuid>,
}

impl PermissionFilter {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("department_id", self.department_id)
            .push_opt("position_id", self.position_id)
            .push_opt("navigation_item_id", self.navigation_item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_query_uses_snake_case_page_size() {
        let query = PersonQuery {
            pagination: Some(Pagination::new(1, 10)),
            search: None,
        };
        assert_eq!(
            query.to_params(),
            QueryParams::new().push("page", 1).push("page_size", 10)
        );
    }

    #[test]
    fn test_create_user_validation() {
        let user = CreateUser {
            person_id: Uuid::new_v4(),
            user_name: "jdoe".into(),
            password: String::new(),
            email: "not-an-email".into(),
            phone: "555".into(),
            is_admin: false,
        };
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
        assert!(errors.field_errors().contains_key("email"));
    }
}
