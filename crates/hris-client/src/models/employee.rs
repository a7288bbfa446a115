//! Employee and intern payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hris_shared::{Pagination, QueryParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub employee_id: String,
    pub person_id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hire_date: NaiveDate,
    pub employment_type: Option<String>,
    pub salary: Option<f64>,
    pub manager_id: Option<Uuid>,
    pub status: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, self.middle_name.as_deref(), &self.last_name)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub employee_id: String,
    pub person_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Uuid>,
    pub hire_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    pub employees: Vec<Employee>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Filters for the employee and intern lists.
#[derive(Debug, Clone, Default)]
pub struct StaffQuery {
    pub pagination: Option<Pagination>,
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
}

impl StaffQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("page", self.pagination.map(|p| p.page))
            .push_opt("pageSize", self.pagination.map(|p| p.page_size))
            .push_opt("search", self.search.as_deref())
            .push_opt("department", self.department.as_deref())
            .push_opt("status", self.status.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FaceDescriptorUpdate {
    /// JSON array text, stored verbatim by the backend
    pub descriptor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intern {
    pub id: Uuid,
    pub intern_id: String,
    pub person_id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub supervisor_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub stipend: Option<f64>,
    pub university: Option<String>,
    pub status: String,
}

impl Intern {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, self.middle_name.as_deref(), &self.last_name)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntern {
    pub intern_id: String,
    pub person_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<Uuid>,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stipend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIntern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stipend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternPage {
    pub interns: Vec<Intern>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

fn full_name(first: &str, middle: Option<&str>, last: &str) -> String {
    match middle.filter(|m| !m.is_empty()) {
        Some(middle) => format!("{} {} {}", first, middle, last),
        None => format!("{} {}", first, last),
    }
}
