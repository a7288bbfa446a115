// ============================================================================
// HRIS Client - Staff Services
// File: crates/hris-client/src/services/staff.rs
// ============================================================================
//! Employee and intern endpoints, including face descriptor enrollment

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{
    CreateEmployee, CreateIntern, Employee, EmployeePage, FaceDescriptorUpdate, Intern, InternPage,
    StaffQuery, UpdateEmployee, UpdateIntern,
};
use hris_core::domain::{FaceDescriptor, LabeledDescriptors};

pub struct EmployeeService {
    api: Arc<ApiClient>,
}

impl EmployeeService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &StaffQuery) -> Result<EmployeePage, ClientError> {
        self.api
            .get_json_query("/employees", query.to_params(), "Failed to fetch employees")
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Employee, ClientError> {
        self.api
            .get_json(&format!("/employees/{}", id), "Failed to fetch employee")
            .await
    }

    pub async fn create(&self, employee: &CreateEmployee) -> Result<Employee, ClientError> {
        let created: Employee = self
            .api
            .post_json("/employees", employee, "Failed to create employee")
            .await?;
        info!("Employee created: {}", created.employee_id);
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, changes: &UpdateEmployee) -> Result<Employee, ClientError> {
        self.api
            .put_json(&format!("/employees/{}", id), changes, "Failed to update employee")
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.api
            .delete_unit(&format!("/employees/{}", id), "Failed to delete employee")
            .await
    }

    /// Enroll a face descriptor, sent as JSON array text.
    pub async fn update_face_descriptor(&self, id: Uuid, descriptor: &FaceDescriptor) -> Result<(), ClientError> {
        let body = FaceDescriptorUpdate {
            descriptor: descriptor.to_json(),
        };
        self.api
            .post_unit(
                &format!("/employees/{}/face-descriptor", id),
                &body,
                "Failed to update face descriptor",
            )
            .await
    }

    /// Every enrolled descriptor, grouped by label for matching.
    pub async fn face_descriptors(&self) -> Result<Vec<LabeledDescriptors>, ClientError> {
        let rows: Vec<(String, String)> = self
            .api
            .get_json("/employees/config/descriptors", "Failed to fetch face descriptors")
            .await?;
        Ok(LabeledDescriptors::from_rows(rows))
    }
}

pub struct InternService {
    api: Arc<ApiClient>,
}

impl InternService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &StaffQuery) -> Result<InternPage, ClientError> {
        self.api
            .get_json_query("/interns", query.to_params(), "Failed to fetch interns")
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Intern, ClientError> {
        self.api
            .get_json(&format!("/interns/{}", id), "Failed to fetch intern")
            .await
    }

    pub async fn create(&self, intern: &CreateIntern) -> Result<Intern, ClientError> {
        self.api
            .post_json("/interns", intern, "Failed to create intern")
            .await
    }

    pub async fn update(&self, id: Uuid, changes: &UpdateIntern) -> Result<Intern, ClientError> {
        self.api
            .put_json(&format!("/interns/{}", id), changes, "Failed to update intern")
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.api
            .delete_unit(&format!("/interns/{}", id), "Failed to delete intern")
            .await
    }
}
