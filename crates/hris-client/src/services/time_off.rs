// ============================================================================
// HRIS Client - Leave & Attendance Services
// File: crates/hris-client/src/services/time_off.rs
// ============================================================================
//! Leave requests, leave balances and attendance records

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{
    AttendancePage, AttendanceRecord, AttendanceSummary, CheckIn, CheckOut, CreateLeaveRequest,
    DateRangeQuery, LeaveBalance, LeaveDecision, LeaveRequest, LeaveRequestPage, LeaveType,
};

pub struct LeaveService {
    api: Arc<ApiClient>,
}

impl LeaveService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn create_request(&self, request: &CreateLeaveRequest) -> Result<LeaveRequest, ClientError> {
        self.api
            .post_json("/leave/requests", request, "Failed to create leave request")
            .await
    }

    pub async fn get_request(&self, id: Uuid) -> Result<LeaveRequest, ClientError> {
        self.api
            .get_json(&format!("/leave/requests/{}", id), "Failed to fetch leave request")
            .await
    }

    pub async fn list_requests(&self, query: &DateRangeQuery) -> Result<LeaveRequestPage, ClientError> {
        self.api
            .get_json_query("/leave/requests", query.to_params(), "Failed to fetch leave requests")
            .await
    }

    pub async fn approve(&self, id: Uuid, notes: Option<String>) -> Result<LeaveRequest, ClientError> {
        let decided: LeaveRequest = self
            .api
            .put_json(
                &format!("/leave/requests/{}/approve", id),
                &LeaveDecision { notes },
                "Failed to approve leave request",
            )
            .await?;
        info!("Leave request approved: {}", id);
        Ok(decided)
    }

    pub async fn reject(&self, id: Uuid, notes: Option<String>) -> Result<LeaveRequest, ClientError> {
        let decided: LeaveRequest = self
            .api
            .put_json(
                &format!("/leave/requests/{}/reject", id),
                &LeaveDecision { notes },
                "Failed to reject leave request",
            )
            .await?;
        info!("Leave request rejected: {}", id);
        Ok(decided)
    }

    pub async fn types(&self) -> Result<Vec<LeaveType>, ClientError> {
        self.api.get_json("/leave/types", "Failed to fetch leave types").await
    }

    pub async fn balance(&self, employee_id: Uuid) -> Result<Vec<LeaveBalance>, ClientError> {
        self.api
            .get_json(&format!("/leave/balance/{}", employee_id), "Failed to fetch leave balance")
            .await
    }
}

pub struct AttendanceService {
    api: Arc<ApiClient>,
}

impl AttendanceService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn check_in(&self, request: &CheckIn) -> Result<AttendanceRecord, ClientError> {
        self.api
            .post_json("/attendance/check-in", request, "Failed to check in")
            .await
    }

    /// `employee_id` is the staff code used at check-in, not the record id.
    pub async fn check_out(&self, employee_id: &str, request: &CheckOut) -> Result<AttendanceRecord, ClientError> {
        self.api
            .post_json(
                &format!("/attendance/check-out/{}", employee_id),
                request,
                "Failed to check out",
            )
            .await
    }

    pub async fn records(&self, query: &DateRangeQuery) -> Result<AttendancePage, ClientError> {
        self.api
            .get_json_query(
                "/attendance/records",
                query.to_params(),
                "Failed to fetch attendance records",
            )
            .await
    }

    pub async fn summary(
        &self,
        employee_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AttendanceSummary, ClientError> {
        self.api
            .get_json(
                &format!("/attendance/summary/{}/{}/{}", employee_id, start, end),
                "Failed to fetch attendance summary",
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hris_core::ports::{MemoryTokenStorage, NoopRedirector};
    use hris_shared::ApiSettings;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> Arc<ApiClient> {
        let settings = ApiSettings {
            base_url: server.uri(),
            timeout_seconds: 5,
        };
        Arc::new(
            ApiClient::new(
                &settings,
                Arc::new(MemoryTokenStorage::with_tokens("a", "r")),
                Arc::new(NoopRedirector),
            )
            .unwrap(),
        )
    }

    fn leave_json(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "employeeId": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d",
            "employeeName": "Ann Lee",
            "leaveTypeId": "1b2c3d4e-5f6a-4b7c-8d9e-0f1a2b3c4d5e",
            "leaveTypeName": "Annual",
            "startDate": "2024-03-04",
            "endDate": "2024-03-05",
            "totalDays": 2.0,
            "reason": null,
            "status": status,
            "approvedBy": null,
            "approverName": null,
            "notes": null
        })
    }

    #[tokio::test]
    async fn test_approve_without_notes_sends_empty_object() {
        let server = MockServer::start().await;
        let id = "3f1d2c4b-5a6e-4f70-8192-a3b4c5d6e7f8";
        Mock::given(method("PUT"))
            .and(path(format!("/leave/requests/{}/approve", id)))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(leave_json(id, "approved")))
            .expect(1)
            .mount(&server)
            .await;

        let decided = LeaveService::new(api(&server))
            .approve(Uuid::parse_str(id).unwrap(), None)
            .await
            .unwrap();
        assert_eq!(decided.status, "approved");
    }

    #[tokio::test]
    async fn test_reject_sends_notes() {
        let server = MockServer::start().await;
        let id = "3f1d2c4b-5a6e-4f70-8192-a3b4c5d6e7f8";
        Mock::given(method("PUT"))
            .and(path(format!("/leave/requests/{}/reject", id)))
            .and(body_json(json!({ "notes": "Peak season" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(leave_json(id, "rejected")))
            .expect(1)
            .mount(&server)
            .await;

        let decided = LeaveService::new(api(&server))
            .reject(Uuid::parse_str(id).unwrap(), Some("Peak season".into()))
            .await
            .unwrap();
        assert_eq!(decided.status, "rejected");
    }

    #[tokio::test]
    async fn test_summary_path_embeds_dates() {
        let server = MockServer::start().await;
        let id = "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d";
        Mock::given(method("GET"))
            .and(path(format!("/attendance/summary/{}/2024-03-01/2024-03-31", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "employeeId": id,
                "employeeName": "Ann Lee",
                "totalDays": 21,
                "presentDays": 19,
                "lateDays": 1,
                "absentDays": 1,
                "totalHours": 152.5
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = AttendanceService::new(api(&server))
            .summary(
                Uuid::parse_str(id).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(summary.present_days, 19);
    }

    #[tokio::test]
    async fn test_check_out_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/attendance/check-out/EMP-001"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let err = AttendanceService::new(api(&server))
            .check_out("EMP-001", &CheckOut::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to check out");
        assert_eq!(err.status().map(|s| s.as_u16()), Some(409));
    }
}
