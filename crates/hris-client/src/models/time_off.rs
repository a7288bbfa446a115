//! Leave and attendance payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hris_shared::{Pagination, QueryParams};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub max_days_per_year: Option<i32>,
    pub requires_approval: bool,
    pub carry_forward: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub leave_type_id: Uuid,
    pub leave_type_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: f64,
    pub reason: Option<String>,
    pub status: String,
    pub approved_by: Option<Uuid>,
    pub approver_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub employee_id: Uuid,
    pub leave_type_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body for approve and reject; `{}` when no notes are given.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeaveDecision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestPage {
    pub requests: Vec<LeaveRequest>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    pub employee_id: Uuid,
    pub leave_type_id: Uuid,
    pub leave_type_name: String,
    pub total_allowed: i32,
    pub used: f64,
    pub remaining: f64,
}

/// Filters shared by the leave-request and attendance lists.
#[derive(Debug, Clone, Default)]
pub struct DateRangeQuery {
    pub pagination: Option<Pagination>,
    pub employee_id: Option<Uuid>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRangeQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("page", self.pagination.map(|p| p.page))
            .push_opt("pageSize", self.pagination.map(|p| p.page_size))
            .push_opt("employeeId", self.employee_id)
            .push_opt("status", self.status.as_deref())
            .push_opt("startDate", self.start_date)
            .push_opt("endDate", self.end_date)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub total_hours: Option<f64>,
    pub status: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub check_in_image: Option<String>,
    #[serde(default)]
    pub check_in_lat: Option<f64>,
    #[serde(default)]
    pub check_in_long: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub employee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Base64 snapshot taken at check-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// e.g. `"face"` or `"manual"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckOut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePage {
    pub records: Vec<AttendanceRecord>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub total_days: i64,
    pub present_days: i64,
    pub late_days: i64,
    pub absent_days: i64,
    pub total_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_params() {
        let query = DateRangeQuery {
            status: Some("pending".into()),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        assert_eq!(
            query.to_params(),
            QueryParams::new()
                .push("status", "pending")
                .push("startDate", "2024-03-01")
        );
    }

    #[test]
    fn test_empty_decision_serializes_as_empty_object() {
        let body = serde_json::to_string(&LeaveDecision::default()).unwrap();
        assert_eq!(body, "{}");
    }
}
