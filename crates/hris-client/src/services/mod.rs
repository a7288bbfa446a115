//! Endpoint services built on [`crate::api::ApiClient`]

pub mod auth;
pub mod navigation;
pub mod organization;
pub mod staff;
pub mod time_off;

pub use auth::AuthService;
pub use navigation::NavigationService;
pub use organization::{OrgUnitService, PermissionService, PersonService, UserService};
pub use staff::{EmployeeService, InternService};
pub use time_off::{AttendanceService, LeaveService};
