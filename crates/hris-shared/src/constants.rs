//! Application-wide constants

/// Durable storage key holding the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Durable storage key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_PROFILE_PATH: &str = "/auth/me";
pub const AUTH_REFRESH_PATH: &str = "/auth/refresh";
pub const NAVIGATION_USER_PATH: &str = "/navigation/user";

/// Route every logout path redirects to.
pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/admin/dashboard";
pub const HELP_CENTER_URL: &str = "https://example.com/help";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_STORAGE_PATH: &str = ".hris/session.json";
pub const LOG_FILE_PREFIX: &str = "hris.log";

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Mean euclidean distance above which a face is reported as unknown.
pub const FACE_MATCH_THRESHOLD: f32 = 0.6;
pub const FACE_DESCRIPTOR_LEN: usize = 128;
