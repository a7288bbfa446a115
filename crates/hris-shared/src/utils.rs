//! Utility functions

/// Short, log-safe rendering of a credential.
pub fn redact(secret: &str) -> String {
    let prefix: String = secret.chars().take(6).collect();
    if secret.chars().count() <= 6 {
        "***".to_string()
    } else {
        format!("{}***", prefix)
    }
}

/// Absolute URLs bypass the configured API base.
pub fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_keeps_prefix_only() {
        assert_eq!(redact("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJhbG***");
        assert_eq!(redact("short"), "***");
    }

    #[test]
    fn test_absolute_url_detection() {
        assert!(is_absolute_url("https://api.example.com/users"));
        assert!(!is_absolute_url("/users"));
    }
}
