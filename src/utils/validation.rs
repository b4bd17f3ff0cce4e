use crate::utils::error::{JokeApiError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(JokeApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(JokeApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A mount prefix is either empty (mount at the root) or an absolute path
/// without a trailing slash, query or fragment.
pub fn validate_mount_prefix(field_name: &str, prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Ok(());
    }

    let reason = if !prefix.starts_with('/') {
        Some("Prefix must start with '/'")
    } else if prefix.ends_with('/') {
        Some("Prefix must not end with '/'")
    } else if prefix.contains(['?', '#', ' ']) {
        Some("Prefix must be a plain path")
    } else if prefix.contains("//") {
        Some("Prefix must not contain empty segments")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(JokeApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("jokes.file", "./jokes.json").is_ok());
        assert!(validate_path("jokes.file", "").is_err());
        assert!(validate_path("jokes.file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_mount_prefix() {
        assert!(validate_mount_prefix("server.prefix", "/api").is_ok());
        assert!(validate_mount_prefix("server.prefix", "/api/v1").is_ok());
        assert!(validate_mount_prefix("server.prefix", "").is_ok());

        assert!(validate_mount_prefix("server.prefix", "api").is_err());
        assert!(validate_mount_prefix("server.prefix", "/api/").is_err());
        assert!(validate_mount_prefix("server.prefix", "/").is_err());
        assert!(validate_mount_prefix("server.prefix", "/api?x=1").is_err());
        assert!(validate_mount_prefix("server.prefix", "/api//v1").is_err());
    }
}
