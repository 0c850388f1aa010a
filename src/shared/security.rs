use crate::shared::error::SyncError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum config file size (1 MB). A dashboard config is a handful of keys.
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Validates that a config file can be read safely
///
/// # Security
/// Uses `symlink_metadata()` so the symlink itself is inspected rather than
/// its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds [`MAX_CONFIG_FILE_SIZE`]
pub fn validate_config_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SyncError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(SyncError::SecurityError {
            path: path.to_path_buf(),
            reason: "Config file is a symbolic link".to_string(),
            hint: "Point --config at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SyncError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(SyncError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Config file is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            hint: "Config files only hold a few settings; check the path".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates a value that will be placed into a URL path segment
///
/// # Security
/// Prevents path traversal and URL injection through identifiers that end up
/// in request paths (e.g. `/payment-gateways/{id}`).
pub fn validate_path_segment(component: &str, component_type: &str) -> Result<()> {
    if component.is_empty() {
        return Err(SyncError::validation(format!("{} cannot be empty", component_type)).into());
    }

    if component.contains('/') || component.contains('\\') {
        return Err(SyncError::validation(format!(
            "Security: {} contains path separators which are not allowed",
            component_type
        ))
        .into());
    }

    if component.contains("..") {
        return Err(SyncError::validation(format!(
            "Security: {} contains '..' which is not allowed",
            component_type
        ))
        .into());
    }

    if component.contains('#') || component.contains('?') || component.contains('@') {
        return Err(SyncError::validation(format!(
            "Security: {} contains URL-unsafe characters",
            component_type
        ))
        .into());
    }

    Ok(())
}
