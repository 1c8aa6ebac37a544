//! Errors raised while writing a project to disk

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Shown alongside permission failures
pub const PERMISSION_HINT: &str =
    "Try running with higher privileges or in a directory where you have write permissions.";

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Directory {} already exists!", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Permission denied: cannot write {}. {}", .path.display(), PERMISSION_HINT)]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Attach the failing path to an I/O error, singling out permission failures
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => ScaffoldError::PermissionDenied { path, source },
            io::ErrorKind::AlreadyExists => ScaffoldError::AlreadyExists(path),
            _ => ScaffoldError::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_errors_carry_hint() {
        let err = ScaffoldError::from_io(
            "/root/demo",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ScaffoldError::PermissionDenied { .. }));
        assert!(err.to_string().contains("higher privileges"));
        assert!(err.to_string().contains("/root/demo"));
    }

    #[test]
    fn test_other_errors_keep_path_and_message() {
        let err = ScaffoldError::from_io(
            "demo/index.html",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert!(matches!(err, ScaffoldError::Io { .. }));
        let message = err.to_string();
        assert!(message.contains("demo/index.html"));
        assert!(message.contains("disk full"));
    }

    #[test]
    fn test_already_exists_maps_to_precondition() {
        let err = ScaffoldError::from_io("demo", io::Error::from(io::ErrorKind::AlreadyExists));
        assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
    }
}
