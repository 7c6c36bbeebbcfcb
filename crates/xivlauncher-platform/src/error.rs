use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("preference not found")]
    NotFound,

    #[error("access to preference denied")]
    AccessDenied,

    #[error("malformed preference value: {0}")]
    Malformed(String),

    #[error("no preference store on this platform")]
    Unsupported,

    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlatformError {
    /// Classify an OS-level read error into the store taxonomy.
    pub fn from_read_error(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::AccessDenied,
            std::io::ErrorKind::InvalidData => Self::Malformed(err.to_string()),
            _ => Self::Io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_errors_are_classified_by_kind() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            PlatformError::from_read_error(missing),
            PlatformError::NotFound
        ));

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(
            PlatformError::from_read_error(denied),
            PlatformError::AccessDenied
        ));

        let bad = std::io::Error::new(std::io::ErrorKind::InvalidData, "REG_SZ");
        assert!(matches!(
            PlatformError::from_read_error(bad),
            PlatformError::Malformed(_)
        ));

        let other = std::io::Error::other("boom");
        assert!(matches!(
            PlatformError::from_read_error(other),
            PlatformError::Io(_)
        ));
    }
}
