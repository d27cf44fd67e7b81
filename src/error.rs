use std::path::PathBuf;

use thiserror::Error;

/// Rejections from signup/unregister commands against the activity directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ActivityNotFound { .. })
    }

    pub fn activity(&self) -> &str {
        match self {
            Self::ActivityNotFound { activity }
            | Self::AlreadySignedUp { activity, .. }
            | Self::NotRegistered { activity, .. } => activity,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::ActivityNotFound { .. } => None,
            Self::AlreadySignedUp { email, .. } | Self::NotRegistered { email, .. } => Some(email),
        }
    }
}

/// Startup failures: configuration, seed loading, binding.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid seed data: {0}")]
    SeedInvalid(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_error_messages_carry_recognizable_detail() {
        let err = DirectoryError::ActivityNotFound {
            activity: "Knitting".to_string(),
        };
        assert_eq!(err.to_string(), "Activity not found");
        assert!(err.is_not_found());
        assert_eq!(err.activity(), "Knitting");
        assert_eq!(err.email(), None);

        let err = DirectoryError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            email: "a@x".to_string(),
        };
        assert!(err.to_string().contains("already signed up"));
        assert!(!err.is_not_found());
        assert_eq!(err.email(), Some("a@x"));

        let err = DirectoryError::NotRegistered {
            activity: "Chess Club".to_string(),
            email: "a@x".to_string(),
        };
        assert!(err.to_string().contains("not registered"));
    }

    #[test]
    fn seed_errors_name_the_file() {
        let err = AppError::SeedRead {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("no such file"));
    }
}
