//! Registry and catalog error types.

use thiserror::Error;

/// Coarse classification of a [`RegistryError`].
///
/// Transports map `NotFound` to 404 and `Conflict` to 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

/// Errors returned by registry mutations.
///
/// The display strings are the user-facing detail messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No activity with this exact name.
    #[error("Activity not found")]
    NotFound(String),

    /// Signup for an email that is already a participant.
    #[error("Student already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    /// Unregister for an email that is not a participant.
    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::NotFound(_) => ErrorKind::NotFound,
            RegistryError::AlreadySignedUp { .. } | RegistryError::NotRegistered { .. } => {
                ErrorKind::Conflict
            }
        }
    }

    /// Name of the activity the failed call targeted.
    pub fn activity(&self) -> &str {
        match self {
            RegistryError::NotFound(activity)
            | RegistryError::AlreadySignedUp { activity, .. }
            | RegistryError::NotRegistered { activity, .. } => activity,
        }
    }
}

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Activity name cannot be empty")]
    EmptyName,

    #[error("Duplicate activity in catalog: {0}")]
    DuplicateActivity(String),

    #[error("Duplicate participant {email} in activity {activity}")]
    DuplicateParticipant { activity: String, email: String },
}
