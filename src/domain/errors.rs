//! Domain errors. Used by entities, ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("max participants must be positive, got {0}")]
    InvalidCapacity(u32),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("activity '{activity}' is full ({max} participants)")]
    CapacityExceeded { activity: String, max: u32 },

    #[error("{email} is already signed up for '{activity}'")]
    AlreadyEnrolled { activity: String, email: String },

    #[error("{email} is not signed up for '{activity}'")]
    NotEnrolled { activity: String, email: String },

    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error("repository error: {0}")]
    Repo(String),

    #[error("seed catalog error: {0}")]
    Seed(String),
}

impl DomainError {
    /// True for errors caused by a bad argument from the caller (validation and
    /// enrollment rule violations), as opposed to lookups and infrastructure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyField(_)
                | Self::InvalidCapacity(_)
                | Self::InvalidEmail(_)
                | Self::InvalidSchedule(_)
                | Self::UnknownVariant { .. }
                | Self::CapacityExceeded { .. }
                | Self::AlreadyEnrolled { .. }
                | Self::NotEnrolled { .. }
        )
    }
}
