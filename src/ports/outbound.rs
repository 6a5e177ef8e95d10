//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Activity, DomainError};

/// Activity catalog storage. Activities are keyed by name.
#[async_trait::async_trait]
pub trait ActivityRepository: Send + Sync {
    /// All activities, sorted by name.
    async fn find_all(&self) -> Result<Vec<Activity>, DomainError>;

    /// Look up a single activity. `Ok(None)` if no activity has that name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DomainError>;

    /// Insert the activity, replacing any existing one with the same name.
    async fn save(&self, activity: Activity) -> Result<(), DomainError>;
}
