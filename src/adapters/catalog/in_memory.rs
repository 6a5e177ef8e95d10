//! Implements ActivityRepository over an in-process map.
//!
//! The whole catalog lives behind one RwLock; reads clone activities out.

use crate::domain::{Activity, DomainError};
use crate::ports::ActivityRepository;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory activity catalog: name -> activity.
#[derive(Default)]
pub struct InMemoryActivityRepository {
    activities: RwLock<HashMap<String, Activity>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given activities. A later activity replaces an earlier one
    /// with the same name.
    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let map = activities
            .into_iter()
            .map(|a| (a.name().to_string(), a))
            .collect();
        Self {
            activities: RwLock::new(map),
        }
    }
}

#[async_trait::async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find_all(&self) -> Result<Vec<Activity>, DomainError> {
        let map = self.activities.read().await;
        let mut out: Vec<Activity> = map.values().cloned().collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(out)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DomainError> {
        Ok(self.activities.read().await.get(name).cloned())
    }

    async fn save(&self, activity: Activity) -> Result<(), DomainError> {
        self.activities
            .write()
            .await
            .insert(activity.name().to_string(), activity);
        Ok(())
    }
}
