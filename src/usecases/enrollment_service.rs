//! Enrollment use case: list the catalog, sign students up, unregister them.
//!
//! - Parses raw email input into `Email` before touching the repository
//! - Load -> mutate -> save runs under a single writer lock, so two sign-ups can never
//!   both see the last free spot
//! - Rejected operations are logged and returned; the stored activity is left as it was

use crate::domain::{Activity, ActivityType, DifficultyLevel, DomainError, Email};
use crate::ports::ActivityRepository;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Catalog filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    pub activity_type: Option<ActivityType>,
    /// Activities with no difficulty level match any requested level.
    pub difficulty: Option<DifficultyLevel>,
    /// Weekday name, case-insensitive.
    pub day: Option<String>,
}

impl ActivityFilter {
    pub fn matches(&self, activity: &Activity) -> bool {
        self.activity_type
            .is_none_or(|kind| activity.activity_type() == kind)
            && self.difficulty.is_none_or(|level| activity.is_open_to(level))
            && self
                .day
                .as_deref()
                .is_none_or(|day| activity.schedule_details().occurs_on(day))
    }
}

/// Enrollment service. Owns the write discipline for the activity catalog.
pub struct EnrollmentService {
    repo: Arc<dyn ActivityRepository>,
    write_lock: Mutex<()>,
}

impl EnrollmentService {
    pub fn new(repo: Arc<dyn ActivityRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Activities matching `filter`, sorted by name.
    pub async fn list_activities(
        &self,
        filter: &ActivityFilter,
    ) -> Result<Vec<Activity>, DomainError> {
        let mut activities = self.repo.find_all().await?;
        activities.retain(|a| filter.matches(a));
        Ok(activities)
    }

    /// Sign a student up. Returns the updated activity.
    pub async fn sign_up(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Activity, DomainError> {
        let email = Email::new(email)?;
        let _guard = self.write_lock.lock().await;

        let mut activity = self.load(activity_name).await?;
        if let Err(e) = activity.add_participant(email.clone()) {
            warn!(activity = activity_name, email = %email, error = %e, "sign-up rejected");
            return Err(e);
        }
        self.repo.save(activity.clone()).await?;

        info!(
            activity = activity_name,
            email = %email,
            enrolled = activity.current_participant_count(),
            max = activity.max_participants(),
            "signed up"
        );
        Ok(activity)
    }

    /// Remove a student from an activity. Returns the updated activity.
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Activity, DomainError> {
        let email = Email::new(email)?;
        let _guard = self.write_lock.lock().await;

        let mut activity = self.load(activity_name).await?;
        if let Err(e) = activity.remove_participant(&email) {
            warn!(activity = activity_name, email = %email, error = %e, "unregister rejected");
            return Err(e);
        }
        self.repo.save(activity.clone()).await?;

        info!(
            activity = activity_name,
            email = %email,
            enrolled = activity.current_participant_count(),
            "unregistered"
        );
        Ok(activity)
    }

    async fn load(&self, activity_name: &str) -> Result<Activity, DomainError> {
        self.repo
            .find_by_name(activity_name)
            .await?
            .ok_or_else(|| DomainError::ActivityNotFound(activity_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::{InMemoryActivityRepository, default_catalog};
    use crate::domain::ScheduleDetails;
    use chrono::NaiveTime;

    fn service() -> EnrollmentService {
        let repo = InMemoryActivityRepository::with_activities(default_catalog().unwrap());
        EnrollmentService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_sign_up_and_unregister() {
        let svc = service();

        let chess = svc.sign_up("Chess Club", "Ava@Mergington.edu").await.unwrap();
        assert_eq!(chess.current_participant_count(), 3);
        assert!(chess.is_participant_registered(&Email::new("ava@mergington.edu").unwrap()));

        let chess = svc.unregister("Chess Club", "ava@mergington.edu").await.unwrap();
        assert_eq!(chess.current_participant_count(), 2);
    }

    #[tokio::test]
    async fn test_sign_up_unknown_activity() {
        let svc = service();
        let err = svc
            .sign_up("Underwater Basket Weaving", "ava@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::ActivityNotFound("Underwater Basket Weaving".to_string())
        );
        assert!(!err.is_invalid_argument());
    }

    #[tokio::test]
    async fn test_rejected_sign_up_leaves_activity_unchanged() {
        let svc = service();

        let err = svc
            .sign_up("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::AlreadyEnrolled { .. }));

        let err = svc.sign_up("Chess Club", "not an email").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidEmail(_)));

        let err = svc
            .unregister("Chess Club", "nobody@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotEnrolled { .. }));

        let chess = svc
            .list_activities(&ActivityFilter::default())
            .await
            .unwrap()
            .into_iter()
            .find(|a| a.name() == "Chess Club")
            .unwrap();
        assert_eq!(chess.current_participant_count(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_sign_ups_respect_capacity() {
        let schedule = ScheduleDetails::new(
            ["Friday"],
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        )
        .unwrap();
        let small = Activity::new(
            "Debate Team",
            "Develop public speaking skills",
            "Sex 12:00-13:00",
            schedule,
            3,
            ActivityType::Academic,
            None,
        )
        .unwrap();
        let svc = Arc::new(EnrollmentService::new(Arc::new(
            InMemoryActivityRepository::with_activities([small]),
        )));

        let mut handles = Vec::new();
        for i in 0..10 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.sign_up("Debate Team", &format!("student{}@mergington.edu", i))
                    .await
            }));
        }
        let mut accepted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(e) => assert!(matches!(e, DomainError::CapacityExceeded { .. })),
            }
        }
        assert_eq!(accepted, 3);
    }

    #[tokio::test]
    async fn test_list_activities_filters() {
        let svc = service();

        let arts = svc
            .list_activities(&ActivityFilter {
                activity_type: Some(ActivityType::Arts),
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<&str> = arts.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["Manga Maniacs"]);

        // Unlevelled activities stay visible for any requested level.
        let beginner = svc
            .list_activities(&ActivityFilter {
                difficulty: Some(DifficultyLevel::Beginner),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(beginner.iter().any(|a| a.name() == "Programming Class"));
        assert!(beginner.iter().any(|a| a.name() == "Chess Club"));
        assert!(!beginner.iter().any(|a| a.name() == "Advanced Chess Club"));

        let saturday = svc
            .list_activities(&ActivityFilter {
                day: Some("saturday".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<&str> = saturday.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["Community Garden"]);

        let all = svc.list_activities(&ActivityFilter::default()).await.unwrap();
        assert_eq!(all.len(), 6);
    }

    #[tokio::test]
    async fn test_list_activities_day_filter_folds_non_ascii_case() {
        let schedule = ScheduleDetails::new(
            ["Sábado"],
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        )
        .unwrap();
        let garden = Activity::new(
            "Horta Comunitária",
            "Cultive legumes para o banco de alimentos",
            "Sáb 09:00-11:00",
            schedule,
            10,
            ActivityType::Community,
            None,
        )
        .unwrap();
        let svc = EnrollmentService::new(Arc::new(InMemoryActivityRepository::with_activities([
            garden,
        ])));

        let found = svc
            .list_activities(&ActivityFilter {
                day: Some("SÁBADO".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<&str> = found.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["Horta Comunitária"]);
    }
}
