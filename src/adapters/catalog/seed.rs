//! Seed catalog: the activities a fresh process starts with.
//!
//! Read from a JSON array on disk, or the built-in Mergington High catalog when no file
//! is configured. Every record goes through `Activity::new` and `add_participant`, so a
//! seed cannot smuggle in a state the entity would reject.

use crate::domain::{
    Activity, ActivityType, DifficultyLevel, DomainError, Email, ScheduleDetails,
};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// On-disk shape of one activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub schedule_details: ScheduleDetails,
    pub max_participants: u32,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(default)]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(default)]
    pub participants: Vec<Email>,
}

impl TryFrom<ActivitySeed> for Activity {
    type Error = DomainError;

    fn try_from(seed: ActivitySeed) -> Result<Self, Self::Error> {
        let mut activity = Activity::new(
            seed.name,
            seed.description,
            seed.schedule,
            seed.schedule_details,
            seed.max_participants,
            seed.activity_type,
            seed.difficulty_level,
        )?;
        for email in seed.participants {
            activity.add_participant(email)?;
        }
        Ok(activity)
    }
}

/// Load a seed file. Any invalid record fails the whole load.
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Activity>, DomainError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::Seed(format!("read {}: {}", path.display(), e)))?;
    let seeds: Vec<ActivitySeed> = serde_json::from_str(&raw)
        .map_err(|e| DomainError::Seed(format!("parse {}: {}", path.display(), e)))?;

    let activities = seeds
        .into_iter()
        .map(|seed| {
            let name = seed.name.clone();
            Activity::try_from(seed).map_err(|e| DomainError::Seed(format!("{}: {}", name, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        path = %path.display(),
        count = activities.len(),
        "loaded seed catalog"
    );
    Ok(activities)
}

struct CatalogEntry {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    days: &'static [&'static str],
    start: (u32, u32),
    end: (u32, u32),
    max_participants: u32,
    activity_type: ActivityType,
    difficulty_level: Option<DifficultyLevel>,
    participants: &'static [&'static str],
}

const DEFAULT_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Seg/Qua 15:30-17:00",
        days: &["Monday", "Wednesday"],
        start: (15, 30),
        end: (17, 0),
        max_participants: 12,
        activity_type: ActivityType::Academic,
        difficulty_level: None,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    CatalogEntry {
        name: "Advanced Chess Club",
        description: "Advanced chess strategies and tournament preparation",
        schedule: "Seg/Qua 17:00-18:30",
        days: &["Monday", "Wednesday"],
        start: (17, 0),
        end: (18, 30),
        max_participants: 8,
        activity_type: ActivityType::Academic,
        difficulty_level: Some(DifficultyLevel::Advanced),
        participants: &[],
    },
    CatalogEntry {
        name: "Manga Maniacs",
        description: "Explore as histórias fantásticas dos personagens mais interessantes dos Mangás japoneses (romances gráficos)",
        schedule: "Terças-feiras, 19:00 - 20:00",
        days: &["Tuesday"],
        start: (19, 0),
        end: (20, 0),
        max_participants: 15,
        activity_type: ActivityType::Arts,
        difficulty_level: None,
        participants: &[],
    },
    CatalogEntry {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Ter/Qui 07:00-08:00",
        days: &["Tuesday", "Thursday"],
        start: (7, 0),
        end: (8, 0),
        max_participants: 20,
        activity_type: ActivityType::Technology,
        difficulty_level: Some(DifficultyLevel::Beginner),
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    CatalogEntry {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Ter/Qui 15:30-17:30",
        days: &["Tuesday", "Thursday"],
        start: (15, 30),
        end: (17, 30),
        max_participants: 22,
        activity_type: ActivityType::Sports,
        difficulty_level: Some(DifficultyLevel::Intermediate),
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    CatalogEntry {
        name: "Community Garden",
        description: "Grow vegetables for the local food bank and learn about urban gardening",
        schedule: "Sáb 09:00-11:00",
        days: &["Saturday"],
        start: (9, 0),
        end: (11, 0),
        max_participants: 10,
        activity_type: ActivityType::Community,
        difficulty_level: None,
        participants: &[],
    },
];

fn clock(h: u32, m: u32) -> Result<NaiveTime, DomainError> {
    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| {
        DomainError::InvalidSchedule(format!("{}:{:02} is not a time of day", h, m))
    })
}

/// Built-in catalog used when no seed file is configured.
pub fn default_catalog() -> Result<Vec<Activity>, DomainError> {
    let mut activities = Vec::with_capacity(DEFAULT_CATALOG.len());
    for entry in DEFAULT_CATALOG {
        let schedule = ScheduleDetails::new(
            entry.days.iter().copied(),
            clock(entry.start.0, entry.start.1)?,
            clock(entry.end.0, entry.end.1)?,
        )?;
        let mut activity = Activity::new(
            entry.name,
            entry.description,
            entry.schedule,
            schedule,
            entry.max_participants,
            entry.activity_type,
            entry.difficulty_level,
        )?;
        for email in entry.participants {
            activity.add_participant(Email::new(email)?)?;
        }
        activities.push(activity);
    }
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED_JSON: &str = r#"[
        {
            "name": "Drama Club",
            "description": "Act, direct and produce plays",
            "schedule": "Seg/Qua 16:00-17:30",
            "schedule_details": { "days": ["Monday", "Wednesday"], "start_time": "16:00", "end_time": "17:30" },
            "max_participants": 2,
            "type": "ARTS",
            "difficulty_level": "BEGINNER",
            "participants": ["Ella@Mergington.edu"]
        },
        {
            "name": "Math Olympiad",
            "description": "Competition math problem solving",
            "schedule": "Sex 15:00-16:00",
            "schedule_details": { "days": ["Friday"], "start_time": "15:00", "end_time": "16:00" },
            "max_participants": 10,
            "type": "ACADEMIC"
        }
    ]"#;

    fn write_seed(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_seed_file() {
        let file = write_seed(SEED_JSON);

        let activities = load_seed_file(file.path()).await.unwrap();

        assert_eq!(activities.len(), 2);
        let drama = &activities[0];
        assert_eq!(drama.name(), "Drama Club");
        assert_eq!(drama.activity_type(), ActivityType::Arts);
        assert_eq!(drama.difficulty_level(), Some(DifficultyLevel::Beginner));
        assert!(drama.is_participant_registered(&Email::new("ella@mergington.edu").unwrap()));
        let olympiad = &activities[1];
        assert_eq!(olympiad.difficulty_level(), None);
        assert_eq!(olympiad.current_participant_count(), 0);
    }

    #[tokio::test]
    async fn test_load_seed_file_rejects_over_capacity() {
        let file = write_seed(
            r#"[{
                "name": "Tiny Club",
                "description": "Too small",
                "schedule": "Seg 10:00-11:00",
                "schedule_details": { "days": ["Monday"], "start_time": "10:00", "end_time": "11:00" },
                "max_participants": 1,
                "type": "COMMUNITY",
                "participants": ["a@mergington.edu", "b@mergington.edu"]
            }]"#,
        );

        let err = load_seed_file(file.path()).await.unwrap_err();
        assert!(matches!(err, DomainError::Seed(ref msg) if msg.contains("Tiny Club")));
    }

    #[tokio::test]
    async fn test_load_seed_file_rejects_bad_json_and_missing_file() {
        let file = write_seed(r#"[{"name": "Broken"}]"#);
        assert!(matches!(
            load_seed_file(file.path()).await,
            Err(DomainError::Seed(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_seed_file(dir.path().join("missing.json")).await,
            Err(DomainError::Seed(_))
        ));
    }

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.len(), 6);

        let chess = catalog.iter().find(|a| a.name() == "Chess Club").unwrap();
        assert_eq!(chess.max_participants(), 12);
        assert_eq!(chess.current_participant_count(), 2);

        let manga = catalog.iter().find(|a| a.name() == "Manga Maniacs").unwrap();
        assert_eq!(manga.activity_type(), ActivityType::Arts);
        assert!(manga.schedule_details().occurs_on("Tuesday"));
    }
}
