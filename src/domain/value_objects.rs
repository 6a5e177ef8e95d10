//! Value objects. Validated at construction, immutable afterwards.
//!
//! Entities take these as already-valid inputs and never re-check them.

use crate::domain::DomainError;
use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Participant email address. Stored trimmed and lowercased, so equality is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_lowercase();
        if Self::is_well_formed(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(DomainError::InvalidEmail(raw.trim().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(s: &str) -> bool {
        if s.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = s.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        // At least two labels, none empty: "mergington.edu" ok, ".edu" / "edu." / "a..b" not.
        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Email {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// Weekly schedule: the weekdays an activity meets on and its time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSchedule")]
pub struct ScheduleDetails {
    days: Vec<String>,
    #[serde(with = "hh_mm")]
    start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    end_time: NaiveTime,
}

impl ScheduleDetails {
    pub fn new<I, S>(
        days: I,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let days: Vec<String> = days
            .into_iter()
            .map(|d| d.into().trim().to_string())
            .collect();
        if days.is_empty() {
            return Err(DomainError::InvalidSchedule("no meeting days".into()));
        }
        if days.iter().any(|d| d.is_empty()) {
            return Err(DomainError::InvalidSchedule("blank day name".into()));
        }
        if start_time >= end_time {
            return Err(DomainError::InvalidSchedule(format!(
                "start {} is not before end {}",
                start_time.format("%H:%M"),
                end_time.format("%H:%M")
            )));
        }
        Ok(Self {
            days,
            start_time,
            end_time,
        })
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Case-insensitive weekday match ("monday" matches "Monday", "SÁBADO" matches "Sábado").
    pub fn occurs_on(&self, day: &str) -> bool {
        let day = day.trim().to_lowercase();
        self.days.iter().any(|d| d.to_lowercase() == day)
    }

    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

#[derive(Deserialize)]
struct RawSchedule {
    days: Vec<String>,
    #[serde(with = "hh_mm")]
    start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    end_time: NaiveTime,
}

impl TryFrom<RawSchedule> for ScheduleDetails {
    type Error = DomainError;

    fn try_from(raw: RawSchedule) -> Result<Self, Self::Error> {
        Self::new(raw.days, raw.start_time, raw.end_time)
    }
}

/// `NaiveTime` as "HH:MM". Input may also carry seconds ("HH:MM:SS").
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid time '{}': {}", s, e)))
    }
}

/// Activity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Sports,
    Arts,
    Academic,
    Community,
    Technology,
}

impl ActivityType {
    pub const ALL: [ActivityType; 5] = [
        Self::Sports,
        Self::Arts,
        Self::Academic,
        Self::Community,
        Self::Technology,
    ];

    /// Display label shown to students.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sports => "Esportes",
            Self::Arts => "Artes",
            Self::Academic => "Acadêmico",
            Self::Community => "Comunitário",
            Self::Technology => "Tecnologia",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sports => "SPORTS",
            Self::Arts => "ARTS",
            Self::Academic => "ACADEMIC",
            Self::Community => "COMMUNITY",
            Self::Technology => "TECHNOLOGY",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "activity type",
                value: s.to_string(),
            })
    }
}

/// Target experience level. An activity with no level is open to all levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Iniciante",
            Self::Intermediate => "Intermediário",
            Self::Advanced => "Avançado",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DifficultyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "difficulty level",
                value: s.to_string(),
            })
    }
}
