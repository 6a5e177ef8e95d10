//! Domain entities. Invariants are enforced here, nowhere else.
//!
//! No I/O and no logging; callers decide what to do with a rejected operation.

use crate::domain::{ActivityType, DifficultyLevel, DomainError, Email, ScheduleDetails};
use serde::Serialize;
use std::collections::BTreeSet;

/// An extracurricular activity with a fixed capacity and a set of enrolled participants.
///
/// Everything except `difficulty_level` and `participants` is fixed at construction.
/// `participants.len() <= max_participants` holds after every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    name: String,
    description: String,
    #[serde(rename = "schedule")]
    schedule_label: String,
    schedule_details: ScheduleDetails,
    max_participants: u32,
    #[serde(rename = "type")]
    activity_type: ActivityType,
    difficulty_level: Option<DifficultyLevel>,
    participants: BTreeSet<Email>,
}

impl Activity {
    /// Build an activity with no participants.
    ///
    /// Fails with an invalid-argument error when `name`, `description` or `schedule_label`
    /// is empty (or only whitespace), or when `max_participants` is zero.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule_label: impl Into<String>,
        schedule_details: ScheduleDetails,
        max_participants: u32,
        activity_type: ActivityType,
        difficulty_level: Option<DifficultyLevel>,
    ) -> Result<Self, DomainError> {
        let name = non_empty("name", name.into())?;
        let description = non_empty("description", description.into())?;
        let schedule_label = non_empty("schedule", schedule_label.into())?;
        if max_participants == 0 {
            return Err(DomainError::InvalidCapacity(max_participants));
        }
        Ok(Self {
            name,
            description,
            schedule_label,
            schedule_details,
            max_participants,
            activity_type,
            difficulty_level,
            participants: BTreeSet::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule_label(&self) -> &str {
        &self.schedule_label
    }

    pub fn schedule_details(&self) -> &ScheduleDetails {
        &self.schedule_details
    }

    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    pub fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    /// `None` means the activity is open to all levels.
    pub fn difficulty_level(&self) -> Option<DifficultyLevel> {
        self.difficulty_level
    }

    pub fn set_difficulty_level(&mut self, level: Option<DifficultyLevel>) {
        self.difficulty_level = level;
    }

    /// Enroll a participant. Capacity is checked before duplication, and nothing
    /// changes when either check fails.
    pub fn add_participant(&mut self, email: Email) -> Result<(), DomainError> {
        if !self.can_add_participant() {
            return Err(DomainError::CapacityExceeded {
                activity: self.name.clone(),
                max: self.max_participants,
            });
        }
        if self.participants.contains(&email) {
            return Err(DomainError::AlreadyEnrolled {
                activity: self.name.clone(),
                email: email.to_string(),
            });
        }
        self.participants.insert(email);
        Ok(())
    }

    pub fn remove_participant(&mut self, email: &Email) -> Result<(), DomainError> {
        if self.participants.remove(email) {
            Ok(())
        } else {
            Err(DomainError::NotEnrolled {
                activity: self.name.clone(),
                email: email.to_string(),
            })
        }
    }

    pub fn is_participant_registered(&self, email: &Email) -> bool {
        self.participants.contains(email)
    }

    pub fn can_add_participant(&self) -> bool {
        self.current_participant_count() < self.max_participants as usize
    }

    pub fn current_participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn available_spots(&self) -> usize {
        debug_assert!(self.current_participant_count() <= self.max_participants as usize);
        self.max_participants as usize - self.current_participant_count()
    }

    /// Enrolled participants, sorted by address.
    pub fn participants(&self) -> impl Iterator<Item = &Email> + '_ {
        self.participants.iter()
    }

    /// True if a student at `level` fits this activity (unlevelled activities fit everyone).
    pub fn is_open_to(&self, level: DifficultyLevel) -> bool {
        self.difficulty_level.is_none_or(|own| own == level)
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::EmptyField(field))
    } else {
        Ok(value)
    }
}
