//! Core domain layer. No external I/O dependencies.
//!
//! Entities, value objects and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::Activity;
pub use errors::DomainError;
pub use value_objects::{ActivityType, DifficultyLevel, Email, ScheduleDetails};
