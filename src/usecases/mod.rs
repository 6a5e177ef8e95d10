//! Application use cases. Orchestrate domain logic via ports.

pub mod enrollment_service;

pub use enrollment_service::{ActivityFilter, EnrollmentService};
