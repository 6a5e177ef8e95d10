//! Activity catalog adapters. In-memory repository and seed loading.

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryActivityRepository;
pub use seed::{ActivitySeed, default_catalog, load_seed_file};
