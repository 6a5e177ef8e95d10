//! Infrastructure adapters. Implement outbound ports.
//!
//! Catalog storage and seed loading. Map errors to DomainError.

pub mod catalog;
