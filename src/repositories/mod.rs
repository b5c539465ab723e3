//! Repository layer for database operations.
//!
//! Keeps SQL out of the service layer, which only sees the
//! [`UserRepository`] trait.

pub mod user_repository;

pub use user_repository::{SqliteUserRepository, UserRepository};
