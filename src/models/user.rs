use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User row stored in the `users` table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    /// Assigned by the database on insert
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl User {
    /// Build a record that has not been stored yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}
