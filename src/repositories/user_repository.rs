//! User repository for all database operations related to users.
//!
//! The service layer depends on the [`UserRepository`] trait; the SQLite
//! implementation below is the one wired in at start-up.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::constants::ERR_USER_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::User;

const MIGRATION_SQL: &str = include_str!("../../migrations/001_create_users.sql");

/// Persistence operations over the `users` table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user, ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, ApiError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Insert when `user.id` is `None`, otherwise update the row with that id.
    async fn save(&self, user: User) -> Result<User, ApiError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApiError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;

    /// Round-trip a trivial query against the store.
    async fn ping(&self) -> Result<(), ApiError>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Open a connection pool and make sure the schema exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, ApiError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database is its own database.
        let in_memory = database_url.contains(":memory:");
        let max_connections = if in_memory { 1 } else { max_connections.max(1) };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        info!("Connected to SQLite database at: {}", database_url);

        let repository = Self { pool };
        repository.run_migrations().await?;
        Ok(repository)
    }

    async fn run_migrations(&self) -> Result<(), ApiError> {
        info!("Running database migrations...");
        sqlx::raw_sql(MIGRATION_SQL).execute(&self.pool).await?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    async fn insert(&self, user: &User) -> Result<User, ApiError> {
        let stored = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, age) VALUES (?, ?, ?) RETURNING id, name, email, age",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.age)
        .fetch_one(&self.pool)
        .await?;

        debug!("Repository: Inserted user with ID: {:?}", stored.id);
        Ok(stored)
    }

    async fn update(&self, id: i64, user: &User) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = ?, email = ?, age = ? WHERE id = ? \
             RETURNING id, name, email, age",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.age)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Finding all users");
        Ok(
            sqlx::query_as::<_, User>("SELECT id, name, email, age FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(
            sqlx::query_as::<_, User>("SELECT id, name, email, age FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT id, name, email, age FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn save(&self, user: User) -> Result<User, ApiError> {
        match user.id {
            Some(id) => self.update(id, &user).await,
            None => self.insert(&user).await,
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ApiError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        debug!("Repository: Deleting user by ID: {}", id);
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), ApiError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
