//! User service for user CRUD operations.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{ERR_DELETE_FAILED, ERR_EMAIL_EXISTS, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::log_sanitizer::mask_email;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.repository.find_all().await?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<User, ApiError> {
        debug!("Fetching user by ID: {}", id);
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("User not found with id: {}", id);
            ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
        })
    }

    /// Store a new user, rejecting emails that are already registered.
    ///
    /// The lookup and the insert are separate statements; the unique index on
    /// `users.email` rejects a concurrent duplicate with the same error.
    pub async fn create_user(&self, candidate: User) -> Result<User, ApiError> {
        if self
            .repository
            .find_by_email(&candidate.email)
            .await?
            .is_some()
        {
            warn!(
                "Create failed: Email {} already registered",
                mask_email(&candidate.email)
            );
            return Err(ApiError::DuplicateEmail(ERR_EMAIL_EXISTS.to_string()));
        }

        let user = self.repository.save(User { id: None, ..candidate }).await?;
        info!("Created user with id: {:?}", user.id);
        Ok(user)
    }

    /// Overwrite name, email and age of an existing user.
    pub async fn update_user(&self, id: i64, patch: User) -> Result<User, ApiError> {
        info!("Updating user with id: {}", id);

        let mut existing = self.get_user_by_id(id).await?;
        existing.name = patch.name;
        existing.email = patch.email;
        existing.age = patch.age;

        let user = self.repository.save(existing).await?;
        info!("Successfully updated user: {}", id);
        Ok(user)
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        info!("Deleting user with id: {}", id);

        if !self.repository.exists_by_id(id).await? {
            warn!("Delete failed: User not found with id: {}", id);
            return Err(ApiError::NotFound(ERR_DELETE_FAILED.to_string()));
        }

        self.repository.delete_by_id(id).await?;
        info!("Successfully deleted user: {}", id);
        Ok(())
    }

    pub async fn check_database(&self) -> Result<(), ApiError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteUserRepository;
    use pretty_assertions::assert_eq;

    async fn service() -> UserService {
        let repository = SqliteUserRepository::connect("sqlite::memory:", 1)
            .await
            .expect("in-memory database");
        UserService::new(Arc::new(repository))
    }

    fn ana() -> User {
        User::new("Ana", "ana@x.com", 30)
    }

    #[actix_web::test]
    async fn test_create_assigns_new_id() {
        let service = service().await;

        let created = service.create_user(ana()).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.name, "Ana");
        assert_eq!(created.email, "ana@x.com");
        assert_eq!(created.age, 30);
    }

    #[actix_web::test]
    async fn test_create_ignores_candidate_id() {
        let service = service().await;
        let mut candidate = ana();
        candidate.id = Some(77);

        let created = service.create_user(candidate).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[actix_web::test]
    async fn test_create_duplicate_email_is_rejected_and_not_persisted() {
        let service = service().await;
        service.create_user(ana()).await.unwrap();

        let err = service
            .create_user(User::new("Impostor", "ana@x.com", 99))
            .await
            .unwrap_err();

        match err {
            ApiError::DuplicateEmail(message) => assert_eq!(message, ERR_EMAIL_EXISTS),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(service.get_all_users().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_get_all_empty_then_populated() {
        let service = service().await;
        assert!(service.get_all_users().await.unwrap().is_empty());

        service.create_user(ana()).await.unwrap();
        assert_eq!(service.get_all_users().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let service = service().await;
        let existing = service.create_user(ana()).await.unwrap();

        assert!(matches!(
            service.get_user_by_id(42).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            service.update_user(42, User::new("X", "x@x.com", 1)).await,
            Err(ApiError::NotFound(_))
        ));
        match service.delete_user(42).await {
            Err(ApiError::NotFound(message)) => assert_eq!(message, ERR_DELETE_FAILED),
            other => panic!("unexpected result: {:?}", other),
        }

        assert_eq!(service.get_all_users().await.unwrap(), vec![existing]);
    }

    #[actix_web::test]
    async fn test_update_overwrites_fields_and_preserves_id() {
        let service = service().await;
        let created = service.create_user(ana()).await.unwrap();
        let id = created.id.unwrap();

        let updated = service
            .update_user(id, User::new("Ana Pérez", "ana.perez@x.com", 31))
            .await
            .unwrap();

        assert_eq!(
            updated,
            User {
                id: Some(id),
                name: "Ana Pérez".to_string(),
                email: "ana.perez@x.com".to_string(),
                age: 31,
            }
        );
        assert_eq!(service.get_user_by_id(id).await.unwrap(), updated);
    }

    #[actix_web::test]
    async fn test_update_keeping_own_email_succeeds() {
        let service = service().await;
        let id = service.create_user(ana()).await.unwrap().id.unwrap();

        let updated = service
            .update_user(id, User::new("Ana", "ana@x.com", 45))
            .await
            .unwrap();
        assert_eq!(updated.age, 45);
    }

    #[actix_web::test]
    async fn test_update_to_email_of_another_user_is_rejected() {
        let service = service().await;
        service.create_user(ana()).await.unwrap();
        let luis = service
            .create_user(User::new("Luis", "luis@x.com", 41))
            .await
            .unwrap();

        let err = service
            .update_user(luis.id.unwrap(), User::new("Luis", "ana@x.com", 41))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::DuplicateEmail(_)));
        assert_eq!(
            service.get_user_by_id(luis.id.unwrap()).await.unwrap(),
            luis
        );
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service().await;
        let id = service.create_user(ana()).await.unwrap().id.unwrap();

        service.delete_user(id).await.unwrap();

        assert!(matches!(
            service.get_user_by_id(id).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_check_database() {
        assert!(service().await.check_database().await.is_ok());
    }
}
