use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::authentication::models::Principal;
use crate::seller::errors::SellerError;
use crate::seller::models::CreateSellerCommand;
use crate::seller::models::NewSeller;
use crate::seller::models::Seller;
use crate::seller::models::SellerId;
use crate::seller::models::SellerUpdate;
use crate::seller::models::UpdateSellerCommand;
use crate::seller::ports::SellerRepository;
use crate::seller::ports::SellerServicePort;

/// Domain service implementation for seller operations.
pub struct SellerService<SR>
where
    SR: SellerRepository,
{
    repository: Arc<SR>,
    password_hasher: auth::PasswordHasher,
}

impl<SR> SellerService<SR>
where
    SR: SellerRepository,
{
    /// Create a new seller service.
    ///
    /// # Arguments
    /// * `repository` - Seller persistence implementation
    /// * `password_hasher` - Hasher used for registration passwords
    pub fn new(repository: Arc<SR>, password_hasher: auth::PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, SellerError> {
        let hasher = self.password_hasher.clone();

        // Argon2 runs on the blocking pool, not the async workers
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| SellerError::Unknown(format!("Password hashing task failed: {}", e)))??;

        Ok(hash)
    }
}

#[async_trait]
impl<SR> SellerServicePort for SellerService<SR>
where
    SR: SellerRepository,
{
    async fn create_seller(&self, command: CreateSellerCommand) -> Result<Seller, SellerError> {
        let password_hash = self.hash_password(command.password).await?;

        let seller = NewSeller {
            first_name: command.first_name,
            last_name: command.last_name,
            e_mail: command.e_mail,
            password_hash,
        };

        let created_seller = self.repository.create(seller).await?;

        tracing::info!(seller_id = %created_seller.id, "Seller registered");

        Ok(created_seller)
    }

    async fn list_sellers(&self) -> Result<Vec<Seller>, SellerError> {
        self.repository.list_all().await
    }

    async fn get_seller(&self, id: &SellerId) -> Result<Seller, SellerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SellerError::NotFound(id.to_string()))
    }

    async fn update_seller(
        &self,
        id: &SellerId,
        command: UpdateSellerCommand,
        actor: &Principal,
    ) -> Result<Seller, SellerError> {
        let password_changed = command.password.is_some();
        let password_hash = match command.password {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        let update = SellerUpdate {
            first_name: command.first_name,
            last_name: command.last_name,
            e_mail: command.e_mail,
            password_hash,
        };

        let updated_seller = self.repository.update(id, update).await?;

        tracing::info!(
            seller_id = %updated_seller.id,
            actor = %actor.seller_id,
            password_changed,
            "Seller updated"
        );

        Ok(updated_seller)
    }

    async fn delete_seller(&self, id: &SellerId, actor: &Principal) -> Result<(), SellerError> {
        self.repository.delete(id).await?;

        tracing::info!(seller_id = %id, actor = %actor.seller_id, "Seller deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::seller::models::EmailAddress;
    use crate::seller::models::PersonName;

    mock! {
        pub TestSellerRepository {}

        #[async_trait]
        impl SellerRepository for TestSellerRepository {
            async fn create(&self, seller: NewSeller) -> Result<Seller, SellerError>;
            async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, SellerError>;
            async fn list_all(&self) -> Result<Vec<Seller>, SellerError>;
            async fn update(&self, id: &SellerId, update: SellerUpdate) -> Result<Seller, SellerError>;
            async fn delete(&self, id: &SellerId) -> Result<(), SellerError>;
        }
    }

    fn hasher() -> auth::PasswordHasher {
        auth::PasswordHasher::with_params(1024, 1, 1).unwrap()
    }

    fn actor() -> Principal {
        Principal {
            seller_id: SellerId(99),
            identity_key: "admin@example.com".to_string(),
        }
    }

    fn seller(id: i64, e_mail: &str) -> Seller {
        Seller {
            id: SellerId(id),
            first_name: PersonName::new("Evgeny".to_string()).unwrap(),
            last_name: PersonName::new("Somov".to_string()).unwrap(),
            e_mail: EmailAddress::new(e_mail.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
        }
    }

    fn create_command(e_mail: &str) -> CreateSellerCommand {
        CreateSellerCommand::new(
            PersonName::new("Evgeny".to_string()).unwrap(),
            PersonName::new("Somov".to_string()).unwrap(),
            EmailAddress::new(e_mail.to_string()).unwrap(),
            "password".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_seller_hashes_password() {
        let mut repository = MockTestSellerRepository::new();

        repository
            .expect_create()
            .withf(|seller| {
                seller.e_mail.as_str() == "somov@mail.ru"
                    && seller.password_hash.starts_with("$argon2id$")
                    && seller.password_hash != "password"
            })
            .times(1)
            .returning(|seller| {
                Ok(Seller {
                    id: SellerId(1),
                    first_name: seller.first_name,
                    last_name: seller.last_name,
                    e_mail: seller.e_mail,
                    password_hash: seller.password_hash,
                })
            });

        let service = SellerService::new(Arc::new(repository), hasher());

        let created = service
            .create_seller(create_command("somov@mail.ru"))
            .await
            .unwrap();

        assert_eq!(created.id, SellerId(1));
        assert!(hasher()
            .verify("password", &created.password_hash)
            .unwrap());
    }

    #[tokio::test]
    async fn test_create_seller_duplicate_email() {
        let mut repository = MockTestSellerRepository::new();

        repository.expect_create().times(1).returning(|seller| {
            Err(SellerError::EmailAlreadyExists(
                seller.e_mail.as_str().to_string(),
            ))
        });

        let service = SellerService::new(Arc::new(repository), hasher());

        let result = service.create_seller(create_command("somov@mail.ru")).await;
        assert!(matches!(result, Err(SellerError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_get_seller_not_found() {
        let mut repository = MockTestSellerRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = SellerService::new(Arc::new(repository), hasher());

        let result = service.get_seller(&SellerId(7)).await;
        assert!(matches!(result, Err(SellerError::NotFound(_))));
    }

    fn update_command(e_mail: &str, password: Option<&str>) -> UpdateSellerCommand {
        UpdateSellerCommand {
            first_name: PersonName::new("Ivan".to_string()).unwrap(),
            last_name: PersonName::new("Petrov".to_string()).unwrap(),
            e_mail: EmailAddress::new(e_mail.to_string()).unwrap(),
            password: password.map(str::to_string),
        }
    }

    fn applied(id: &SellerId, update: SellerUpdate) -> Seller {
        Seller {
            id: *id,
            first_name: update.first_name,
            last_name: update.last_name,
            e_mail: update.e_mail,
            password_hash: update
                .password_hash
                .unwrap_or_else(|| seller(id.0, "unused@example.com").password_hash),
        }
    }

    #[tokio::test]
    async fn test_update_seller_keeps_password_hash() {
        let mut repository = MockTestSellerRepository::new();

        repository.expect_find_by_id().times(0);
        repository
            .expect_update()
            .withf(|id, update| {
                *id == SellerId(1)
                    && update.e_mail.as_str() == "new@example.com"
                    && update.first_name.as_str() == "Ivan"
                    && update.password_hash.is_none()
            })
            .times(1)
            .returning(|id, update| Ok(applied(id, update)));

        let service = SellerService::new(Arc::new(repository), hasher());

        let updated = service
            .update_seller(&SellerId(1), update_command("new@example.com", None), &actor())
            .await
            .unwrap();
        assert_eq!(updated.last_name.as_str(), "Petrov");
        assert_eq!(updated.password_hash, "$argon2id$test_hash");
    }

    #[tokio::test]
    async fn test_update_seller_writes_profile_and_password_together() {
        let mut repository = MockTestSellerRepository::new();

        repository
            .expect_update()
            .withf(|id, update| {
                *id == SellerId(1)
                    && update.e_mail.as_str() == "new@example.com"
                    && update
                        .password_hash
                        .as_deref()
                        .is_some_and(|hash| hasher().verify("new-password", hash).unwrap())
            })
            .times(1)
            .returning(|id, update| Ok(applied(id, update)));

        let service = SellerService::new(Arc::new(repository), hasher());

        let updated = service
            .update_seller(
                &SellerId(1),
                update_command("new@example.com", Some("new-password")),
                &actor(),
            )
            .await
            .unwrap();
        assert!(hasher()
            .verify("new-password", &updated.password_hash)
            .unwrap());
    }

    #[tokio::test]
    async fn test_update_seller_conflict_changes_nothing() {
        let mut repository = MockTestSellerRepository::new();

        // The single write is rejected; no second write follows
        repository
            .expect_update()
            .times(1)
            .returning(|_, update| {
                Err(SellerError::EmailAlreadyExists(
                    update.e_mail.as_str().to_string(),
                ))
            });
        repository.expect_create().times(0);

        let service = SellerService::new(Arc::new(repository), hasher());

        let result = service
            .update_seller(
                &SellerId(1),
                update_command("taken@example.com", Some("new-password")),
                &actor(),
            )
            .await;
        assert!(matches!(result, Err(SellerError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_update_seller_not_found() {
        let mut repository = MockTestSellerRepository::new();

        repository
            .expect_update()
            .times(1)
            .returning(|id, _| Err(SellerError::NotFound(id.to_string())));

        let service = SellerService::new(Arc::new(repository), hasher());

        let result = service
            .update_seller(&SellerId(1), update_command("new@example.com", None), &actor())
            .await;
        assert!(matches!(result, Err(SellerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_seller_not_found() {
        let mut repository = MockTestSellerRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(SellerError::NotFound(id.to_string())));

        let service = SellerService::new(Arc::new(repository), hasher());

        let result = service.delete_seller(&SellerId(3), &actor()).await;
        assert!(matches!(result, Err(SellerError::NotFound(_))));
    }
}
