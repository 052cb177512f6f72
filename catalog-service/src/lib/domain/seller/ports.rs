use async_trait::async_trait;

use crate::domain::authentication::models::Principal;
use crate::seller::errors::SellerError;
use crate::seller::models::CreateSellerCommand;
use crate::seller::models::NewSeller;
use crate::seller::models::Seller;
use crate::seller::models::SellerId;
use crate::seller::models::SellerUpdate;
use crate::seller::models::UpdateSellerCommand;

/// Port for seller domain service operations.
#[async_trait]
pub trait SellerServicePort: Send + Sync + 'static {
    /// Register a new seller.
    ///
    /// # Arguments
    /// * `command` - Validated command containing names, email, and plaintext password
    ///
    /// # Returns
    /// Created seller entity (password already hashed)
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn create_seller(&self, command: CreateSellerCommand) -> Result<Seller, SellerError>;

    /// Retrieve all sellers.
    async fn list_sellers(&self) -> Result<Vec<Seller>, SellerError>;

    /// Retrieve seller by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Seller does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_seller(&self, id: &SellerId) -> Result<Seller, SellerError>;

    /// Replace a seller's profile on behalf of `actor`.
    ///
    /// A new password in `command` is hashed first; profile and hash are then
    /// stored in a single write, so either both change or neither does.
    ///
    /// # Errors
    /// * `NotFound` - Seller does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn update_seller(
        &self,
        id: &SellerId,
        command: UpdateSellerCommand,
        actor: &Principal,
    ) -> Result<Seller, SellerError>;

    /// Delete a seller (and their books) on behalf of `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Seller does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_seller(&self, id: &SellerId, actor: &Principal) -> Result<(), SellerError>;
}

/// Persistence operations for seller aggregate.
#[async_trait]
pub trait SellerRepository: Send + Sync + 'static {
    /// Persist new seller to storage.
    ///
    /// # Returns
    /// Created seller entity with its assigned id
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, seller: NewSeller) -> Result<Seller, SellerError>;

    /// Retrieve seller by identifier.
    ///
    /// # Returns
    /// Optional seller entity (None if not found)
    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, SellerError>;

    /// Retrieve all sellers ordered by id.
    async fn list_all(&self) -> Result<Vec<Seller>, SellerError>;

    /// Apply `update` to the seller row in one statement.
    ///
    /// `update.password_hash == None` keeps the stored hash.
    ///
    /// # Errors
    /// * `NotFound` - Seller does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: &SellerId, update: SellerUpdate) -> Result<Seller, SellerError>;

    /// Remove seller from storage.
    ///
    /// # Errors
    /// * `NotFound` - Seller does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &SellerId) -> Result<(), SellerError>;
}
