use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::CredentialRecord;
use crate::domain::authentication::ports::CredentialStore;
use crate::domain::seller::models::EmailAddress;
use crate::domain::seller::models::NewSeller;
use crate::domain::seller::models::PersonName;
use crate::domain::seller::models::Seller;
use crate::domain::seller::models::SellerId;
use crate::domain::seller::models::SellerUpdate;
use crate::domain::seller::ports::SellerRepository;
use crate::seller::errors::SellerError;

const EMAIL_UNIQUE_CONSTRAINT: &str = "sellers_table_e_mail_key";

#[derive(sqlx::FromRow)]
struct SellerRow {
    id: i64,
    first_name: String,
    last_name: String,
    e_mail: String,
    password: String,
}

impl TryFrom<SellerRow> for Seller {
    type Error = SellerError;

    fn try_from(row: SellerRow) -> Result<Self, Self::Error> {
        Ok(Seller {
            id: SellerId(row.id),
            first_name: PersonName::new(row.first_name)?,
            last_name: PersonName::new(row.last_name)?,
            e_mail: EmailAddress::new(row.e_mail)?,
            password_hash: row.password,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    e_mail: String,
    password: String,
}

impl From<CredentialRow> for CredentialRecord {
    fn from(row: CredentialRow) -> Self {
        CredentialRecord {
            seller_id: SellerId(row.id),
            identity_key: row.e_mail,
            secret_hash: row.password,
        }
    }
}

fn map_write_error(e: sqlx::Error, e_mail: &EmailAddress) -> SellerError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
            return SellerError::EmailAlreadyExists(e_mail.as_str().to_string());
        }
    }
    SellerError::DatabaseError(e.to_string())
}

fn store_unavailable(e: sqlx::Error) -> AuthError {
    AuthError::StoreUnavailable(e.to_string())
}

/// Sellers table, also serving as the credential store (e-mail is the
/// login identity, `password` holds the Argon2id hash).
pub struct PostgresSellerRepository {
    pool: PgPool,
}

impl PostgresSellerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SellerRepository for PostgresSellerRepository {
    async fn create(&self, seller: NewSeller) -> Result<Seller, SellerError> {
        let row: SellerRow = sqlx::query_as(
            r#"
            INSERT INTO sellers_table (first_name, last_name, e_mail, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, e_mail, password
            "#,
        )
        .bind(seller.first_name.as_str())
        .bind(seller.last_name.as_str())
        .bind(seller.e_mail.as_str())
        .bind(&seller.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &seller.e_mail))?;

        Seller::try_from(row)
    }

    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, SellerError> {
        let row: Option<SellerRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, e_mail, password
            FROM sellers_table
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SellerError::DatabaseError(e.to_string()))?;

        row.map(Seller::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Seller>, SellerError> {
        let rows: Vec<SellerRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, e_mail, password
            FROM sellers_table
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SellerError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Seller::try_from).collect()
    }

    async fn update(&self, id: &SellerId, update: SellerUpdate) -> Result<Seller, SellerError> {
        let row: Option<SellerRow> = sqlx::query_as(
            r#"
            UPDATE sellers_table
            SET first_name = $2, last_name = $3, e_mail = $4,
                password = COALESCE($5, password)
            WHERE id = $1
            RETURNING id, first_name, last_name, e_mail, password
            "#,
        )
        .bind(id.0)
        .bind(update.first_name.as_str())
        .bind(update.last_name.as_str())
        .bind(update.e_mail.as_str())
        .bind(update.password_hash.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &update.e_mail))?;

        row.map(Seller::try_from)
            .transpose()?
            .ok_or(SellerError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &SellerId) -> Result<(), SellerError> {
        let result = sqlx::query(
            r#"
            DELETE FROM sellers_table
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| SellerError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SellerError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for PostgresSellerRepository {
    async fn find_by_identity(
        &self,
        identity_key: &str,
    ) -> Result<Option<CredentialRecord>, AuthError> {
        let row: Option<CredentialRow> = sqlx::query_as(
            r#"
            SELECT id, e_mail, password
            FROM sellers_table
            WHERE e_mail = $1
            "#,
        )
        .bind(identity_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_unavailable)?;

        Ok(row.map(CredentialRecord::from))
    }
}
