#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use axum::Router;
use catalog_service::book::errors::BookError;
use catalog_service::book::models::Book;
use catalog_service::book::models::BookId;
use catalog_service::book::models::NewBook;
use catalog_service::book::ports::BookRepository;
use catalog_service::domain::authentication::errors::AuthError;
use catalog_service::domain::authentication::models::CredentialRecord;
use catalog_service::domain::authentication::ports::CredentialStore;
use catalog_service::domain::authentication::service::AuthService;
use catalog_service::domain::book::service::BookService;
use catalog_service::domain::seller::service::SellerService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::seller::errors::SellerError;
use catalog_service::seller::models::NewSeller;
use catalog_service::seller::models::Seller;
use catalog_service::seller::models::SellerId;
use catalog_service::seller::models::SellerUpdate;
use catalog_service::seller::ports::SellerRepository;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Cheap Argon2id cost so tests stay fast.
pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::with_params(1024, 1, 1).expect("Failed to build test hasher")
}

pub fn test_authenticator() -> Arc<Authenticator> {
    Arc::new(Authenticator::new(TEST_SECRET).with_password_hasher(test_hasher()))
}

#[derive(Default)]
struct StoreState {
    sellers: BTreeMap<i64, Seller>,
    books: BTreeMap<i64, Book>,
    next_seller_id: i64,
    next_book_id: i64,
}

/// In-memory sellers and books, standing in for PostgreSQL.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password_hash_of(&self, e_mail: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .sellers
            .values()
            .find(|seller| seller.e_mail.as_str() == e_mail)
            .map(|seller| seller.password_hash.clone())
    }
}

#[async_trait]
impl SellerRepository for InMemoryStore {
    async fn create(&self, seller: NewSeller) -> Result<Seller, SellerError> {
        let mut state = self.state.lock().unwrap();

        if state.sellers.values().any(|s| s.e_mail == seller.e_mail) {
            return Err(SellerError::EmailAlreadyExists(
                seller.e_mail.as_str().to_string(),
            ));
        }

        state.next_seller_id += 1;
        let created = Seller {
            id: SellerId(state.next_seller_id),
            first_name: seller.first_name,
            last_name: seller.last_name,
            e_mail: seller.e_mail,
            password_hash: seller.password_hash,
        };
        state.sellers.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, SellerError> {
        Ok(self.state.lock().unwrap().sellers.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Seller>, SellerError> {
        Ok(self.state.lock().unwrap().sellers.values().cloned().collect())
    }

    async fn update(&self, id: &SellerId, update: SellerUpdate) -> Result<Seller, SellerError> {
        let mut state = self.state.lock().unwrap();

        if state
            .sellers
            .values()
            .any(|s| s.id != *id && s.e_mail == update.e_mail)
        {
            return Err(SellerError::EmailAlreadyExists(
                update.e_mail.as_str().to_string(),
            ));
        }

        let seller = state
            .sellers
            .get_mut(&id.0)
            .ok_or(SellerError::NotFound(id.to_string()))?;
        seller.first_name = update.first_name;
        seller.last_name = update.last_name;
        seller.e_mail = update.e_mail;
        if let Some(password_hash) = update.password_hash {
            seller.password_hash = password_hash;
        }

        Ok(seller.clone())
    }

    async fn delete(&self, id: &SellerId) -> Result<(), SellerError> {
        let mut state = self.state.lock().unwrap();

        state
            .sellers
            .remove(&id.0)
            .ok_or(SellerError::NotFound(id.to_string()))?;
        state.books.retain(|_, book| book.seller_id != *id);

        Ok(())
    }
}

#[async_trait]
impl BookRepository for InMemoryStore {
    async fn create(&self, book: NewBook) -> Result<Book, BookError> {
        let mut state = self.state.lock().unwrap();

        state.next_book_id += 1;
        let created = Book {
            id: BookId(state.next_book_id),
            seller_id: book.seller_id,
            title: book.title,
            author: book.author,
            year: book.year,
            count_pages: book.count_pages,
        };
        state.books.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        Ok(self.state.lock().unwrap().books.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        Ok(self.state.lock().unwrap().books.values().cloned().collect())
    }

    async fn list_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Book>, BookError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .books
            .values()
            .filter(|book| book.seller_id == *seller_id)
            .cloned()
            .collect())
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut state = self.state.lock().unwrap();

        match state.books.get_mut(&book.id.0) {
            Some(existing) => {
                *existing = book.clone();
                Ok(book)
            }
            None => Err(BookError::NotFound(book.id.to_string())),
        }
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        self.state
            .lock()
            .unwrap()
            .books
            .remove(&id.0)
            .map(|_| ())
            .ok_or(BookError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl CredentialStore for InMemoryStore {
    async fn find_by_identity(
        &self,
        identity_key: &str,
    ) -> Result<Option<CredentialRecord>, AuthError> {
        let state = self.state.lock().unwrap();

        Ok(state
            .sellers
            .values()
            .find(|seller| seller.e_mail.as_str() == identity_key)
            .map(|seller| CredentialRecord {
                seller_id: seller.id,
                identity_key: seller.e_mail.as_str().to_string(),
                secret_hash: seller.password_hash.clone(),
            }))
    }
}

/// Credential store whose backend is down.
pub struct UnavailableStore;

#[async_trait]
impl CredentialStore for UnavailableStore {
    async fn find_by_identity(&self, _: &str) -> Result<Option<CredentialRecord>, AuthError> {
        Err(AuthError::StoreUnavailable("connection refused".to_string()))
    }
}

/// Credential store that never answers.
pub struct HangingStore;

#[async_trait]
impl CredentialStore for HangingStore {
    async fn find_by_identity(&self, _: &str) -> Result<Option<CredentialRecord>, AuthError> {
        std::future::pending().await
    }
}

/// Router over in-memory adapters, authenticating against `credentials`.
pub fn build_router<CS: CredentialStore>(
    store: Arc<InMemoryStore>,
    credentials: Arc<CS>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let seller_service = Arc::new(SellerService::new(Arc::clone(&store), test_hasher()));
    let book_service = Arc::new(BookService::new(Arc::clone(&store), store));
    let auth_service = Arc::new(
        AuthService::new(credentials, authenticator)
            .with_lookup_timeout(Duration::from_millis(200)),
    );

    create_router(seller_service, book_service, auth_service)
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
    pub authenticator: Arc<Authenticator>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application backed by an in-memory store
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::spawn_with_credentials(Arc::clone(&store), store).await
    }

    /// Spawn the application with a separate credential store
    pub async fn spawn_with_credentials<CS: CredentialStore>(
        store: Arc<InMemoryStore>,
        credentials: Arc<CS>,
    ) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = test_authenticator();
        let router = build_router(Arc::clone(&store), credentials, Arc::clone(&authenticator));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            store,
            authenticator,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a seller and return the assigned id
    pub async fn register_seller(&self, e_mail: &str, password: &str) -> i64 {
        let response = self
            .post("/api/sellers")
            .json(&json!({
                "first_name": "Alice",
                "last_name": "Liddell",
                "e_mail": e_mail,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to register seller");
        assert_eq!(response.status(), 201);

        let body: Value = response.json().await.unwrap();
        body["data"]["id"].as_i64().expect("Missing seller id")
    }

    /// Log in and return the access token
    pub async fn login(&self, e_mail: &str, password: &str) -> String {
        let response = self
            .post("/api/token")
            .json(&json!({ "e_mail": e_mail, "password": password }))
            .send()
            .await
            .expect("Failed to log in");
        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.unwrap();
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}
