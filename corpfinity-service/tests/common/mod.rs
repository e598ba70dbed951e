use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenCodec;
use chrono::Duration;
use corpfinity_service::domain::user::errors::AuthError;
use corpfinity_service::domain::user::models::User;
use corpfinity_service::domain::user::ports::UserRepository;
use corpfinity_service::domain::user::service::AuthService;
use corpfinity_service::inbound::http::router::create_router;
use tokio::sync::Mutex;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory adapter for the user repository port.
///
/// Mirrors the Postgres adapter's contract, including the storage-layer
/// uniqueness check inside `create`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.lock().await;

        let duplicate = users.iter().any(|existing| {
            existing.username.as_str() == user.username.as_str()
                || existing.email.as_str() == user.email.as_str()
        });
        if duplicate {
            return Err(AuthError::UserAlreadyExists);
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().await;
        Ok(users
            .iter()
            .find(|u| u.email.as_str() == email || u.username.as_str() == username)
            .cloned())
    }
}

/// Test application that spawns a real server on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_codec: TokenCodec,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::default());
        let auth_service = Arc::new(AuthService::new(
            repository,
            TEST_SECRET,
            Duration::minutes(30),
            Duration::days(7),
        ));

        let router = create_router(auth_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_codec: TokenCodec::new(TEST_SECRET),
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

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register a user and return the parsed token response body.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> serde_json::Value {
        let response = self
            .post("/auth/register")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert!(
            response.status().is_success(),
            "Registration failed: {}",
            response.status()
        );

        response.json().await.expect("Failed to parse response")
    }

    /// Log in with form-encoded credentials (username field = email).
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/login")
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }
}
