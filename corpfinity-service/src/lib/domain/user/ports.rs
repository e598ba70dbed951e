use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::TokenPair;
use crate::domain::user::models::User;

/// Port for the authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and log them in immediately.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Access/refresh token pair with subject set to the registered email
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Username or email is already taken
    /// * `DatabaseError` - Storage operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<TokenPair, AuthError>;

    /// Verify credentials and issue a fresh token pair.
    ///
    /// # Arguments
    /// * `email` - Email the user signed up with
    /// * `password` - Plaintext password to verify
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `DatabaseError` - Storage operation failed
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a fresh token pair.
    ///
    /// The subject is taken from the presented token; no store lookup is
    /// performed (stateless refresh).
    ///
    /// # Errors
    /// * `InvalidToken` - Token is expired, malformed, badly signed, or not a
    ///   refresh token
    async fn refresh(&self, token: &str) -> Result<TokenPair, AuthError>;

    /// Resolve the user a bearer token represents.
    ///
    /// # Errors
    /// * `InvalidToken` - Token does not verify, or its subject is unknown
    /// * `DatabaseError` - Storage operation failed
    async fn current_user(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness of username and email is enforced by the storage layer, so
    /// a concurrent duplicate insert surfaces here as `UserAlreadyExists`
    /// even when the registration pre-check saw nothing.
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Username or email is already taken
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve a user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Retrieve a user matching the email OR the username.
    ///
    /// Used at registration to detect collisions on either field.
    ///
    /// # Returns
    /// Optional user entity (None if neither field matches)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, AuthError>;
}
