use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;
use auth::TokenError;
use auth::TokenKind;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::TokenPair;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Authentication domain service.
///
/// Orchestrates the user repository, the password hasher, and the token
/// codec; holds no cross-request state beyond those immutable collaborators.
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_secret` - Process-wide signing secret
    /// * `access_ttl` - Lifetime of issued access tokens
    /// * `refresh_ttl` - Lifetime of issued refresh tokens
    pub fn new(
        repository: Arc<R>,
        token_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(token_secret),
            access_ttl,
            refresh_ttl,
        }
    }

    fn issue_pair(&self, subject: &str) -> Result<TokenPair, AuthError> {
        let access_token = self
            .token_codec
            .issue(subject, TokenKind::Access, self.access_ttl)
            .map_err(|e| AuthError::Unknown(format!("Token signing failed: {}", e)))?;
        let refresh_token = self
            .token_codec
            .issue(subject, TokenKind::Refresh, self.refresh_ttl)
            .map_err(|e| AuthError::Unknown(format!("Token signing failed: {}", e)))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn decode(&self, token: &str) -> Result<auth::Claims, AuthError> {
        self.token_codec.decode(token).map_err(|e| {
            match e {
                TokenError::Expired => tracing::debug!("Rejected expired token"),
                _ => tracing::debug!(error = %e, "Rejected token"),
            }
            AuthError::InvalidToken
        })
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<TokenPair, AuthError> {
        let existing = self
            .repository
            .find_by_email_or_username(command.email.as_str(), command.username.as_str())
            .await?;
        if existing.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| AuthError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        // The unique indexes close the race between the check above and this
        // insert; a concurrent duplicate comes back as UserAlreadyExists.
        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        self.issue_pair(created_user.email.as_str())
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| AuthError::Unknown(format!("Password verification failed: {}", e)))?;

        if !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_pair(user.email.as_str())
    }

    async fn refresh(&self, token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.decode(token)?;

        // An access token decodes fine but must not mint new pairs
        if claims.kind != TokenKind::Refresh {
            return Err(AuthError::InvalidToken);
        }

        self.issue_pair(&claims.sub)
    }

    async fn current_user(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.decode(token)?;

        self.repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidToken)
    }
}
