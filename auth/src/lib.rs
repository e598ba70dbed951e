//! Authentication primitives library
//!
//! Provides the two stateless building blocks the backend needs:
//! - Password hashing and verification (Argon2id)
//! - Signed bearer tokens with an access/refresh discriminator (JWT, HS256)
//!
//! The service crate composes these behind its own domain traits; nothing in
//! here touches storage or transport.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{TokenCodec, TokenKind};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec
//!     .issue("alice@example.com", TokenKind::Access, chrono::Duration::minutes(30))
//!     .unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! assert_eq!(claims.kind, TokenKind::Access);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenKind;
