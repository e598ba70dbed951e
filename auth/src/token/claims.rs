use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Discriminator carried inside every token.
///
/// Access tokens authorize API calls; refresh tokens may only be exchanged
/// for a new token pair. Serialized as the lowercase strings `"access"` and
/// `"refresh"` under the `"type"` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Signed token payload.
///
/// `sub` is the identity the token asserts (the user's email address),
/// `exp`/`iat` are Unix timestamps. Unknown tokens never reach this type:
/// the codec verifies the signature before deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,

    /// Token discriminator, serialized as `"type"`
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}
