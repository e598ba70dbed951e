use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenKind;
use super::errors::TokenError;

/// Issues and verifies signed bearer tokens.
///
/// Uses HS256 with a single process-wide secret injected at construction;
/// there is no key rotation. The signature is checked before any embedded
/// claim is trusted, and a missing or passed `exp` fails verification.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from the signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for `subject`, expiring `ttl` from now.
    ///
    /// # Errors
    /// * `SigningFailed` - Token signing failed
    pub fn issue(
        &self,
        subject: &str,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            kind,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, then return its claims.
    ///
    /// # Errors
    /// * `Expired` - Token `exp` is in the past
    /// * `Invalid` - Bad signature, malformed structure, or missing claims
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Strict expiry: no clock-skew allowance
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test_secret_key_at_least_32_bytes!")
    }

    #[test]
    fn test_issue_and_decode() {
        let codec = codec();

        let token = codec
            .issue("alice@example.com", TokenKind::Access, Duration::minutes(30))
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_decode_garbage() {
        let result = codec().decode("not.a.token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let issuer = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer
            .issue("alice@example.com", TokenKind::Access, Duration::minutes(30))
            .expect("Failed to issue token");

        let result = verifier.decode(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let codec = codec();

        // Validly signed but already past its expiry
        let token = codec
            .issue("alice@example.com", TokenKind::Refresh, Duration::minutes(-5))
            .expect("Failed to issue token");

        let result = codec.decode(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_kind_round_trips() {
        let codec = codec();

        let token = codec
            .issue("bob@example.com", TokenKind::Refresh, Duration::days(7))
            .expect("Failed to issue token");

        let claims = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.kind, TokenKind::Refresh);
    }
}
