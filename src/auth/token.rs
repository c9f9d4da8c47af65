use crate::types::{Claims, error::AppError};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Validity window of a freshly issued token
pub const TOKEN_TTL_DAYS: i64 = 30;

/// HS256 signing and verification keys derived from the service secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Mint a token for `username`, valid for `TOKEN_TTL_DAYS` from now
    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };
        self.sign(&claims)
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to encode token: {}", e)))
    }

    /// Check signature and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AppError::Unauthenticated("Invalid token".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

    #[test]
    fn test_issue_and_verify() {
        let keys = TokenKeys::new(SECRET);
        let token = keys.issue("alice").unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_repeated_verification_is_stable() {
        let keys = TokenKeys::new(SECRET);
        let token = keys.issue("alice").unwrap();

        assert_eq!(keys.verify(&token).unwrap(), keys.verify(&token).unwrap());
    }

    #[test]
    fn test_flipped_signature_rejected() {
        let keys = TokenKeys::new(SECRET);
        let token = keys.issue("alice").unwrap();

        // Alter the first signature character; the last one may only carry padding bits
        let sig_start = token.rfind('.').unwrap() + 1;
        let mut bytes = token.into_bytes();
        bytes[sig_start] = if bytes[sig_start] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(matches!(
            keys.verify(&tampered),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = TokenKeys::new(SECRET);
        let now = Utc::now().timestamp();
        let token = keys
            .sign(&Claims {
                username: "alice".to_string(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        assert!(matches!(
            keys.verify(&token),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenKeys::new(SECRET).issue("alice").unwrap();
        let other = TokenKeys::new("a-completely-different-secret-value!!");

        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let keys = TokenKeys::new(SECRET);
        assert!(keys.verify("").is_err());
        assert!(keys.verify("not.a.jwt").is_err());
    }
}
