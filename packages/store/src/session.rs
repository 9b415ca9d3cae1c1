//! # Session marker
//!
//! A "logged in" session is nothing more than two local-storage entries:
//! [`AUTH_TOKEN_KEY`] holding an encoded [`SessionToken`] and [`LOGGED_IN_KEY`]
//! holding `"true"`. The token looks like a JWT but is not one: the signature
//! segment is a fixed slice of the base64'd secret, nothing verifies it, and
//! `exp` is never checked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::User;

/// Storage key for the registered users list.
pub const USERS_KEY: &str = "users";
/// Storage key for the encoded session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Storage key for the logged-in flag.
pub const LOGGED_IN_KEY: &str = "LoggedIn";

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token does not have three segments")]
    Malformed,
    #[error("token payload is not base64: {0}")]
    Base64(#[from] base64_simd::Error),
    #[error("token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

const HEADER: Header = Header {
    alg: "HS256",
    typ: "JWT",
};

/// Claims carried by the session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub user_id: String,
    pub name: String,
    pub email: String,
    /// Expiry, milliseconds since the Unix epoch. Advisory only.
    pub exp: i64,
}

impl SessionToken {
    /// Claims for `user`, expiring `ttl_secs` from now.
    pub fn new(user: &User, ttl_secs: u64) -> Self {
        let ttl_ms = i64::try_from(ttl_secs.saturating_mul(1000)).unwrap_or(i64::MAX);
        Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            exp: chrono::Utc::now().timestamp_millis().saturating_add(ttl_ms),
        }
    }

    /// Encode as `header.payload.signature`.
    pub fn encode(&self, secret: &str) -> Result<String, TokenError> {
        let header = base64_simd::URL_SAFE_NO_PAD.encode_to_string(serde_json::to_vec(&HEADER)?);
        let payload = base64_simd::URL_SAFE_NO_PAD.encode_to_string(serde_json::to_vec(self)?);
        let signature: String = base64_simd::STANDARD
            .encode_to_string(secret.as_bytes())
            .chars()
            .take(16)
            .collect();
        Ok(format!("{header}.{payload}.{signature}"))
    }

    /// Read the claims back out of an encoded token. The signature is ignored.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let mut segments = token.split('.');
        let (Some(_), Some(payload), Some(_), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };
        let bytes = base64_simd::URL_SAFE_NO_PAD.decode_to_vec(payload)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "1".into(),
            name: "Mahesh Dubey".into(),
            email: "mahesh@example.com".into(),
            password: "mahesh123".into(),
        }
    }

    #[test]
    fn test_encode_decode_claims() {
        let token = SessionToken::new(&user(), 3600);
        let encoded = token.encode("secret").unwrap();

        assert_eq!(encoded.split('.').count(), 3);
        assert!(!encoded.contains('='));
        assert_eq!(SessionToken::decode(&encoded).unwrap(), token);
    }

    #[test]
    fn test_signature_is_prefix_of_base64_secret() {
        let encoded = SessionToken::new(&user(), 60)
            .encode("a-rather-long-signing-secret")
            .unwrap();
        let signature = encoded.rsplit('.').next().unwrap();
        assert_eq!(signature.len(), 16);
        assert!(base64_simd::STANDARD
            .encode_to_string(b"a-rather-long-signing-secret")
            .starts_with(signature));
    }

    #[test]
    fn test_expiry_is_in_the_future() {
        let token = SessionToken::new(&user(), 3600);
        let now = chrono::Utc::now().timestamp_millis();
        assert!(token.exp > now + 3_500_000);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(SessionToken::decode("true"), Err(TokenError::Malformed)));
        assert!(SessionToken::decode("a.!!!.c").is_err());
    }
}
