//! Access-token claim decoding.
//!
//! # Design
//! - Only the payload segment is read; signatures are the backend's concern.
//! - Decoding failures yield `None` so callers treat the identity as unknown.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use board_api_models::User;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "userId")]
    user_id: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// Decode the identity embedded in a JWT-shaped access token.
///
/// The identifier is taken from `sub`, then `id`, then `userId`.
#[must_use]
pub fn user_from_token(token: &str) -> Option<User> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    let id = claims
        .sub
        .or(claims.id)
        .or(claims.user_id)
        .filter(|value| !value.trim().is_empty())?;
    Some(User {
        id,
        email: claims.email.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn reads_sub_and_email() {
        let token = token_with(r#"{"sub":"u-7","email":"ann@example.com"}"#);
        let user = user_from_token(&token).expect("claims");
        assert_eq!(user.id, "u-7");
        assert_eq!(user.email, "ann@example.com");
    }

    #[test]
    fn falls_back_to_user_id_claim() {
        let token = token_with(r#"{"userId":"42"}"#);
        let user = user_from_token(&token).expect("claims");
        assert_eq!(user.id, "42");
        assert!(user.email.is_empty());
    }

    #[test]
    fn rejects_opaque_tokens() {
        assert!(user_from_token("opaque-token").is_none());
        assert!(user_from_token("a.!!!.c").is_none());
        assert!(user_from_token(&token_with(r#"{"email":"x@y"}"#)).is_none());
    }
}
