//! Non-verifying decoder for the access credential's embedded claims.
//!
//! The payload segment of the token is read without checking the signature;
//! the result is a routing hint only. Authorization is enforced server-side
//! on every admin call, so a forged role here buys nothing but a blank
//! dashboard.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClaimDecodeError {
    #[error("Token is not in header.payload.signature form")]
    MalformedToken,
    #[error("Token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Role attribute carried by the access credential.
///
/// Anything that is not exactly `admin` decodes as [`Role::User`]; the
/// decoder fails closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

/// Claims extracted from the access credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claims {
    pub role: Role,
}

#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    role: Option<String>,
}

/// Decode the claims of a bearer token without verifying its signature.
///
/// Total over arbitrary input: any string either yields a [`Claims`] value or
/// a [`ClaimDecodeError`], never a panic.
pub fn decode_claims(access: &str) -> Result<Claims, ClaimDecodeError> {
    let mut segments = access.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(ClaimDecodeError::MalformedToken);
    };

    let decoded = URL_SAFE_NO_PAD.decode(payload.as_bytes())?;
    let raw: RawClaims = serde_json::from_slice(&decoded)?;

    let role = match raw.role.as_deref() {
        Some("admin") => Role::Admin,
        _ => Role::User,
    };
    Ok(Claims { role })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_admin_role() {
        let token = token_with_payload(r#"{"role": "admin", "user_id": 3}"#);
        assert_eq!(decode_claims(&token).unwrap().role, Role::Admin);
    }

    #[test]
    fn missing_or_unknown_role_fails_closed_to_user() {
        let plain = token_with_payload(r#"{"user_id": 3}"#);
        assert_eq!(decode_claims(&plain).unwrap().role, Role::User);

        let shouty = token_with_payload(r#"{"role": "ADMIN"}"#);
        assert_eq!(decode_claims(&shouty).unwrap().role, Role::User);
    }

    #[test]
    fn decode_is_total_over_arbitrary_strings() {
        for input in [
            "",
            "garbage",
            "a.b",
            "a.b.c.d",
            "a.!!!not-base64!!!.c",
            &token_with_payload("not json"),
        ] {
            assert!(decode_claims(input).is_err(), "expected error for {input:?}");
        }
    }
}
