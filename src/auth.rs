/// JWT validation for blog-service
///
/// Token issuance lives in the external identity provider; this service only
/// validates RS256 access tokens against the provider's public key. The key
/// is loaded once at startup and is immutable afterwards.
use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// RS256 only; symmetric algorithms are rejected to prevent confusion attacks.
const JWT_ALGORITHM: Algorithm = Algorithm::RS256;

/// JWT claims issued by the identity provider
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
    /// Username
    pub username: String,
}

static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Resolve the PEM-encoded public key from the environment.
///
/// `JWT_PUBLIC_KEY_PEM` takes precedence; `JWT_PUBLIC_KEY_PATH` points at a
/// PEM file on disk.
pub fn load_validation_key() -> Result<String> {
    if let Ok(pem) = std::env::var("JWT_PUBLIC_KEY_PEM") {
        return Ok(pem);
    }

    let path = std::env::var("JWT_PUBLIC_KEY_PATH")
        .map_err(|_| anyhow!("JWT_PUBLIC_KEY_PEM or JWT_PUBLIC_KEY_PATH must be set"))?;

    std::fs::read_to_string(&path)
        .map_err(|e| anyhow!("Failed to read JWT public key from {path}: {e}"))
}

/// Initialize the validation key. Must be called during startup before any
/// token validation; can only be called once.
pub fn initialize_validation_key(public_key_pem: &str) -> Result<()> {
    let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .map_err(|e| anyhow!("Failed to parse RSA public key: {e}"))?;

    JWT_DECODING_KEY
        .set(decoding_key)
        .map_err(|_| anyhow!("JWT decoding key already initialized"))?;

    Ok(())
}

/// Validate a bearer token and return its claims.
///
/// Fails if the key was never initialized, the signature or expiry is
/// invalid, or the token is not an access token.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = JWT_DECODING_KEY
        .get()
        .ok_or_else(|| anyhow!("JWT keys not initialized - call initialize_validation_key() at startup"))?;

    let validation = Validation::new(JWT_ALGORITHM);

    let token_data = decode::<Claims>(token, decoding_key, &validation)
        .map_err(|e| anyhow!("Token validation failed: {e}"))?;

    if token_data.claims.token_type != "access" {
        return Err(anyhow!("Invalid token type: expected access token"));
    }

    Ok(token_data)
}
