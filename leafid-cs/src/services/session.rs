//! Anonymous session identity
//!
//! A session token only scopes history queries; it is not a credential.
//! Transport (cookie, header) is the HTTP layer's concern.

use rand::{rngs::OsRng, RngCore};
use serde::Serialize;
use std::fmt;

/// Random bytes per token (hex encoded to twice as many characters)
pub const SESSION_TOKEN_BYTES: usize = 16;

/// Opaque, validated session token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mints and checks session identities
pub trait SessionIdentityProvider: Send + Sync {
    /// New identity with negligible collision probability
    fn generate(&self) -> SessionId;

    /// Accept a client-supplied token if it is well formed
    fn validate(&self, token: &str) -> Option<SessionId>;
}

/// Tokens drawn from the OS cryptographic RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSessionProvider;

impl SessionIdentityProvider for RandomSessionProvider {
    fn generate(&self) -> SessionId {
        let mut bytes = [0u8; SESSION_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        SessionId(hex::encode(bytes))
    }

    fn validate(&self, token: &str) -> Option<SessionId> {
        let well_formed = token.len() == SESSION_TOKEN_BYTES * 2
            && token
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        well_formed.then(|| SessionId(token.to_string()))
    }
}
