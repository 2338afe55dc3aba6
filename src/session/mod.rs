//! Session handling
//!
//! Replaces the ad-hoc client-side "logged in" flag with an explicit
//! server-side session: the store is the only authority, and the client
//! holds nothing but an opaque signed token.
//!
//! Token format: `base64url(session id) . base64url(hmac-sha256(id))`,
//! keyed by the server secret. The signature is checked before the store
//! is consulted, so forged tokens never touch session state.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

type HmacSha256 = Hmac<Sha256>;

/// Default session lifetime
const DEFAULT_TTL_HOURS: i64 = 24;

/// Session errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("malformed session token")]
    Malformed,
    #[error("invalid token signature")]
    BadSignature,
    #[error("session expired")]
    Expired,
    #[error("session not found")]
    NotFound,
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// In-memory session store with signed tokens
pub struct SessionStore {
    secret: Vec<u8>,
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    /// Create a store keyed by the server secret
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            ttl: Duration::hours(DEFAULT_TTL_HOURS),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Override the session lifetime
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Create a session and return its signed token.
    pub fn mint(&self, user_name: impl Into<String>, phone: impl Into<String>) -> (String, Session) {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            phone: phone.into(),
            created_at: now,
            expires_at: now + self.ttl,
        };

        let token = self.sign(session.id);
        self.sessions
            .write()
            .unwrap()
            .insert(session.id, session.clone());

        (token, session)
    }

    /// Resolve a token to its live session.
    ///
    /// Expired sessions are dropped from the store on the way out.
    pub fn verify(&self, token: &str) -> Result<Session, SessionError> {
        let id = self.authenticate(token)?;

        let mut sessions = self.sessions.write().unwrap();
        let session = sessions.get(&id).ok_or(SessionError::NotFound)?;

        if session.is_expired() {
            sessions.remove(&id);
            return Err(SessionError::Expired);
        }

        Ok(session.clone())
    }

    /// Revoke the session behind a token. Returns whether one was live.
    pub fn revoke(&self, token: &str) -> bool {
        match self.authenticate(token) {
            Ok(id) => self.sessions.write().unwrap().remove(&id).is_some(),
            Err(_) => false,
        }
    }

    /// Number of sessions currently held (expired ones included until
    /// their next access)
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().unwrap().is_empty()
    }

    fn sign(&self, id: Uuid) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret).expect("hmac accepts any key size");
        mac.update(id.as_bytes());
        let tag = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(id.as_bytes()),
            URL_SAFE_NO_PAD.encode(tag)
        )
    }

    /// Check token shape and signature, returning the embedded session id.
    fn authenticate(&self, token: &str) -> Result<Uuid, SessionError> {
        let (id_part, tag_part) = token.split_once('.').ok_or(SessionError::Malformed)?;

        let id_bytes = URL_SAFE_NO_PAD
            .decode(id_part)
            .map_err(|_| SessionError::Malformed)?;
        let tag_bytes = URL_SAFE_NO_PAD
            .decode(tag_part)
            .map_err(|_| SessionError::Malformed)?;
        let id = Uuid::from_slice(&id_bytes).map_err(|_| SessionError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret).expect("hmac accepts any key size");
        mac.update(id.as_bytes());
        mac.verify_slice(&tag_bytes)
            .map_err(|_| SessionError::BadSignature)?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_and_verify_round_trip() {
        let store = SessionStore::new("test-secret");
        let (token, session) = store.mint("Maria", "5511999990000");

        let resolved = store.verify(&token).unwrap();
        assert_eq!(resolved.id, session.id);
        assert_eq!(resolved.user_name, "Maria");
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let store = SessionStore::new("test-secret");
        let (token, _) = store.mint("Maria", "5511999990000");

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('A');
        assert!(matches!(
            store.verify(&tampered),
            Err(SessionError::BadSignature) | Err(SessionError::Malformed)
        ));

        assert_eq!(store.verify("not-a-token"), Err(SessionError::Malformed));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let store_a = SessionStore::new("secret-a");
        let store_b = SessionStore::new("secret-b");
        let (token, _) = store_a.mint("Maria", "5511999990000");

        assert_eq!(store_b.verify(&token), Err(SessionError::BadSignature));
    }

    #[test]
    fn test_revoke_ends_session() {
        let store = SessionStore::new("test-secret");
        let (token, _) = store.mint("Maria", "5511999990000");

        assert!(store.revoke(&token));
        assert_eq!(store.verify(&token), Err(SessionError::NotFound));
        assert!(!store.revoke(&token));
    }

    #[test]
    fn test_expired_session_is_dropped() {
        let store = SessionStore::new("test-secret").with_ttl(Duration::seconds(-1));
        let (token, _) = store.mint("Maria", "5511999990000");

        assert_eq!(store.verify(&token), Err(SessionError::Expired));
        // Second access sees it gone entirely
        assert_eq!(store.verify(&token), Err(SessionError::NotFound));
    }
}
