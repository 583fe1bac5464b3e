//! Desktop credential persistence using the OS keyring.

use keyring::Entry;
use vaultnotes_core::auth::{SessionError, SessionPersistence, SessionResult, TokenPair};

const KEYRING_SERVICE_NAME: &str = "vaultnotes";
const KEYRING_SESSION_USERNAME: &str = "session_tokens";

/// Credential store backed by the OS keyring (`keyring` crate).
///
/// The access/refresh pair is serialized into a single entry, so a write
/// either lands both credentials or neither.
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    service_name: String,
    username: String,
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_SESSION_USERNAME.to_string(),
        }
    }
}

impl KeyringSessionStore {
    fn entry(&self) -> SessionResult<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| SessionError::Storage(error.to_string()))
    }
}

impl SessionPersistence for KeyringSessionStore {
    fn load(&self) -> SessionResult<Option<TokenPair>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(SessionError::Storage(error.to_string())),
        }
    }

    fn save(&self, tokens: &TokenPair) -> SessionResult<()> {
        let serialized = serde_json::to_string(tokens)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| SessionError::Storage(error.to_string()))
    }

    fn clear(&self) -> SessionResult<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(SessionError::Storage(error.to_string())),
        }
    }
}
