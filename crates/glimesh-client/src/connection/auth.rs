//! Credentials

use glimesh_common::ClientConfig;
use std::fmt;

/// Credentials for opening a connection
///
/// A client id gives read access. An access token is needed for mutations
/// and for querying the authenticated user.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthInfo {
    pub client_id: Option<String>,
    pub access_token: Option<String>,
}

impl AuthInfo {
    pub fn new(client_id: Option<String>, access_token: Option<String>) -> Self {
        Self {
            client_id,
            access_token,
        }
    }

    /// Take the credentials configured in the environment
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.client_id.clone(), config.access_token.clone())
    }

    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    #[must_use]
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }
}

impl fmt::Debug for AuthInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthInfo")
            .field("client_id", &self.client_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
