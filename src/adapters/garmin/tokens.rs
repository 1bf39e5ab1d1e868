//! OAuth tokens and the on-disk token store
//!
//! The token store is a directory with two JSON files, `oauth1_token.json`
//! and `oauth2_token.json`, in the layout other Garmin Connect tools use, so
//! an existing session directory can be shared.

use crate::config::SecretString;
use crate::domain::{ExporterError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// OAuth1 token file name
pub const OAUTH1_FILE: &str = "oauth1_token.json";

/// OAuth2 token file name
pub const OAUTH2_FILE: &str = "oauth2_token.json";

/// Long-lived OAuth1 token obtained from an SSO ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth1Token {
    /// Token key
    pub oauth_token: String,

    /// Token secret used for request signing
    pub oauth_token_secret: SecretString,

    /// MFA token, present when the account uses MFA
    #[serde(default)]
    pub mfa_token: Option<String>,

    /// Expiry of the MFA token
    #[serde(default)]
    pub mfa_expiration_timestamp: Option<String>,

    /// Service domain the token was issued for
    #[serde(default)]
    pub domain: Option<String>,
}

/// Short-lived OAuth2 bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Token {
    /// Granted scopes
    #[serde(default)]
    pub scope: String,

    /// Token ID
    #[serde(default)]
    pub jti: String,

    /// Token type, `Bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Bearer token for API calls
    pub access_token: SecretString,

    /// Refresh token
    pub refresh_token: SecretString,

    /// Lifetime in seconds at issue time
    pub expires_in: i64,

    /// Expiry as a Unix timestamp
    #[serde(default)]
    pub expires_at: i64,

    /// Refresh token lifetime in seconds
    #[serde(default)]
    pub refresh_token_expires_in: Option<i64>,

    /// Refresh token expiry as a Unix timestamp
    #[serde(default)]
    pub refresh_token_expires_at: Option<i64>,
}

impl OAuth2Token {
    /// Fill in absolute expiry timestamps from the relative lifetimes
    pub fn stamp_expiry(mut self, now: i64) -> Self {
        self.expires_at = now + self.expires_in;
        self.refresh_token_expires_at = self.refresh_token_expires_in.map(|secs| now + secs);
        self
    }

    /// Whether the access token has expired at `now`
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at <= now
    }

    /// Whether the access token has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Directory holding the cached session
#[derive(Debug, Clone)]
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    /// Token store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether either token file is present
    pub fn has_tokens(&self) -> bool {
        self.dir.join(OAUTH1_FILE).exists() || self.dir.join(OAUTH2_FILE).exists()
    }

    /// Load both tokens
    ///
    /// Returns `None` unless both files are present.
    ///
    /// # Errors
    ///
    /// Unreadable or malformed token files are authentication errors, since
    /// the cached session cannot be used.
    pub fn load(&self) -> Result<Option<(OAuth1Token, OAuth2Token)>> {
        let oauth1_path = self.dir.join(OAUTH1_FILE);
        let oauth2_path = self.dir.join(OAUTH2_FILE);

        if !oauth1_path.exists() || !oauth2_path.exists() {
            if self.has_tokens() {
                tracing::warn!(
                    tokenstore = %self.dir.display(),
                    "Tokenstore is incomplete, ignoring cached session"
                );
            }
            return Ok(None);
        }

        let oauth1 = read_token(&oauth1_path)?;
        let oauth2 = read_token(&oauth2_path)?;
        Ok(Some((oauth1, oauth2)))
    }

    /// Write both tokens, creating the directory if needed
    pub fn save(&self, oauth1: &OAuth1Token, oauth2: &OAuth2Token) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(
            self.dir.join(OAUTH1_FILE),
            serde_json::to_string_pretty(oauth1)?,
        )?;
        fs::write(
            self.dir.join(OAUTH2_FILE),
            serde_json::to_string_pretty(oauth2)?,
        )?;
        tracing::debug!(tokenstore = %self.dir.display(), "Saved session tokens");
        Ok(())
    }
}

fn read_token<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        ExporterError::Authentication(format!(
            "Cached token {} is unreadable: {e}",
            path.display()
        ))
    })
}
