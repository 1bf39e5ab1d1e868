//! Session establishment with a tokenstore directory
//!
//! The first run signs in with credentials and then logs in a second time
//! with the tokenstore so the session is written to disk. Later runs resume
//! from the cached tokens.

use super::service::FitnessService;
use super::tokens::TokenStore;
use crate::config::GarminConfig;
use crate::domain::{ExporterError, Result};
use secrecy::ExposeSecret;
use std::path::Path;

/// Authenticate `client` using the tokenstore configured in `config`
///
/// # Errors
///
/// Configuration errors when credentials are needed but missing, and the
/// client's authentication or connection errors. A failure to persist the
/// session after a fresh sign-in is logged and ignored.
pub async fn establish_session<C>(client: &mut C, config: &GarminConfig) -> Result<()>
where
    C: FitnessService + ?Sized,
{
    let tokenstore = config.tokenstore_path();
    let cache_available = match std::fs::create_dir_all(&tokenstore) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(
                tokenstore = %tokenstore.display(),
                error = %e,
                "Cannot create tokenstore directory, continuing without session cache"
            );
            false
        }
    };

    check_credentials(config, &tokenstore)?;

    let store = TokenStore::new(&tokenstore);
    if store.has_tokens() {
        tracing::info!(tokenstore = %tokenstore.display(), "Using cached session");
        return client.login(Some(tokenstore.as_path())).await;
    }

    client.login(None).await?;

    if cache_available {
        if let Err(e) = client.login(Some(tokenstore.as_path())).await {
            tracing::debug!(
                tokenstore = %tokenstore.display(),
                error = %e,
                "Could not save session tokens, continuing with in-memory session"
            );
        }
    }

    Ok(())
}

/// Credentials must be present unless a tokenstore directory exists
///
/// # Errors
///
/// A configuration error naming the missing credential and the tokenstore
/// path that was checked.
pub fn check_credentials(config: &GarminConfig, tokenstore: &Path) -> Result<()> {
    if tokenstore.exists() {
        return Ok(());
    }

    let has_username = config.username.as_deref().is_some_and(|u| !u.is_empty());
    let has_password = config
        .password
        .as_ref()
        .is_some_and(|p| !p.expose_secret().is_empty());

    if !has_username {
        return Err(ExporterError::Configuration(format!(
            "Username required (via --username or GARMIN_USERNAME). Tokenstore directory not found at: {}",
            tokenstore.display()
        )));
    }

    if !has_password {
        return Err(ExporterError::Configuration(format!(
            "Password required (via --password or GARMIN_PASSWORD). Tokenstore directory not found at: {}",
            tokenstore.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::garmin::tokens::OAUTH1_FILE;
    use crate::config::secret_string;
    use crate::domain::{Activity, ActivityId, DownloadFormat};
    use async_trait::async_trait;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Records login calls and optionally fails the cached one
    #[derive(Default)]
    struct RecordingService {
        logins: Vec<Option<PathBuf>>,
        fail_cached_login: bool,
        authenticated: bool,
    }

    #[async_trait]
    impl FitnessService for RecordingService {
        async fn login(&mut self, tokenstore: Option<&Path>) -> Result<()> {
            self.logins.push(tokenstore.map(Path::to_path_buf));
            if tokenstore.is_some() && self.fail_cached_login {
                return Err(ExporterError::Io("disk full".to_string()));
            }
            self.authenticated = true;
            Ok(())
        }

        fn is_authenticated(&self) -> bool {
            self.authenticated
        }

        async fn list_recent_activities(&self, _: usize, _: usize) -> Result<Vec<Activity>> {
            Ok(Vec::new())
        }

        async fn download_activity(&self, _: &ActivityId, _: DownloadFormat) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }

        async fn get_activity_details(&self, _: &ActivityId) -> Result<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }

        async fn get_activity(&self, _: &ActivityId) -> Result<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }
    }

    fn config(tokenstore: &Path, username: Option<&str>, password: Option<&str>) -> GarminConfig {
        GarminConfig {
            username: username.map(str::to_string),
            password: password.map(|p| secret_string(p.to_string())),
            tokenstore: tokenstore.to_string_lossy().into_owned(),
            ..GarminConfig::default()
        }
    }

    #[tokio::test]
    async fn test_first_run_logs_in_twice() {
        let dir = TempDir::new().unwrap();
        let tokenstore = dir.path().join("tokens");
        let mut service = RecordingService::default();

        establish_session(&mut service, &config(&tokenstore, Some("u"), Some("p")))
            .await
            .unwrap();

        assert_eq!(service.logins, vec![None, Some(tokenstore.clone())]);
        assert!(tokenstore.is_dir());
    }

    #[tokio::test]
    async fn test_cached_tokens_log_in_once() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(OAUTH1_FILE), "{}").unwrap();
        let mut service = RecordingService::default();

        establish_session(&mut service, &config(dir.path(), None, None))
            .await
            .unwrap();

        assert_eq!(service.logins, vec![Some(dir.path().to_path_buf())]);
    }

    #[tokio::test]
    async fn test_failed_save_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let mut service = RecordingService {
            fail_cached_login: true,
            ..RecordingService::default()
        };

        establish_session(&mut service, &config(dir.path(), Some("u"), Some("p")))
            .await
            .unwrap();

        assert_eq!(service.logins.len(), 2);
        assert!(service.is_authenticated());
    }

    #[test]
    fn test_check_credentials() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");

        let err = check_credentials(&config(&missing, None, None), &missing).unwrap_err();
        assert!(err.to_string().contains("Username required"));

        let err = check_credentials(&config(&missing, Some("u"), None), &missing).unwrap_err();
        assert!(err.to_string().contains("Password required"));

        assert!(check_credentials(&config(&missing, Some("u"), Some("p")), &missing).is_ok());
        assert!(check_credentials(&config(dir.path(), None, None), dir.path()).is_ok());
    }
}
