//! Garmin Connect HTTP client
//!
//! Implements [`FitnessService`] against the Garmin Connect API with
//! `reqwest`. Sessions come from an SSO sign-in or a token store directory.

use super::oauth::{self, Nonce, OAuthConsumer, TokenCredentials};
use super::service::FitnessService;
use super::sso;
use super::tokens::{OAuth1Token, OAuth2Token, TokenStore};
use crate::config::{secret_string, GarminConfig};
use crate::domain::{Activity, ActivityId, DownloadFormat, ExporterError, GarminError, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Response};
use secrecy::ExposeSecret;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// User agent of the Garmin Connect mobile app
pub const USER_AGENT: &str = "com.garmin.android.apps.connectmobile";

/// Published consumer key for OAuth1 signing
pub const CONSUMER_URL: &str = "https://thegarth.s3.amazonaws.com/oauth_consumer.json";

/// Callback that returns an MFA code typed by the user
pub type MfaPrompt = Arc<dyn Fn() -> Result<String> + Send + Sync>;

/// Base URLs the client talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GarminEndpoints {
    /// SSO base, e.g. `https://sso.garmin.com/sso`
    pub sso: String,

    /// API base, e.g. `https://connectapi.garmin.com`
    pub api: String,

    /// OAuth consumer document URL
    pub consumer: String,
}

impl GarminEndpoints {
    /// Production endpoints for a service domain
    pub fn for_domain(domain: &str) -> Self {
        Self {
            sso: format!("https://sso.{domain}/sso"),
            api: format!("https://connectapi.{domain}"),
            consumer: CONSUMER_URL.to_string(),
        }
    }
}

/// Garmin Connect client
///
/// # Example
///
/// ```no_run
/// use garmin_export::adapters::garmin::{FitnessService, GarminConnectClient};
/// use garmin_export::config::GarminConfig;
/// use std::path::Path;
///
/// # async fn example() -> garmin_export::domain::Result<()> {
/// let mut client = GarminConnectClient::new(GarminConfig::default())?;
/// client.login(Some(Path::new("/home/me/.garminconnect"))).await?;
/// # Ok(())
/// # }
/// ```
pub struct GarminConnectClient {
    config: GarminConfig,
    endpoints: GarminEndpoints,
    http: Client,
    consumer: Option<OAuthConsumer>,
    oauth1: Option<OAuth1Token>,
    oauth2: Option<OAuth2Token>,
    mfa_prompt: Option<MfaPrompt>,
}

impl GarminConnectClient {
    /// Create a client for the configured domain
    pub fn new(config: GarminConfig) -> Result<Self> {
        let endpoints = GarminEndpoints::for_domain(&config.domain);
        Self::with_endpoints(config, endpoints)
    }

    /// Create a client with explicit base URLs
    pub fn with_endpoints(config: GarminConfig, endpoints: GarminEndpoints) -> Result<Self> {
        let http = ClientBuilder::new()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                GarminError::ConnectionFailed(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            endpoints,
            http,
            consumer: None,
            oauth1: None,
            oauth2: None,
            mfa_prompt: None,
        })
    }

    /// Set the callback used when the account asks for an MFA code
    pub fn with_mfa_prompt<F>(mut self, prompt: F) -> Self
    where
        F: Fn() -> Result<String> + Send + Sync + 'static,
    {
        self.mfa_prompt = Some(Arc::new(prompt));
        self
    }

    /// Base URLs in use
    pub fn endpoints(&self) -> &GarminEndpoints {
        &self.endpoints
    }

    /// Fresh sign-in with username and password
    async fn credential_login(&mut self) -> Result<()> {
        let username = self
            .config
            .username
            .clone()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                ExporterError::Authentication(
                    "a username is required to sign in without cached tokens".to_string(),
                )
            })?;
        let password = self
            .config
            .password
            .as_ref()
            .filter(|p| !p.expose_secret().is_empty())
            .cloned()
            .ok_or_else(|| {
                ExporterError::Authentication(
                    "a password is required to sign in without cached tokens".to_string(),
                )
            })?;

        tracing::info!(username = %username, "Signing in to Garmin Connect");
        let ticket = sso::fetch_ticket(
            &self.http,
            &self.endpoints.sso,
            &username,
            password.expose_secret().as_ref(),
            self.mfa_prompt.as_ref(),
        )
        .await?;

        let oauth1 = self.preauthorize(&ticket).await?;
        let oauth2 = self.exchange(&oauth1).await?;
        self.oauth1 = Some(oauth1);
        self.oauth2 = Some(oauth2);

        tracing::info!("Signed in to Garmin Connect");
        Ok(())
    }

    /// Consumer credentials, fetched once
    async fn consumer(&mut self) -> Result<OAuthConsumer> {
        if let Some(consumer) = &self.consumer {
            return Ok(consumer.clone());
        }

        let response = self
            .http
            .get(&self.endpoints.consumer)
            .send()
            .await
            .map_err(GarminError::from)?;
        let consumer: OAuthConsumer = check_status(response)
            .await?
            .json()
            .await
            .map_err(GarminError::from)?;
        self.consumer = Some(consumer.clone());
        Ok(consumer)
    }

    /// Trade an SSO ticket for an OAuth1 token
    async fn preauthorize(&mut self, ticket: &str) -> Result<OAuth1Token> {
        let consumer = self.consumer().await?;
        let login_url = format!("{}/embed", self.endpoints.sso);
        let url = Url::parse_with_params(
            &format!("{}/oauth-service/oauth/preauthorized", self.endpoints.api),
            &[
                ("ticket", ticket),
                ("login-url", login_url.as_str()),
                ("accepts-mfa-tokens", "true"),
            ],
        )
        .map_err(|e| GarminError::InvalidResponse(format!("invalid API URL: {e}")))?;

        let header = oauth::authorization_header("GET", &url, &[], &consumer, None, &Nonce::generate())?;
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, header)
            .send()
            .await
            .map_err(GarminError::from)?;
        let body = check_status(response)
            .await?
            .text()
            .await
            .map_err(GarminError::from)?;

        parse_oauth1(&body, &self.config.domain)
    }

    /// Trade an OAuth1 token for an OAuth2 bearer token
    async fn exchange(&mut self, oauth1: &OAuth1Token) -> Result<OAuth2Token> {
        let consumer = self.consumer().await?;
        let url = Url::parse(&format!(
            "{}/oauth-service/oauth/exchange/user/2.0",
            self.endpoints.api
        ))
        .map_err(|e| GarminError::InvalidResponse(format!("invalid API URL: {e}")))?;

        let mut form: Vec<(&str, &str)> = Vec::new();
        if let Some(mfa_token) = &oauth1.mfa_token {
            form.push(("mfa_token", mfa_token.as_str()));
        }

        let header = oauth::authorization_header(
            "POST",
            &url,
            &form,
            &consumer,
            Some(TokenCredentials {
                token: &oauth1.oauth_token,
                secret: oauth1.oauth_token_secret.expose_secret().as_ref(),
            }),
            &Nonce::generate(),
        )?;

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, header)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .form(&form)
            .send()
            .await
            .map_err(GarminError::from)?;
        let token: OAuth2Token = check_status(response)
            .await?
            .json()
            .await
            .map_err(GarminError::from)?;

        Ok(token.stamp_expiry(chrono::Utc::now().timestamp()))
    }

    fn save_session(&self, store: &TokenStore) -> Result<()> {
        match (&self.oauth1, &self.oauth2) {
            (Some(oauth1), Some(oauth2)) => store.save(oauth1, oauth2),
            _ => Err(ExporterError::Authentication(
                "no session to save".to_string(),
            )),
        }
    }

    /// Authenticated GET against the API
    async fn api_get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let token = self.oauth2.as_ref().ok_or_else(|| {
            ExporterError::Authentication("not signed in to Garmin Connect".to_string())
        })?;

        let access_token: &str = token.access_token.expose_secret().as_ref();
        let url = format!("{}{}", self.endpoints.api, path);
        tracing::debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(query)
            .send()
            .await
            .map_err(GarminError::from)?;
        check_status(response).await
    }

    async fn api_json(&self, path: &str) -> Result<serde_json::Value> {
        let value = self
            .api_get(path, &[])
            .await?
            .json()
            .await
            .map_err(GarminError::from)?;
        Ok(value)
    }
}

#[async_trait]
impl FitnessService for GarminConnectClient {
    async fn login(&mut self, tokenstore: Option<&Path>) -> Result<()> {
        let Some(dir) = tokenstore else {
            return self.credential_login().await;
        };

        let store = TokenStore::new(dir);
        match store.load()? {
            Some((oauth1, oauth2)) => {
                tracing::debug!(tokenstore = %dir.display(), "Resuming cached session");
                let expired = oauth2.is_expired();
                self.oauth1 = Some(oauth1);
                self.oauth2 = Some(oauth2);

                if expired {
                    tracing::info!("Cached access token expired, refreshing");
                    let oauth1 = self.oauth1.clone().ok_or_else(|| {
                        ExporterError::Authentication("missing OAuth1 token".to_string())
                    })?;
                    self.oauth2 = Some(self.exchange(&oauth1).await?);
                    self.save_session(&store)?;
                }
            }
            None => {
                if !self.is_authenticated() {
                    self.credential_login().await?;
                }
                self.save_session(&store)?;
            }
        }

        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.oauth2.is_some()
    }

    async fn list_recent_activities(&self, start: usize, limit: usize) -> Result<Vec<Activity>> {
        let activities = self
            .api_get(
                "/activitylist-service/activities/search/activities",
                &[("start", start.to_string()), ("limit", limit.to_string())],
            )
            .await?
            .json()
            .await
            .map_err(GarminError::from)?;
        Ok(activities)
    }

    async fn download_activity(
        &self,
        activity_id: &ActivityId,
        format: DownloadFormat,
    ) -> Result<Vec<u8>> {
        let bytes = self
            .api_get(&format.path(activity_id.as_str()), &[])
            .await?
            .bytes()
            .await
            .map_err(GarminError::from)?;
        Ok(bytes.to_vec())
    }

    async fn get_activity_details(&self, activity_id: &ActivityId) -> Result<serde_json::Value> {
        self.api_json(&format!(
            "/activity-service/activity/{activity_id}/details?maxChartSize=2000&maxPolylineSize=4000"
        ))
        .await
    }

    async fn get_activity(&self, activity_id: &ActivityId) -> Result<serde_json::Value> {
        self.api_json(&format!("/activity-service/activity/{activity_id}"))
            .await
    }
}

/// Pass successful responses through, map the rest to [`GarminError`]
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    let body: String = body.trim().chars().take(300).collect();
    let message = format!("{url}: {body}");
    Err(GarminError::from_status(status.as_u16(), message).into())
}

/// Parse the form-encoded OAuth1 token response
fn parse_oauth1(body: &str, domain: &str) -> Result<OAuth1Token> {
    let mut oauth_token = None;
    let mut oauth_token_secret = None;
    let mut mfa_token = None;
    let mut mfa_expiration_timestamp = None;

    for (key, value) in url::form_urlencoded::parse(body.trim().as_bytes()) {
        match key.as_ref() {
            "oauth_token" => oauth_token = Some(value.into_owned()),
            "oauth_token_secret" => oauth_token_secret = Some(value.into_owned()),
            "mfa_token" => mfa_token = Some(value.into_owned()),
            "mfa_expiration_timestamp" => mfa_expiration_timestamp = Some(value.into_owned()),
            _ => {}
        }
    }

    match (oauth_token, oauth_token_secret) {
        (Some(oauth_token), Some(secret)) => Ok(OAuth1Token {
            oauth_token,
            oauth_token_secret: secret_string(secret),
            mfa_token,
            mfa_expiration_timestamp,
            domain: Some(domain.to_string()),
        }),
        _ => Err(GarminError::InvalidResponse(
            "OAuth1 response is missing oauth_token or oauth_token_secret".to_string(),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::garmin::tokens::{OAUTH1_FILE, OAUTH2_FILE};
    use mockito::Matcher;
    use tempfile::TempDir;

    const CONSUMER_JSON: &str = r#"{"consumer_key": "ck", "consumer_secret": "cs"}"#;
    const OAUTH2_JSON: &str = r#"{
        "scope": "CONNECT_READ",
        "jti": "jti-1",
        "token_type": "Bearer",
        "access_token": "fresh-access",
        "refresh_token": "fresh-refresh",
        "expires_in": 3600,
        "refresh_token_expires_in": 7200
    }"#;

    fn endpoints(server: &mockito::Server) -> GarminEndpoints {
        GarminEndpoints {
            sso: format!("{}/sso", server.url()),
            api: server.url(),
            consumer: format!("{}/oauth_consumer.json", server.url()),
        }
    }

    fn config(username: Option<&str>, password: Option<&str>) -> GarminConfig {
        GarminConfig {
            username: username.map(str::to_string),
            password: password.map(|p| secret_string(p.to_string())),
            ..GarminConfig::default()
        }
    }

    fn write_tokens(dir: &Path, expires_at: i64) {
        std::fs::write(
            dir.join(OAUTH1_FILE),
            r#"{"oauth_token": "o1", "oauth_token_secret": "o1-secret"}"#,
        )
        .unwrap();
        std::fs::write(
            dir.join(OAUTH2_FILE),
            format!(
                r#"{{"access_token": "cached-access", "refresh_token": "r", "expires_in": 3600, "expires_at": {expires_at}}}"#
            ),
        )
        .unwrap();
    }

    async fn mock_sign_in(server: &mut mockito::Server) -> Vec<mockito::Mock> {
        vec![
            server
                .mock("GET", "/sso/embed")
                .match_query(Matcher::Any)
                .with_status(200)
                .with_body("<html>embed</html>")
                .create_async()
                .await,
            server
                .mock("GET", "/sso/signin")
                .match_query(Matcher::Any)
                .with_status(200)
                .with_body(r#"<form><input type="hidden" name="_csrf" value="csrf-1"/></form>"#)
                .create_async()
                .await,
            server
                .mock("POST", "/sso/signin")
                .match_query(Matcher::Any)
                .match_body(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("username".into(), "runner@example.com".into()),
                    Matcher::UrlEncoded("_csrf".into(), "csrf-1".into()),
                ]))
                .with_status(200)
                .with_body(
                    r#"<html><head><title>Success</title></head><script>var u = "https://sso/embed?ticket=ST-42-abc";</script></html>"#,
                )
                .create_async()
                .await,
            server
                .mock("GET", "/oauth_consumer.json")
                .with_status(200)
                .with_body(CONSUMER_JSON)
                .create_async()
                .await,
            server
                .mock("GET", "/oauth-service/oauth/preauthorized")
                .match_query(Matcher::UrlEncoded("ticket".into(), "ST-42-abc".into()))
                .match_header("authorization", Matcher::Regex("^OAuth ".to_string()))
                .with_status(200)
                .with_body("oauth_token=o1&oauth_token_secret=o1-secret")
                .create_async()
                .await,
            server
                .mock("POST", "/oauth-service/oauth/exchange/user/2.0")
                .match_header("authorization", Matcher::Regex("oauth_token=\"o1\"".to_string()))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(OAUTH2_JSON)
                .create_async()
                .await,
        ]
    }

    #[tokio::test]
    async fn test_credential_login_and_save() {
        let mut server = mockito::Server::new_async().await;
        let mocks = mock_sign_in(&mut server).await;
        let dir = TempDir::new().unwrap();

        let mut client = GarminConnectClient::with_endpoints(
            config(Some("runner@example.com"), Some("pw")),
            endpoints(&server),
        )
        .unwrap();

        client.login(None).await.unwrap();
        assert!(client.is_authenticated());

        client.login(Some(dir.path())).await.unwrap();
        assert!(dir.path().join(OAUTH1_FILE).exists());
        assert!(dir.path().join(OAUTH2_FILE).exists());

        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn test_mfa_without_prompt_fails() {
        let mut server = mockito::Server::new_async().await;
        let _embed = server
            .mock("GET", "/sso/embed")
            .match_query(Matcher::Any)
            .with_status(200)
            .create_async()
            .await;
        let _page = server
            .mock("GET", "/sso/signin")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"name="_csrf" value="c""#)
            .create_async()
            .await;
        let _post = server
            .mock("POST", "/sso/signin")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<title>Enter MFA code</title>")
            .create_async()
            .await;

        let mut client = GarminConnectClient::with_endpoints(
            config(Some("runner@example.com"), Some("pw")),
            endpoints(&server),
        )
        .unwrap();

        let err = client.login(None).await.unwrap_err();
        assert!(matches!(
            err,
            ExporterError::Garmin(GarminError::MfaRequired(_))
        ));
        assert!(err.is_authentication());
    }

    #[tokio::test]
    async fn test_login_without_credentials() {
        let server = mockito::Server::new_async().await;
        let mut client =
            GarminConnectClient::with_endpoints(config(None, None), endpoints(&server)).unwrap();

        let err = client.login(None).await.unwrap_err();
        assert!(matches!(err, ExporterError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_resume_from_tokenstore() {
        let mut server = mockito::Server::new_async().await;
        let dir = TempDir::new().unwrap();
        write_tokens(dir.path(), chrono::Utc::now().timestamp() + 600);

        let list = server
            .mock("GET", "/activitylist-service/activities/search/activities")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("start".into(), "0".into()),
                Matcher::UrlEncoded("limit".into(), "2".into()),
            ]))
            .match_header("authorization", "Bearer cached-access")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"activityId": 101, "activityName": "Morning Run",
                     "activityType": {"typeKey": "running"},
                     "startTimeLocal": "2024-03-16 07:00:00", "distance": 5000.0},
                    {"activityId": 100, "activityName": null}
                ]"#,
            )
            .create_async()
            .await;

        let mut client =
            GarminConnectClient::with_endpoints(config(None, None), endpoints(&server)).unwrap();
        client.login(Some(dir.path())).await.unwrap();
        assert!(client.is_authenticated());

        let activities = client.list_recent_activities(0, 2).await.unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].activity_id.as_str(), "101");
        assert_eq!(activities[0].display_name(), "Morning Run");
        assert_eq!(activities[1].display_name(), "Unnamed Activity");

        list.assert_async().await;
    }

    #[tokio::test]
    async fn test_expired_token_is_refreshed() {
        let mut server = mockito::Server::new_async().await;
        let dir = TempDir::new().unwrap();
        write_tokens(dir.path(), 0);

        let _consumer = server
            .mock("GET", "/oauth_consumer.json")
            .with_status(200)
            .with_body(CONSUMER_JSON)
            .create_async()
            .await;
        let exchange = server
            .mock("POST", "/oauth-service/oauth/exchange/user/2.0")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(OAUTH2_JSON)
            .create_async()
            .await;

        let mut client =
            GarminConnectClient::with_endpoints(config(None, None), endpoints(&server)).unwrap();
        client.login(Some(dir.path())).await.unwrap();

        exchange.assert_async().await;
        let saved = std::fs::read_to_string(dir.path().join(OAUTH2_FILE)).unwrap();
        assert!(saved.contains("fresh-access"));
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let mut server = mockito::Server::new_async().await;
        let dir = TempDir::new().unwrap();
        write_tokens(dir.path(), chrono::Utc::now().timestamp() + 600);

        let _missing = server
            .mock("GET", "/download-service/export/gpx/activity/404")
            .with_status(404)
            .with_body("not here")
            .create_async()
            .await;
        let _denied = server
            .mock("GET", "/activity-service/activity/401")
            .with_status(401)
            .create_async()
            .await;
        let _busy = server
            .mock("GET", "/activity-service/activity/429")
            .with_status(429)
            .create_async()
            .await;

        let mut client =
            GarminConnectClient::with_endpoints(config(None, None), endpoints(&server)).unwrap();
        client.login(Some(dir.path())).await.unwrap();

        let err = client
            .download_activity(&ActivityId::from(404u64), DownloadFormat::Gpx)
            .await
            .unwrap_err();
        assert!(matches!(err, ExporterError::Garmin(GarminError::NotFound(_))));

        let err = client
            .get_activity(&ActivityId::from(401u64))
            .await
            .unwrap_err();
        assert!(err.is_authentication());

        let err = client
            .get_activity(&ActivityId::from(429u64))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExporterError::Garmin(GarminError::RateLimitExceeded(_))
        ));
    }

    #[tokio::test]
    async fn test_download_and_details() {
        let mut server = mockito::Server::new_async().await;
        let dir = TempDir::new().unwrap();
        write_tokens(dir.path(), chrono::Utc::now().timestamp() + 600);

        let _fit = server
            .mock("GET", "/download-service/files/activity/7")
            .with_status(200)
            .with_body(b"PK\x03\x04zip".as_slice())
            .create_async()
            .await;
        let _details = server
            .mock("GET", "/activity-service/activity/7/details")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("maxChartSize".into(), "2000".into()),
                Matcher::UrlEncoded("maxPolylineSize".into(), "4000".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"activityId": 7, "metricDescriptors": []}"#)
            .create_async()
            .await;

        let mut client =
            GarminConnectClient::with_endpoints(config(None, None), endpoints(&server)).unwrap();
        client.login(Some(dir.path())).await.unwrap();

        let bytes = client
            .download_activity(&ActivityId::from(7u64), DownloadFormat::Original)
            .await
            .unwrap();
        assert_eq!(bytes, b"PK\x03\x04zip");

        let details = client
            .get_activity_details(&ActivityId::from(7u64))
            .await
            .unwrap();
        assert_eq!(details["activityId"], 7);
    }

    #[tokio::test]
    async fn test_requests_require_session() {
        let server = mockito::Server::new_async().await;
        let client =
            GarminConnectClient::with_endpoints(config(None, None), endpoints(&server)).unwrap();

        let err = client.list_recent_activities(0, 1).await.unwrap_err();
        assert!(matches!(err, ExporterError::Authentication(_)));
    }

    #[test]
    fn test_parse_oauth1() {
        let token = parse_oauth1(
            "oauth_token=abc&oauth_token_secret=def&mfa_token=m1",
            "garmin.com",
        )
        .unwrap();
        assert_eq!(token.oauth_token, "abc");
        assert_eq!(token.oauth_token_secret.expose_secret(), "def");
        assert_eq!(token.mfa_token.as_deref(), Some("m1"));

        assert!(parse_oauth1("oauth_token=abc", "garmin.com").is_err());
    }

    #[test]
    fn test_endpoints_for_domain() {
        let endpoints = GarminEndpoints::for_domain("garmin.cn");
        assert_eq!(endpoints.sso, "https://sso.garmin.cn/sso");
        assert_eq!(endpoints.api, "https://connectapi.garmin.cn");
    }
}
