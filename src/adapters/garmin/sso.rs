//! Garmin SSO sign-in
//!
//! Walks the embedded sign-in widget with a cookie-carrying client until the
//! service hands out a ticket, prompting for an MFA code when the account
//! requires one.

use super::client::{check_status, MfaPrompt};
use crate::domain::{GarminError, Result};
use regex::Regex;
use reqwest::header::REFERER;
use reqwest::Client;

/// Sign-in with username and password, returning the service ticket
pub(crate) async fn fetch_ticket(
    http: &Client,
    sso_base: &str,
    username: &str,
    password: &str,
    mfa_prompt: Option<&MfaPrompt>,
) -> Result<String> {
    let embed_url = format!("{sso_base}/embed");
    let signin_url = format!("{sso_base}/signin");
    let embed_params = [
        ("id", "gauth-widget"),
        ("embedWidget", "true"),
        ("gauthHost", sso_base),
    ];
    let signin_params = [
        ("id", "gauth-widget"),
        ("embedWidget", "true"),
        ("gauthHost", embed_url.as_str()),
        ("service", embed_url.as_str()),
        ("source", embed_url.as_str()),
        ("redirectAfterAccountLoginUrl", embed_url.as_str()),
        ("redirectAfterAccountCreationUrl", embed_url.as_str()),
    ];

    tracing::debug!("Opening SSO session");
    let embed = http
        .get(&embed_url)
        .query(&embed_params)
        .send()
        .await
        .map_err(GarminError::from)?;
    let embed = check_status(embed).await?;
    let referer = embed.url().to_string();

    let signin_page = http
        .get(&signin_url)
        .query(&signin_params)
        .header(REFERER, referer.as_str())
        .send()
        .await
        .map_err(GarminError::from)?;
    let signin_page = check_status(signin_page).await?;
    let referer = signin_page.url().to_string();
    let html = signin_page.text().await.map_err(GarminError::from)?;
    let csrf = capture(r#"name="_csrf"\s+value="(.+?)""#, &html, "CSRF token")?;

    tracing::debug!("Submitting credentials");
    let response = http
        .post(&signin_url)
        .query(&signin_params)
        .header(REFERER, referer.as_str())
        .form(&[
            ("username", username),
            ("password", password),
            ("embed", "true"),
            ("_csrf", csrf.as_str()),
        ])
        .send()
        .await
        .map_err(GarminError::from)?;
    let response = check_status(response).await?;
    let referer = response.url().to_string();
    let mut html = response.text().await.map_err(GarminError::from)?;
    let mut title = capture(r"<title>(.+?)</title>", &html, "page title")?;

    if title.contains("MFA") {
        let prompt = mfa_prompt.ok_or_else(|| {
            GarminError::MfaRequired("account requires an MFA code but no prompt is available".to_string())
        })?;
        let code = prompt()?;
        let csrf = capture(r#"name="_csrf"\s+value="(.+?)""#, &html, "CSRF token")?;

        tracing::debug!("Submitting MFA code");
        let response = http
            .post(format!("{sso_base}/verifyMFA/loginEnterMfaCode"))
            .query(&signin_params)
            .header(REFERER, referer.as_str())
            .form(&[
                ("mfa-code", code.trim()),
                ("embed", "true"),
                ("_csrf", csrf.as_str()),
                ("fromPage", "setupEnterMfaCode"),
            ])
            .send()
            .await
            .map_err(GarminError::from)?;
        let response = check_status(response).await?;
        html = response.text().await.map_err(GarminError::from)?;
        title = capture(r"<title>(.+?)</title>", &html, "page title")?;
    }

    if title != "Success" {
        return Err(GarminError::AuthenticationFailed(format!(
            "sign-in did not succeed (page title: {title})"
        ))
        .into());
    }

    capture(r#"embed\?ticket=([^"]+)""#, &html, "service ticket")
}

/// First capture group of `pattern` in `html`
fn capture(pattern: &str, html: &str, what: &str) -> Result<String> {
    let re = Regex::new(pattern)
        .map_err(|e| GarminError::InvalidResponse(format!("invalid pattern for {what}: {e}")))?;
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            GarminError::AuthenticationFailed(format!("{what} not found in sign-in response"))
                .into()
        })
}
