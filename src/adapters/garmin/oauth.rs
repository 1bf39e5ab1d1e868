//! OAuth1 request signing (HMAC-SHA1)
//!
//! Garmin Connect issues OAuth1 tokens from an SSO ticket and trades them for
//! short-lived OAuth2 bearer tokens. Both calls are OAuth1-signed with the
//! consumer key the mobile app uses, published as a small JSON document.

use crate::config::SecretString;
use crate::domain::{ExporterError, Result};
use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use secrecy::ExposeSecret;
use serde::Deserialize;
use sha1::Sha1;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

/// Characters left unescaped by OAuth1 (RFC 3986 unreserved set)
const OAUTH_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Consumer credentials of the Garmin Connect mobile app
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthConsumer {
    /// Consumer key
    pub consumer_key: String,

    /// Consumer secret
    pub consumer_secret: SecretString,
}

/// Token half of the signing key
#[derive(Debug, Clone, Copy)]
pub struct TokenCredentials<'a> {
    /// Token key
    pub token: &'a str,

    /// Token secret
    pub secret: &'a str,
}

/// Per-request values that make a signature unique
#[derive(Debug, Clone)]
pub struct Nonce {
    /// Random nonce
    pub nonce: String,

    /// Unix timestamp in seconds
    pub timestamp: i64,
}

impl Nonce {
    /// Fresh nonce for the current time
    pub fn generate() -> Self {
        Self {
            nonce: uuid::Uuid::new_v4().simple().to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Percent-encode per OAuth1
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE).to_string()
}

/// Build the `Authorization` header for a request
///
/// # Arguments
///
/// * `method` - HTTP method, upper case
/// * `url` - Full request URL, query parameters included
/// * `form` - Form-encoded body parameters, if any
/// * `consumer` - Consumer credentials
/// * `token` - Token credentials, absent for the pre-authorization call
/// * `nonce` - Nonce and timestamp
pub fn authorization_header(
    method: &str,
    url: &Url,
    form: &[(&str, &str)],
    consumer: &OAuthConsumer,
    token: Option<TokenCredentials<'_>>,
    nonce: &Nonce,
) -> Result<String> {
    let timestamp = nonce.timestamp.to_string();
    let mut oauth_params: Vec<(&str, &str)> = vec![
        ("oauth_consumer_key", consumer.consumer_key.as_str()),
        ("oauth_nonce", nonce.nonce.as_str()),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_version", "1.0"),
    ];
    if let Some(token) = &token {
        oauth_params.push(("oauth_token", token.token));
    }

    let base = signature_base_string(method, url, form, &oauth_params);
    let signing_key = format!(
        "{}&{}",
        encode(consumer.consumer_secret.expose_secret().as_ref()),
        encode(token.map(|t| t.secret).unwrap_or_default())
    );
    let signature = sign(&signing_key, &base)?;

    let mut header_params: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    header_params.push(("oauth_signature".to_string(), signature));
    header_params.sort();

    let fields: Vec<String> = header_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect();
    Ok(format!("OAuth {}", fields.join(", ")))
}

/// Signature base string: method, base URL and normalized parameters
fn signature_base_string(
    method: &str,
    url: &Url,
    form: &[(&str, &str)],
    oauth_params: &[(&str, &str)],
) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode(&k), encode(&v)))
        .collect();
    params.extend(form.iter().map(|(k, v)| (encode(k), encode(v))));
    params.extend(oauth_params.iter().map(|(k, v)| (encode(k), encode(v))));
    params.sort();

    let normalized = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(base_url.as_str()),
        encode(&normalized)
    )
}

fn sign(key: &str, base: &str) -> Result<String> {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| ExporterError::Authentication(format!("Invalid signing key: {e}")))?;
    mac.update(base.as_bytes());
    Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    // Worked example from the Twitter OAuth1 signing guide
    fn twitter_consumer() -> OAuthConsumer {
        OAuthConsumer {
            consumer_key: "xvz1evFS4wEEPTGEFPHBog".to_string(),
            consumer_secret: secret_string("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string()),
        }
    }

    fn twitter_nonce() -> Nonce {
        Nonce {
            nonce: "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg".to_string(),
            timestamp: 1318622958,
        }
    }

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
        assert_eq!(encode("a-b.c_d~e"), "a-b.c_d~e");
        assert_eq!(encode("https://x/y?z=1"), "https%3A%2F%2Fx%2Fy%3Fz%3D1");
    }

    #[test]
    fn test_signature_matches_reference_example() {
        let url = Url::parse("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
            .unwrap();
        let header = authorization_header(
            "POST",
            &url,
            &[("status", "Hello Ladies + Gentlemen, a signed OAuth request!")],
            &twitter_consumer(),
            Some(TokenCredentials {
                token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
                secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
            }),
            &twitter_nonce(),
        )
        .unwrap();

        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
        assert!(header.contains("oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\""));
        assert!(header.contains("oauth_version=\"1.0\""));
    }

    #[test]
    fn test_base_string_excludes_query_from_url() {
        let url = Url::parse("https://connectapi.garmin.com/oauth-service/oauth/preauthorized?ticket=ST-1")
            .unwrap();
        let base = signature_base_string("get", &url, &[], &[("oauth_version", "1.0")]);

        assert!(base.starts_with(
            "GET&https%3A%2F%2Fconnectapi.garmin.com%2Foauth-service%2Foauth%2Fpreauthorized&"
        ));
        assert!(base.ends_with("oauth_version%3D1.0%26ticket%3DST-1"));
    }

    #[test]
    fn test_header_without_token() {
        let url = Url::parse("https://connectapi.garmin.com/oauth-service/oauth/preauthorized").unwrap();
        let header = authorization_header("GET", &url, &[], &twitter_consumer(), None, &twitter_nonce())
            .unwrap();
        assert!(!header.contains("oauth_token="));
        assert!(header.contains("oauth_signature="));
    }

    #[test]
    fn test_generated_nonces_differ() {
        assert_ne!(Nonce::generate().nonce, Nonce::generate().nonce);
    }
}
