//! Garmin Connect integration
//!
//! - [`FitnessService`] - what the export pipeline needs from the service
//! - [`GarminConnectClient`] - `reqwest` implementation against Garmin Connect
//! - [`establish_session`] - sign-in with the tokenstore directory
//!
//! Sessions use the OAuth1/OAuth2 token pair Garmin's mobile app uses,
//! cached as JSON in a tokenstore directory.

pub mod client;
pub mod oauth;
pub mod service;
pub mod session;
mod sso;
pub mod tokens;

pub use client::{GarminConnectClient, GarminEndpoints, MfaPrompt};
pub use service::FitnessService;
pub use session::{check_credentials, establish_session};
pub use tokens::{OAuth1Token, OAuth2Token, TokenStore};
