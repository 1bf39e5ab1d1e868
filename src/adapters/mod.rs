//! External system integrations.
//!
//! - [`garmin`] - Garmin Connect client, sign-in and session cache
//!
//! # Design Pattern
//!
//! The export pipeline depends on the [`garmin::FitnessService`] trait, not
//! on the HTTP client, so it can run against an in-memory implementation in
//! tests.

pub mod garmin;
