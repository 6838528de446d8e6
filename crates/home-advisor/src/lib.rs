//! Buyer-facing property recommendations.
//!
//! The [`recommendation`] module holds the engine (hard-constraint filter, weighted scoring,
//! explanations and ranking). [`catalog`] loads listings from CSV exports, and the remaining
//! modules carry the configuration, logging and error plumbing shared with the API service.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommendation;
pub mod telemetry;
