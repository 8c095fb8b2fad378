//! Shared plumbing for Userbase services.
//!
//! Error rendering, health probes, request-id middleware, tracing bootstrap and
//! environment-backed configuration.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
