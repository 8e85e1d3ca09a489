//! HTTP interface module.
//!
//! Provides REST API endpoints for:
//! - Listing activities
//! - Signing up for and leaving activities
//! - Health checks

pub mod handlers;
pub mod routes;

pub(crate) mod monitoring;
