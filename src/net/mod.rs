//! Networking modules for the draws REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` is the path table, `api` issues requests, `error` defines the
//! failure taxonomy, and `types` holds the wire schema shared with services.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod types;
