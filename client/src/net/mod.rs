//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the generic request sender, `api` holds the auth calls built on
//! it, `types` defines the wire payloads and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
