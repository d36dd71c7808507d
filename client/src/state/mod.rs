//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the app-wide auth record owned by the root component;
//! `request` is per-form lifecycle state.

pub mod request;
pub mod session;
