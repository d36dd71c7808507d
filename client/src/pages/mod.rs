//! Page modules for the two top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The root picks exactly one page from the session state; each page receives
//! the session signal it mutates as a prop.

pub mod home;
pub mod login;
