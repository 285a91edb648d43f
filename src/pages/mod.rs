//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The client is a single page; it owns load-time orchestration and
//! delegates rendering details to `components`.

pub mod home;
