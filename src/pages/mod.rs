//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration; cross-cutting session behavior
//! (the redirect guard) lives in `util::auth` and runs above them.

pub mod admin;
pub mod login;
