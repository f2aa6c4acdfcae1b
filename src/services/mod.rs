//! Request-scoped services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Session, guard, and locale logic live here so route handlers stay focused
//! on form plumbing and rendering.

pub mod guard;
pub mod locale;
pub mod session;
