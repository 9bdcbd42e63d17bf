//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page sets its own `<Title>` and description, owns its static copy, and
//! delegates interactive pieces to `components`.

pub mod contact;
pub mod home;
pub mod newsletter;
pub mod not_found;
