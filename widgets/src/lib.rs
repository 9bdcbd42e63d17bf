//! Browser-agnostic behavior behind the site's interactive chrome.
//!
//! This crate compiles natively and to WebAssembly. It holds the logic-bearing
//! parts of the site so they can be tested without a browser; the `client`
//! crate binds them to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`focus`] | Focus trap state machine over a [`focus::FocusHost`] |
//! | [`rate_limit`] | Sliding-window attempt limiter keyed by string |
//! | [`scroll`] | Scroll completion percentage and page scoping |
//! | [`pdf`] | Export job model, page planning, PDF writer, hide guard |
//! | [`clock`] | Millisecond wall clock that works on wasm32 and native |

pub mod clock;
pub mod focus;
pub mod pdf;
pub mod rate_limit;
pub mod scroll;
