//! String tokens - small stable integers standing in for tag strings.
//!
//! The registry is an injected trait object so callers decide whether
//! tokens are process-wide (see `Engine::token_registry`) or local.

mod string_token;

pub use string_token::{StringToken, TokenRegistry, StringTokenRegistry};
