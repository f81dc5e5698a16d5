//! HTTP endpoints for the local callback server.
//!
//! The server only exists for the duration of the OAuth flow. `/callback`
//! receives the authorization code from Spotify's consent page and completes
//! the PKCE exchange; `/health` reports liveness for debugging a flow that
//! seems stuck.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
