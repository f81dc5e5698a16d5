//! # Spotify Integration Module
//!
//! The HTTP layer between groovecli and the Spotify Web API. Each submodule
//! covers one API concern; everything above this layer (the gateway, the
//! aggregator, the curation engine) stays free of reqwest.
//!
//! ## Submodules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, browser
//!   hand-off, local callback, code-for-token exchange
//! - [`library`] - paginated saved-tracks listing (`GET /me/tracks`)
//! - [`artists`] - batched artist lookup for genre tags (`GET /artists`,
//!   up to 50 ids per request)
//! - [`features`] - batched audio-features lookup (`GET /audio-features`,
//!   up to 100 ids per request)
//! - [`recommendations`] - seeded recommendations with an optional
//!   instrumentalness floor (`GET /recommendations`)
//! - [`playlist`] - playlist creation and batched track addition
//!   (`POST /users/{id}/playlists`, `POST /playlists/{id}/tracks`)
//! - [`user`] - the authenticated user's profile (`GET /me`), source of the
//!   playlist owner id
//!
//! ## Error handling
//!
//! Requests use `error_for_status` and propagate `reqwest::Error` to the
//! caller. 502 Bad Gateway retries in place after a 10 second sleep; the
//! recommendations endpoint additionally honors the `Retry-After` header on
//! 429 Too Many Requests (delays above 120 seconds are reported instead of
//! slept through). Everything else is terminal for the running operation.
//!
//! ## Authentication
//!
//! All endpoints take a bearer token provided by the caller; the
//! `management::TokenManager` refreshes it ahead of expiry. Only the PKCE
//! flow in [`auth`] talks to the accounts service directly.

pub mod artists;
pub mod auth;
pub mod features;
pub mod library;
pub mod playlist;
pub mod recommendations;
pub mod user;
