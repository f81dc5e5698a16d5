//! # CLI Module
//!
//! The user-facing command layer. Each submodule implements one subcommand
//! and stays thin: it loads what it needs from the management layer, hands
//! the work to the gateway-backed core (`genres`, `curation`), and presents
//! the result with the status macros and tabled tables.
//!
//! ## Commands
//!
//! - [`setup`] - first-run credential wizard; writes the flat `.env`
//!   credentials file
//! - [`auth`] - Spotify OAuth 2.0 PKCE flow
//! - [`scan`] - scans the saved-tracks library and caches the genre index
//! - [`list_genres`] - lists selectable genres from the cached scan, with an
//!   optional substring search
//! - [`stats`] - library statistics from the cached scan
//! - [`create`] - curates and creates a playlist from selected genres
//!
//! ## Error presentation
//!
//! Fatal conditions (missing credentials, failed auth, failed scan) exit
//! through the `error!` macro; recoverable ones (a stale cache, a failed
//! recommendation fetch) are reported with `warning!` and the command either
//! continues or returns so the user can retry.

mod auth;
mod create;
mod genres;
mod scan;
mod setup;
mod stats;

pub use auth::auth;
pub use create::create;
pub use genres::list_genres;
pub use scan::scan;
pub use setup::setup;
pub use stats::stats;
