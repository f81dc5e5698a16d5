//! Genre Playlist Curator CLI Library
//!
//! This library backs the `groovecli` binary: it authenticates against the
//! Spotify Web API, scans the user's saved-tracks library, groups tracks by
//! the genre tags of each track's primary artist, and creates playlists from
//! selected genres with an optional instrumental filter and a recommendation
//! blend.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `curation` - Playlist curation engine (pool building, discovery blend)
//! - `gateway` - Injected Spotify gateway trait and its HTTP implementation
//! - `genres` - Library scan and genre aggregation
//! - `management` - Token and scan-cache persistence
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod curation;
pub mod gateway;
pub mod genres;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Scanning saved tracks...");
/// info!("Found {} genres", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Scan complete. Found {} main genres.", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable errors: a failed authentication, a scan that cannot
/// proceed, a missing credentials file. Code after this macro will not run.
///
/// # Example
///
/// ```
/// error!("Failed to load token. Please run groovecli auth");
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. a failed recommendation fetch that the
/// curation run survives.
///
/// # Example
///
/// ```
/// warning!("Discovery failed: {}. Continuing without extra tracks.", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
