//! Configuration management for the playlist curator.
//!
//! Handles loading and accessing configuration values from environment
//! variables and the `.env` credentials file. Credentials (client id, client
//! secret, redirect URI) are required and written by `groovecli setup`; API
//! endpoint URLs, the OAuth scope, and the callback bind address have
//! defaults that can be overridden through the environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Default OAuth scope: read the library, create public playlists.
const DEFAULT_SCOPE: &str = "user-library-read playlist-modify-public playlist-read-private";

/// Returns the path of the flat credentials file.
///
/// The file lives in the platform-specific local data directory:
/// - Linux: `~/.local/share/groovecli/.env`
/// - macOS: `~/Library/Application Support/groovecli/.env`
/// - Windows: `%LOCALAPPDATA%/groovecli/.env`
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("groovecli/.env");
    path
}

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist. A missing `.env` file
/// is not an error: on a first run the credentials file does not exist yet
/// and `groovecli setup` will create it.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or an existing
/// file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns true when both API credentials are present in the environment.
///
/// Used by the startup sequence to decide between running a command and
/// directing the user to `groovecli setup`.
pub fn has_credentials() -> bool {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").map_or(false, |v| !v.trim().is_empty())
        && env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").map_or(false, |v| !v.trim().is_empty())
}

/// Returns the bind address for the local OAuth callback server.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not
/// set. Commands guard against this by checking [`has_credentials`] first.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the OAuth redirect URI registered with the Spotify application.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI")
        .unwrap_or_else(|_| "http://127.0.0.1:8080/callback".to_string())
}

/// Returns the OAuth scope requested during authentication.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string())
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
