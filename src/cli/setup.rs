use std::io::{self, Write};

use crate::{config, error, info, success, warning};

const DASHBOARD_URL: &str = "https://developer.spotify.com/dashboard";

/// First-run credential setup.
///
/// Collects the Spotify API client id and secret and writes them, together
/// with the fixed redirect URI, to the flat credentials file. Empty input is
/// rejected with a re-prompt. After a successful setup the user continues
/// with `groovecli auth`.
pub async fn setup() {
    info!("Welcome to groovecli! To get started, we need your Spotify API keys.");
    info!(
        "Create an app in the developer dashboard ({}) and copy its Client ID and Client Secret.",
        DASHBOARD_URL
    );

    if webbrowser::open(DASHBOARD_URL).is_err() {
        warning!("Could not open the dashboard in your browser; open the URL above manually.");
    }

    let client_id = prompt("Client ID");
    let client_secret = prompt("Client Secret");

    let contents = format!(
        "SPOTIFY_API_AUTH_CLIENT_ID={}\nSPOTIFY_API_AUTH_CLIENT_SECRET={}\nSPOTIFY_API_REDIRECT_URI={}\n",
        client_id,
        client_secret,
        config::spotify_redirect_uri()
    );

    let path = config::env_path();
    if let Some(parent) = path.parent() {
        if let Err(e) = async_fs::create_dir_all(parent).await {
            error!("Failed to create config directory: {}", e);
        }
    }
    if let Err(e) = async_fs::write(&path, contents).await {
        error!("Failed to write credentials file: {}", e);
    }

    success!("Keys saved to {}.", path.display());
    info!("Now run groovecli auth to connect your account.");
}

/// Reads one non-empty line from stdin, re-prompting on empty input.
fn prompt(label: &str) -> String {
    loop {
        print!("{}: ", label);
        if io::stdout().flush().is_err() {
            error!("Failed to flush stdout.");
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => error!("Input closed before both keys were provided."),
            Ok(_) => {
                let value = input.trim();
                if !value.is_empty() {
                    return value.to_string();
                }
                warning!("Please paste a value to continue.");
            }
            Err(e) => error!("Failed to read input: {}", e),
        }
    }
}
