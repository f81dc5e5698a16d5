use reqwest::Client;

use crate::{config, types::CurrentUserResponse};

/// Retrieves the authenticated user's id.
///
/// The id is the playlist owner for every curated playlist; it is resolved
/// from the session rather than configuration so `setup` never has to ask
/// for it.
pub async fn get_current_user_id(token: &str) -> Result<String, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<CurrentUserResponse>().await?;
    Ok(json.id)
}
