use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse},
};

/// Maximum number of track uris accepted by `POST /playlists/{id}/tracks`.
pub const PLAYLIST_ADD_BATCH: usize = 100;

/// Creates a playlist owned by `user_id`.
///
/// Curated playlists are public with a generated description naming the
/// spice percentage and the first selected genres; both come in from the
/// curation engine.
pub async fn create(
    user_id: &str,
    name: &str,
    description: &str,
    public: bool,
    token: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public,
        collaborative: false,
    };

    loop {
        let client = Client::new();
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        return response.json::<CreatePlaylistResponse>().await;
    }
}

/// Adds a batch of tracks to a playlist.
///
/// Track ids are expanded to full `spotify:track:` uris here; callers chunk
/// to [`PLAYLIST_ADD_BATCH`] ids per call.
pub async fn add_tracks(
    playlist_id: &str,
    track_ids: &[String],
    token: &str,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let body = AddTracksRequest {
        uris: track_ids
            .iter()
            .map(|id| format!("spotify:track:{}", id))
            .collect(),
    };

    loop {
        let client = Client::new();
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        return response.json::<AddTracksResponse>().await;
    }
}
