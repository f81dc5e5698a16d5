use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config, types::SavedTracksResponse};

/// Maximum page size accepted by `GET /me/tracks`.
pub const SAVED_TRACKS_PAGE: usize = 50;

/// Fetches one page of the user's saved tracks.
///
/// Returns the raw page; the caller advances `offset` until the response
/// carries no `next` URL. Retries in place on 502 Bad Gateway with a
/// 10-second delay, the same way every other endpoint does.
pub async fn get_saved_tracks_page(
    token: &str,
    limit: usize,
    offset: usize,
) -> Result<SavedTracksResponse, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/me/tracks?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            limit = limit,
            offset = offset
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

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

        return response.json::<SavedTracksResponse>().await;
    }
}
