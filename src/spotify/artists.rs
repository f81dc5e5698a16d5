use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{Artist, SeveralArtistsResponse},
};

/// Maximum number of ids accepted by `GET /artists`.
pub const ARTIST_BATCH: usize = 50;

/// Retrieves a batch of artists (with their genre tags) in a single request.
///
/// Combines up to [`ARTIST_BATCH`] comma-joined ids per call; the aggregator
/// chunks its distinct primary-artist ids to this limit. Retries in place on
/// 502 Bad Gateway with a 10-second delay.
pub async fn get_several_artists(
    ids: &[String],
    token: &str,
) -> Result<Vec<Artist>, reqwest::Error> {
    let artist_ids = ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{url}/artists?ids={artist_ids}",
        url = &config::spotify_apiurl(),
        artist_ids = artist_ids
    );

    loop {
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

        let json = response.json::<SeveralArtistsResponse>().await?;
        return Ok(json.artists);
    }
}
