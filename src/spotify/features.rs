use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{AudioFeatures, AudioFeaturesResponse},
};

/// Maximum number of ids accepted by `GET /audio-features`.
pub const FEATURES_BATCH: usize = 100;

/// Retrieves audio features for a batch of tracks in a single request.
///
/// The API returns `null` for tracks without feature analysis; those entries
/// come back as `None` and the instrumental filter drops them. Retries in
/// place on 502 Bad Gateway with a 10-second delay.
pub async fn get_audio_features(
    ids: &[String],
    token: &str,
) -> Result<Vec<Option<AudioFeatures>>, reqwest::Error> {
    let track_ids = ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{url}/audio-features?ids={track_ids}",
        url = &config::spotify_apiurl(),
        track_ids = track_ids
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

        let json = response.json::<AudioFeaturesResponse>().await?;
        return Ok(json.audio_features);
    }
}
