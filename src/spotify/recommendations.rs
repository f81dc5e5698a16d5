use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config, types::RecommendationsResponse, warning};

/// Maximum number of seed tracks accepted by `GET /recommendations`.
pub const MAX_SEED_TRACKS: usize = 5;

/// Requests track recommendations seeded by up to [`MAX_SEED_TRACKS`] tracks.
///
/// `min_instrumentalness` biases the results toward instrumental tracks and
/// is only set when the caller curates with the instrumental filter active.
/// Honors the `Retry-After` header on 429 responses for delays up to 120
/// seconds; longer delays are reported and the request fails on status.
pub async fn get_recommendations(
    seed_tracks: &[String],
    limit: u32,
    min_instrumentalness: Option<f64>,
    token: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let seeds = seed_tracks
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut api_url = format!(
        "{uri}/recommendations?seed_tracks={seeds}&limit={limit}",
        uri = &config::spotify_apiurl(),
        seeds = seeds,
        limit = limit
    );
    if let Some(min_inst) = min_instrumentalness {
        api_url.push_str(&format!("&min_instrumentalness={}", min_inst));
    }

    loop {
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await?;

        // check for retry-after header
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
                    retry_after
                );
            }
        }

        let response = response.error_for_status()?;
        let json = response.json::<RecommendationsResponse>().await?;

        return Ok(json.tracks.into_iter().map(|t| t.id).collect());
    }
}
