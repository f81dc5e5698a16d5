//! Playlist curation engine.
//!
//! Turns a [`CurationRequest`] plus the cached genre index into a created
//! playlist: union the selected genres' buckets, optionally keep only
//! instrumental tracks, optionally blend in recommendations ("spice"), then
//! shuffle and submit in batches.

use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::{IndexedRandom, SliceRandom};

use crate::{
    Res,
    gateway::SpotifyGateway,
    spotify::{
        features::FEATURES_BATCH, playlist::PLAYLIST_ADD_BATCH, recommendations::MAX_SEED_TRACKS,
    },
    types::{CurationRequest, GenreIndex},
    warning,
};

/// Tracks survive the instrumental filter when their instrumentalness score
/// is strictly greater than this.
pub const INSTRUMENTAL_THRESHOLD: f64 = 0.5;

/// Instrumentalness floor passed to the recommendation request when the
/// instrumental filter is active.
pub const DISCOVERY_MIN_INSTRUMENTALNESS: f64 = 0.6;

/// Hard cap on recommendation results per request.
pub const MAX_RECOMMENDATIONS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurationOutcome {
    /// Playlist created; `track_count` is the number of submitted tracks.
    Created {
        playlist_id: String,
        track_count: usize,
    },
    /// The pool ended up empty after filtering; no playlist was created.
    NoSongs,
}

/// Runs the full curation pipeline and creates the playlist.
///
/// A blank playlist name is rejected up front. Recommendation failures are
/// non-fatal (the pool just stays as it is); feature-lookup and
/// playlist-creation failures abort with an error. There is no rollback of a
/// partially filled playlist.
pub async fn curate<G: SpotifyGateway>(
    gateway: &mut G,
    index: &GenreIndex,
    request: &CurationRequest,
) -> Res<CurationOutcome> {
    if request.name.trim().is_empty() {
        return Err("playlist name must not be empty".into());
    }

    let mut pool = union_pool(index, &request.genres);

    if request.instrumental_only {
        pool = filter_instrumental(gateway, pool).await?;
    }

    if request.spice > 0 && !pool.is_empty() {
        let target_new = discovery_target(pool.len(), request.spice);
        if target_new > 0 {
            let seed_tracks: Vec<String> = {
                let mut rng = rand::rng();
                pool.choose_multiple(&mut rng, MAX_SEED_TRACKS.min(pool.len()))
                    .cloned()
                    .collect()
            };
            let limit = MAX_RECOMMENDATIONS.min(target_new) as u32;
            let min_inst = request
                .instrumental_only
                .then_some(DISCOVERY_MIN_INSTRUMENTALNESS);

            // A failed discovery fetch is survivable; the recommendations are
            // appended as-is, without dedup against the pool and without
            // re-applying the instrumental filter.
            match gateway.get_recommendations(&seed_tracks, limit, min_inst).await {
                Ok(recommended) => pool.extend(recommended),
                Err(e) => warning!("Discovery error: {}", e),
            }
        }
    }

    if pool.is_empty() {
        return Ok(CurationOutcome::NoSongs);
    }

    let description = playlist_description(request);
    let playlist_id = gateway
        .create_playlist(&request.name, &description, true)
        .await?;

    {
        let mut rng = rand::rng();
        pool.shuffle(&mut rng);
    }

    for chunk in pool.chunks(PLAYLIST_ADD_BATCH) {
        gateway.add_items(&playlist_id, chunk).await?;
    }

    Ok(CurationOutcome::Created {
        track_count: pool.len(),
        playlist_id,
    })
}

/// Unions the selected genres' buckets into a deduplicated pool.
///
/// First-seen order is preserved so the pool is deterministic up to the
/// final shuffle. Selected genres missing from the index contribute nothing.
pub fn union_pool(index: &GenreIndex, genres: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    for genre in genres {
        let Some(bucket) = index.get(genre) else {
            continue;
        };
        for id in bucket {
            if seen.insert(id.clone()) {
                pool.push(id.clone());
            }
        }
    }
    pool
}

/// Number of recommended tracks to blend in: floor(pool_size * spice / 100).
pub fn discovery_target(pool_size: usize, spice: u8) -> usize {
    pool_size * spice as usize / 100
}

async fn filter_instrumental<G: SpotifyGateway>(
    gateway: &mut G,
    pool: Vec<String>,
) -> Res<Vec<String>> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Filtering vocals (this takes a moment)...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let total = pool.len();
    let mut instrumental: Vec<String> = Vec::new();

    for (i, chunk) in pool.chunks(FEATURES_BATCH).enumerate() {
        pb.set_message(format!(
            "Filtering vocals {}/{}...",
            i * FEATURES_BATCH,
            total
        ));

        let features = match gateway.get_audio_features(chunk).await {
            Ok(features) => features,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        // Null entries (no analysis available) are dropped with the vocals.
        instrumental.extend(
            features
                .into_iter()
                .flatten()
                .filter(|f| f.instrumentalness > INSTRUMENTAL_THRESHOLD)
                .map(|f| f.id),
        );
    }

    pb.finish_and_clear();
    Ok(instrumental)
}

/// Generated playlist description naming the spice percentage and the first
/// three selected genres.
pub fn playlist_description(request: &CurationRequest) -> String {
    let genres = request
        .genres
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Curated with groovecli. {}% spice. Genres: {}",
        request.spice, genres
    )
}
