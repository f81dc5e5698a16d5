//! Library scan and genre aggregation.
//!
//! A scan walks the user's saved tracks, resolves each track's primary
//! artist, and buckets track ids under every genre tag that artist carries.
//! Genre tags come only from the primary (first-listed) artist; tracks whose
//! secondary artists carry other genres are not represented under those.
//! Buckets keep duplicates: a track saved twice counts twice.

use std::{collections::HashMap, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    gateway::SpotifyGateway,
    spotify::artists::ARTIST_BATCH,
    types::{Artist, GenreIndex, LibraryScan, SavedTrack},
    utils,
};

/// Genres with fewer associated tracks than this are suppressed from the
/// selectable list and the stats output. Fixed, not configurable.
pub const MIN_GENRE_TRACKS: usize = 3;

/// How many genres the stats view lists.
pub const TOP_GENRES: usize = 15;

/// Scans the saved-tracks library and builds the genre index.
///
/// Fetches the full library, then resolves the distinct primary-artist ids
/// in chunks of [`ARTIST_BATCH`]. Any gateway error aborts the whole scan;
/// the caller never sees a partial index.
pub async fn scan<G: SpotifyGateway>(gateway: &mut G) -> Res<LibraryScan> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching saved tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let saved = match gateway.list_saved_tracks().await {
        Ok(saved) => saved,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    let mut artist_ids: Vec<String> = saved.iter().map(|t| t.primary_artist_id.clone()).collect();
    utils::dedup_preserving_order(&mut artist_ids);
    let total_artists = artist_ids.len();

    let mut artists: Vec<Artist> = Vec::new();
    for (i, chunk) in artist_ids.chunks(ARTIST_BATCH).enumerate() {
        pb.set_message(format!(
            "Analyzing artists {}/{}...",
            i * ARTIST_BATCH,
            total_artists
        ));

        match gateway.get_artists(chunk).await {
            Ok(batch) => artists.extend(batch),
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        }
    }

    pb.finish_and_clear();

    Ok(LibraryScan {
        total_tracks: saved.len(),
        genre_index: build_genre_index(&saved, &artists),
    })
}

/// Builds the genre index from saved tracks and their resolved artists.
///
/// For each track, every genre tag of its primary artist adds the track id
/// to that genre's bucket. No dedup within a bucket at this stage.
pub fn build_genre_index(tracks: &[SavedTrack], artists: &[Artist]) -> GenreIndex {
    let mut artist_to_tracks: HashMap<&str, Vec<&str>> = HashMap::new();
    for track in tracks {
        artist_to_tracks
            .entry(track.primary_artist_id.as_str())
            .or_default()
            .push(track.id.as_str());
    }

    let mut index = GenreIndex::new();
    for artist in artists {
        let Some(track_ids) = artist_to_tracks.get(artist.id.as_str()) else {
            continue;
        };
        for genre in &artist.genres {
            index
                .entry(genre.clone())
                .or_default()
                .extend(track_ids.iter().map(|id| id.to_string()));
        }
    }

    index
}

/// Returns the selectable genres (bucket size >= [`MIN_GENRE_TRACKS`]) with
/// their track counts, sorted by genre name.
pub fn selectable_genres(index: &GenreIndex) -> Vec<(String, usize)> {
    index
        .iter()
        .filter(|(_, bucket)| bucket.len() >= MIN_GENRE_TRACKS)
        .map(|(genre, bucket)| (genre.clone(), bucket.len()))
        .collect()
}

/// Returns the top selectable genres by bucket size, largest first, at most
/// [`TOP_GENRES`] entries.
pub fn top_genres(index: &GenreIndex) -> Vec<(String, usize)> {
    let mut genres = selectable_genres(index);
    genres.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    genres.truncate(TOP_GENRES);
    genres
}
