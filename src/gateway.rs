//! The injected API-gateway seam.
//!
//! The genre aggregator and the curation engine never talk HTTP themselves;
//! they run against [`SpotifyGateway`], so the core logic is exercisable with
//! a fake implementation in tests. [`WebGateway`] is the real thing: it owns
//! the token manager and delegates to the `spotify` modules. Batch-limit
//! chunking is the caller's job; each gateway call passes one batch through.

use crate::{
    Res, error,
    management::TokenManager,
    spotify,
    types::{Artist, AudioFeatures, SavedTrack, SavedTrackItem},
};

#[allow(async_fn_in_trait)]
pub trait SpotifyGateway {
    /// Returns the user's complete saved-tracks library, already distilled to
    /// track id + primary artist id. Pagination happens inside.
    async fn list_saved_tracks(&mut self) -> Res<Vec<SavedTrack>>;

    /// Looks up one batch of artists (at most 50 ids).
    async fn get_artists(&mut self, ids: &[String]) -> Res<Vec<Artist>>;

    /// Looks up audio features for one batch of tracks (at most 100 ids).
    /// Entries without analysis come back as `None`.
    async fn get_audio_features(&mut self, ids: &[String]) -> Res<Vec<Option<AudioFeatures>>>;

    /// Requests recommendations seeded by up to 5 tracks, optionally with an
    /// instrumentalness floor.
    async fn get_recommendations(
        &mut self,
        seed_tracks: &[String],
        limit: u32,
        min_instrumentalness: Option<f64>,
    ) -> Res<Vec<String>>;

    /// Creates a playlist for the authenticated user and returns its id.
    async fn create_playlist(&mut self, name: &str, description: &str, public: bool)
    -> Res<String>;

    /// Adds one batch of tracks (at most 100 ids) to a playlist.
    async fn add_items(&mut self, playlist_id: &str, track_ids: &[String]) -> Res<()>;
}

/// Gateway implementation over the Spotify Web API.
pub struct WebGateway {
    token_mgr: TokenManager,
    user_id: Option<String>,
}

impl WebGateway {
    pub fn new(token_mgr: TokenManager) -> Self {
        Self {
            token_mgr,
            user_id: None,
        }
    }

    /// Loads the cached token or terminates with a pointer to `groovecli auth`.
    pub async fn from_cache() -> Self {
        match TokenManager::load().await {
            Ok(token_mgr) => Self::new(token_mgr),
            Err(e) => {
                error!(
                    "Failed to load token. Please run groovecli auth\n Error: {}",
                    e
                );
            }
        }
    }

    async fn user_id(&mut self) -> Res<String> {
        if let Some(id) = &self.user_id {
            return Ok(id.clone());
        }
        let token = self.token_mgr.get_valid_token().await;
        let id = spotify::user::get_current_user_id(&token).await?;
        self.user_id = Some(id.clone());
        Ok(id)
    }
}

impl SpotifyGateway for WebGateway {
    async fn list_saved_tracks(&mut self) -> Res<Vec<SavedTrack>> {
        let mut tracks: Vec<SavedTrack> = Vec::new();
        let mut offset = 0;

        loop {
            let token = self.token_mgr.get_valid_token().await;
            let page =
                spotify::library::get_saved_tracks_page(&token, spotify::library::SAVED_TRACKS_PAGE, offset)
                    .await?;

            if page.items.is_empty() {
                break;
            }
            offset += page.items.len();
            tracks.extend(page.items.into_iter().filter_map(distill));

            if page.next.is_none() {
                break;
            }
        }

        Ok(tracks)
    }

    async fn get_artists(&mut self, ids: &[String]) -> Res<Vec<Artist>> {
        let token = self.token_mgr.get_valid_token().await;
        Ok(spotify::artists::get_several_artists(ids, &token).await?)
    }

    async fn get_audio_features(&mut self, ids: &[String]) -> Res<Vec<Option<AudioFeatures>>> {
        let token = self.token_mgr.get_valid_token().await;
        Ok(spotify::features::get_audio_features(ids, &token).await?)
    }

    async fn get_recommendations(
        &mut self,
        seed_tracks: &[String],
        limit: u32,
        min_instrumentalness: Option<f64>,
    ) -> Res<Vec<String>> {
        let token = self.token_mgr.get_valid_token().await;
        Ok(
            spotify::recommendations::get_recommendations(
                seed_tracks,
                limit,
                min_instrumentalness,
                &token,
            )
            .await?,
        )
    }

    async fn create_playlist(
        &mut self,
        name: &str,
        description: &str,
        public: bool,
    ) -> Res<String> {
        let user_id = self.user_id().await?;
        let token = self.token_mgr.get_valid_token().await;
        let resp = spotify::playlist::create(&user_id, name, description, public, &token).await?;
        Ok(resp.id)
    }

    async fn add_items(&mut self, playlist_id: &str, track_ids: &[String]) -> Res<()> {
        let token = self.token_mgr.get_valid_token().await;
        spotify::playlist::add_tracks(playlist_id, track_ids, &token).await?;
        Ok(())
    }
}

/// Distills a raw saved-track item to id + primary artist id. Items with a
/// missing track object, missing track id, or no usable first artist id are
/// skipped.
fn distill(item: SavedTrackItem) -> Option<SavedTrack> {
    let track = item.track?;
    let id = track.id.filter(|id| !id.is_empty())?;
    let primary_artist_id = track
        .artists
        .first()
        .and_then(|a| a.id.clone())
        .filter(|id| !id.is_empty())?;

    Some(SavedTrack {
        id,
        primary_artist_id,
    })
}
