use groovecli::Res;
use groovecli::gateway::SpotifyGateway;
use groovecli::genres::{MIN_GENRE_TRACKS, build_genre_index, scan, selectable_genres, top_genres};
use groovecli::types::{Artist, AudioFeatures, SavedTrack};

// Helper to create a saved track
fn track(id: &str, artist_id: &str) -> SavedTrack {
    SavedTrack {
        id: id.to_string(),
        primary_artist_id: artist_id.to_string(),
    }
}

// Helper to create an artist with genre tags
fn artist(id: &str, genres: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: format!("{}_name", id),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// Fake gateway serving a fixed library; `get_artists` records batch sizes
/// and can be made to fail.
struct FakeGateway {
    tracks: Vec<SavedTrack>,
    artists: Vec<Artist>,
    artist_batches: Vec<usize>,
    fail_artists: bool,
}

impl FakeGateway {
    fn new(tracks: Vec<SavedTrack>, artists: Vec<Artist>) -> Self {
        Self {
            tracks,
            artists,
            artist_batches: Vec::new(),
            fail_artists: false,
        }
    }
}

impl SpotifyGateway for FakeGateway {
    async fn list_saved_tracks(&mut self) -> Res<Vec<SavedTrack>> {
        Ok(self.tracks.clone())
    }

    async fn get_artists(&mut self, ids: &[String]) -> Res<Vec<Artist>> {
        if self.fail_artists {
            return Err("artist lookup failed".into());
        }
        self.artist_batches.push(ids.len());
        Ok(self
            .artists
            .iter()
            .filter(|a| ids.contains(&a.id))
            .cloned()
            .collect())
    }

    async fn get_audio_features(&mut self, _ids: &[String]) -> Res<Vec<Option<AudioFeatures>>> {
        Ok(Vec::new())
    }

    async fn get_recommendations(
        &mut self,
        _seed_tracks: &[String],
        _limit: u32,
        _min_instrumentalness: Option<f64>,
    ) -> Res<Vec<String>> {
        Ok(Vec::new())
    }

    async fn create_playlist(
        &mut self,
        _name: &str,
        _description: &str,
        _public: bool,
    ) -> Res<String> {
        Ok("playlist".to_string())
    }

    async fn add_items(&mut self, _playlist_id: &str, _track_ids: &[String]) -> Res<()> {
        Ok(())
    }
}

#[test]
fn test_bucket_contains_exactly_primary_artist_tracks() {
    let tracks = vec![
        track("t1", "a1"),
        track("t2", "a1"),
        track("t3", "a2"),
        track("t4", "a3"),
    ];
    let artists = vec![
        artist("a1", &["jazz", "bebop"]),
        artist("a2", &["jazz"]),
        artist("a3", &["rock"]),
    ];

    let index = build_genre_index(&tracks, &artists);

    // every bucket holds exactly the ids whose primary artist carries the tag
    let jazz: Vec<&str> = index["jazz"].iter().map(String::as_str).collect();
    assert_eq!(jazz.len(), 3);
    assert!(jazz.contains(&"t1") && jazz.contains(&"t2") && jazz.contains(&"t3"));
    assert!(!jazz.contains(&"t4"));

    let bebop: Vec<&str> = index["bebop"].iter().map(String::as_str).collect();
    assert_eq!(bebop.len(), 2);
    assert!(bebop.contains(&"t1") && bebop.contains(&"t2"));

    assert_eq!(index["rock"], vec!["t4".to_string()]);
}

#[test]
fn test_artists_without_genres_contribute_nothing() {
    let tracks = vec![track("t1", "a1")];
    let artists = vec![artist("a1", &[])];

    let index = build_genre_index(&tracks, &artists);
    assert!(index.is_empty());
}

#[test]
fn test_duplicate_saves_stay_duplicated_in_bucket() {
    // the same track saved twice appears twice; no dedup at this stage
    let tracks = vec![track("t1", "a1"), track("t1", "a1")];
    let artists = vec![artist("a1", &["ambient"])];

    let index = build_genre_index(&tracks, &artists);
    assert_eq!(index["ambient"], vec!["t1".to_string(), "t1".to_string()]);
}

#[test]
fn test_selectable_genres_threshold_boundary() {
    let tracks = vec![
        track("t1", "a1"),
        track("t2", "a1"),
        track("t3", "a1"),
        track("t4", "a2"),
        track("t5", "a2"),
    ];
    // a1 has three tracks (listed), a2 only two (suppressed)
    let artists = vec![artist("a1", &["house"]), artist("a2", &["dub"])];

    let index = build_genre_index(&tracks, &artists);
    let selectable = selectable_genres(&index);

    assert_eq!(selectable, vec![("house".to_string(), 3)]);
    assert!(index["dub"].len() < MIN_GENRE_TRACKS);
}

#[test]
fn test_top_genres_sorted_by_bucket_size() {
    let mut tracks = Vec::new();
    for i in 0..5 {
        tracks.push(track(&format!("h{}", i), "a1"));
    }
    for i in 0..3 {
        tracks.push(track(&format!("d{}", i), "a2"));
    }
    let artists = vec![artist("a1", &["house"]), artist("a2", &["dub"])];

    let index = build_genre_index(&tracks, &artists);
    let top = top_genres(&index);

    assert_eq!(
        top,
        vec![("house".to_string(), 5), ("dub".to_string(), 3)]
    );
}

#[tokio::test]
async fn test_scan_batches_artist_lookups_at_fifty() {
    // 120 distinct artists -> lookups of 50, 50, 20
    let mut tracks = Vec::new();
    let mut artists = Vec::new();
    for i in 0..120 {
        tracks.push(track(&format!("t{}", i), &format!("a{}", i)));
        artists.push(artist(&format!("a{}", i), &["electro"]));
    }

    let mut gateway = FakeGateway::new(tracks, artists);
    let scan_result = scan(&mut gateway).await.unwrap();

    assert_eq!(gateway.artist_batches, vec![50, 50, 20]);
    assert_eq!(scan_result.total_tracks, 120);
    assert_eq!(scan_result.genre_index["electro"].len(), 120);
}

#[tokio::test]
async fn test_scan_aborts_on_gateway_error() {
    let mut gateway = FakeGateway::new(
        vec![track("t1", "a1")],
        vec![artist("a1", &["jazz"])],
    );
    gateway.fail_artists = true;

    assert!(scan(&mut gateway).await.is_err());
}
