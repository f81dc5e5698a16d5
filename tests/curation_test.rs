use std::collections::{BTreeMap, HashMap, HashSet};

use groovecli::Res;
use groovecli::curation::{
    CurationOutcome, curate, discovery_target, playlist_description, union_pool,
};
use groovecli::gateway::SpotifyGateway;
use groovecli::types::{Artist, AudioFeatures, CurationRequest, GenreIndex, SavedTrack};

fn ids(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}", prefix, i)).collect()
}

fn index_of(buckets: &[(&str, Vec<String>)]) -> GenreIndex {
    let mut index = BTreeMap::new();
    for (genre, bucket) in buckets {
        index.insert(genre.to_string(), bucket.clone());
    }
    index
}

fn request(genres: &[&str], spice: u8, instrumental_only: bool) -> CurationRequest {
    CurationRequest {
        name: "Test Mix".to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        spice,
        instrumental_only,
    }
}

/// Fake gateway recording every curation-relevant call.
#[derive(Default)]
struct FakeGateway {
    /// instrumentalness per track id; an explicit `None` models a track
    /// without feature analysis
    features: HashMap<String, Option<f64>>,
    fail_features: bool,
    recommendation_ids: Vec<String>,
    fail_recommendations: bool,
    rec_requests: Vec<(Vec<String>, u32, Option<f64>)>,
    created: Vec<(String, String, bool)>,
    added_batches: Vec<Vec<String>>,
}

impl SpotifyGateway for FakeGateway {
    async fn list_saved_tracks(&mut self) -> Res<Vec<SavedTrack>> {
        Ok(Vec::new())
    }

    async fn get_artists(&mut self, _ids: &[String]) -> Res<Vec<Artist>> {
        Ok(Vec::new())
    }

    async fn get_audio_features(&mut self, ids: &[String]) -> Res<Vec<Option<AudioFeatures>>> {
        if self.fail_features {
            return Err("feature lookup failed".into());
        }
        Ok(ids
            .iter()
            .map(|id| {
                self.features
                    .get(id)
                    .copied()
                    .flatten()
                    .map(|instrumentalness| AudioFeatures {
                        id: id.clone(),
                        instrumentalness,
                    })
            })
            .collect())
    }

    async fn get_recommendations(
        &mut self,
        seed_tracks: &[String],
        limit: u32,
        min_instrumentalness: Option<f64>,
    ) -> Res<Vec<String>> {
        self.rec_requests
            .push((seed_tracks.to_vec(), limit, min_instrumentalness));
        if self.fail_recommendations {
            return Err("recommendation fetch failed".into());
        }
        Ok(self.recommendation_ids.clone())
    }

    async fn create_playlist(
        &mut self,
        name: &str,
        description: &str,
        public: bool,
    ) -> Res<String> {
        self.created
            .push((name.to_string(), description.to_string(), public));
        Ok("playlist-1".to_string())
    }

    async fn add_items(&mut self, _playlist_id: &str, track_ids: &[String]) -> Res<()> {
        self.added_batches.push(track_ids.to_vec());
        Ok(())
    }
}

fn submitted(gateway: &FakeGateway) -> Vec<String> {
    gateway.added_batches.iter().flatten().cloned().collect()
}

#[test]
fn test_union_pool_deduplicates_across_genres() {
    let index = index_of(&[
        ("jazz", vec!["a".into(), "b".into(), "c".into()]),
        ("bebop", vec!["b".into(), "d".into()]),
    ]);

    let pool = union_pool(&index, &["jazz".to_string(), "bebop".to_string()]);

    assert_eq!(pool, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_union_pool_deduplicates_within_bucket() {
    // buckets may carry duplicates from repeated saves
    let index = index_of(&[("jazz", vec!["a".into(), "a".into(), "b".into()])]);
    let pool = union_pool(&index, &["jazz".to_string()]);
    assert_eq!(pool, vec!["a", "b"]);
}

#[test]
fn test_union_pool_ignores_unknown_genres() {
    let index = index_of(&[("jazz", vec!["a".into()])]);
    let pool = union_pool(&index, &["jazz".to_string(), "zydeco".to_string()]);
    assert_eq!(pool, vec!["a"]);
}

#[test]
fn test_discovery_target_floors() {
    assert_eq!(discovery_target(40, 50), 20);
    assert_eq!(discovery_target(3, 50), 1);
    assert_eq!(discovery_target(1, 50), 0);
    assert_eq!(discovery_target(0, 100), 0);
    assert_eq!(discovery_target(10, 0), 0);
}

#[tokio::test]
async fn test_blank_name_is_rejected_before_creation() {
    let index = index_of(&[("jazz", ids("t", 3))]);
    let mut gateway = FakeGateway::default();
    let mut req = request(&["jazz"], 0, false);
    req.name = "   ".to_string();

    assert!(curate(&mut gateway, &index, &req).await.is_err());
    assert!(gateway.created.is_empty());
    assert!(gateway.added_batches.is_empty());
}

#[tokio::test]
async fn test_instrumental_filter_keeps_strictly_above_half() {
    let index = index_of(&[("jazz", vec!["a".into(), "b".into(), "c".into()])]);
    let mut gateway = FakeGateway::default();
    gateway.features.insert("a".into(), Some(0.9));
    gateway.features.insert("b".into(), Some(0.3));
    gateway.features.insert("c".into(), Some(0.51));

    let outcome = curate(&mut gateway, &index, &request(&["jazz"], 0, true))
        .await
        .unwrap();

    assert!(matches!(outcome, CurationOutcome::Created { track_count: 2, .. }));
    let result: HashSet<String> = submitted(&gateway).into_iter().collect();
    assert_eq!(result, HashSet::from(["a".to_string(), "c".to_string()]));
}

#[tokio::test]
async fn test_instrumental_filter_drops_tracks_without_features() {
    let index = index_of(&[("jazz", vec!["a".into(), "b".into()])]);
    let mut gateway = FakeGateway::default();
    gateway.features.insert("a".into(), Some(0.8));
    gateway.features.insert("b".into(), None); // no analysis -> dropped

    let outcome = curate(&mut gateway, &index, &request(&["jazz"], 0, true))
        .await
        .unwrap();

    assert!(matches!(outcome, CurationOutcome::Created { track_count: 1, .. }));
    assert_eq!(submitted(&gateway), vec!["a".to_string()]);
}

#[tokio::test]
async fn test_feature_lookup_failure_aborts_curation() {
    let index = index_of(&[("jazz", vec!["a".into()])]);
    let mut gateway = FakeGateway::default();
    gateway.fail_features = true;

    assert!(curate(&mut gateway, &index, &request(&["jazz"], 0, true))
        .await
        .is_err());
    assert!(gateway.created.is_empty());
}

#[tokio::test]
async fn test_spice_zero_submits_exactly_the_pool() {
    let bucket = ids("t", 7);
    let index = index_of(&[("jazz", bucket.clone())]);
    let mut gateway = FakeGateway::default();

    let outcome = curate(&mut gateway, &index, &request(&["jazz"], 0, false))
        .await
        .unwrap();

    assert!(matches!(outcome, CurationOutcome::Created { track_count: 7, .. }));
    assert!(gateway.rec_requests.is_empty());

    // same set of tracks, order is the shuffle's business
    let result: HashSet<String> = submitted(&gateway).into_iter().collect();
    assert_eq!(result, bucket.into_iter().collect::<HashSet<_>>());
}

#[tokio::test]
async fn test_discovery_limit_is_min_of_hundred_and_target() {
    // pool 40, spice 50 -> target 20 -> limit 20
    let index = index_of(&[("jazz", ids("t", 40))]);
    let mut gateway = FakeGateway::default();
    gateway.recommendation_ids = ids("r", 20);

    curate(&mut gateway, &index, &request(&["jazz"], 50, false))
        .await
        .unwrap();

    assert_eq!(gateway.rec_requests.len(), 1);
    let (seeds, limit, min_inst) = &gateway.rec_requests[0];
    assert_eq!(*limit, 20);
    assert_eq!(*min_inst, None);

    // seeds: at most 5, sampled from the pool without replacement
    assert_eq!(seeds.len(), 5);
    let distinct: HashSet<&String> = seeds.iter().collect();
    assert_eq!(distinct.len(), 5);
    assert!(seeds.iter().all(|s| s.starts_with('t')));
}

#[tokio::test]
async fn test_discovery_limit_caps_at_hundred() {
    // pool 300, spice 100 -> target 300 -> limit capped at 100
    let index = index_of(&[("jazz", ids("t", 300))]);
    let mut gateway = FakeGateway::default();

    curate(&mut gateway, &index, &request(&["jazz"], 100, false))
        .await
        .unwrap();

    assert_eq!(gateway.rec_requests[0].1, 100);
}

#[tokio::test]
async fn test_discovery_skipped_when_target_rounds_to_zero() {
    let index = index_of(&[("jazz", vec!["a".into()])]);
    let mut gateway = FakeGateway::default();

    let outcome = curate(&mut gateway, &index, &request(&["jazz"], 50, false))
        .await
        .unwrap();

    assert!(gateway.rec_requests.is_empty());
    assert!(matches!(outcome, CurationOutcome::Created { track_count: 1, .. }));
}

#[tokio::test]
async fn test_discovery_biases_instrumentalness_when_filtering() {
    let index = index_of(&[("jazz", ids("t", 10))]);
    let mut gateway = FakeGateway::default();
    for id in ids("t", 10) {
        gateway.features.insert(id, Some(0.9));
    }

    curate(&mut gateway, &index, &request(&["jazz"], 50, true))
        .await
        .unwrap();

    assert_eq!(gateway.rec_requests[0].2, Some(0.6));
}

#[tokio::test]
async fn test_recommendations_appended_without_dedup() {
    // recommendations already in the pool still get appended
    let bucket = ids("t", 10);
    let index = index_of(&[("jazz", bucket.clone())]);
    let mut gateway = FakeGateway::default();
    gateway.recommendation_ids = vec![bucket[0].clone(), bucket[1].clone(), "fresh".to_string()];

    let outcome = curate(&mut gateway, &index, &request(&["jazz"], 50, false))
        .await
        .unwrap();

    assert!(matches!(outcome, CurationOutcome::Created { track_count: 13, .. }));
    assert_eq!(submitted(&gateway).len(), 13);
}

#[tokio::test]
async fn test_recommendation_failure_is_non_fatal() {
    let index = index_of(&[("jazz", ids("t", 10))]);
    let mut gateway = FakeGateway::default();
    gateway.fail_recommendations = true;

    let outcome = curate(&mut gateway, &index, &request(&["jazz"], 50, false))
        .await
        .unwrap();

    // pool unchanged, playlist still created
    assert!(matches!(outcome, CurationOutcome::Created { track_count: 10, .. }));
    assert_eq!(gateway.created.len(), 1);
}

#[tokio::test]
async fn test_submission_batches_at_one_hundred() {
    // 250 tracks -> exactly three add calls of 100, 100, 50
    let index = index_of(&[("jazz", ids("t", 250))]);
    let mut gateway = FakeGateway::default();

    curate(&mut gateway, &index, &request(&["jazz"], 0, false))
        .await
        .unwrap();

    let sizes: Vec<usize> = gateway.added_batches.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![100, 100, 50]);
}

#[tokio::test]
async fn test_empty_pool_reports_no_songs_and_creates_nothing() {
    let index = index_of(&[("jazz", vec!["a".into()])]);
    let mut gateway = FakeGateway::default();
    // feature map empty: every lookup yields None, the filter drops everything

    let outcome = curate(&mut gateway, &index, &request(&["jazz"], 50, true))
        .await
        .unwrap();

    assert_eq!(outcome, CurationOutcome::NoSongs);
    assert!(gateway.created.is_empty());
    assert!(gateway.added_batches.is_empty());
    assert!(gateway.rec_requests.is_empty());
}

#[tokio::test]
async fn test_playlist_is_public_with_generated_description() {
    let index = index_of(&[
        ("jazz", ids("j", 3)),
        ("dub", ids("d", 3)),
        ("house", ids("h", 3)),
        ("ambient", ids("a", 3)),
    ]);
    let mut gateway = FakeGateway::default();

    let req = request(&["jazz", "dub", "house", "ambient"], 0, false);
    curate(&mut gateway, &index, &req).await.unwrap();

    let (name, description, public) = &gateway.created[0];
    assert_eq!(name, "Test Mix");
    assert!(*public);
    // description names the spice and only the first three genres
    assert_eq!(
        description,
        "Curated with groovecli. 0% spice. Genres: jazz, dub, house"
    );
    assert_eq!(description, &playlist_description(&req));
}
