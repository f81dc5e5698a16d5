use crate::{error, gateway::WebGateway, genres, info, management::ScanManager, success};

/// Scans the saved-tracks library and caches the resulting genre index.
///
/// A failed scan discards everything from this run; the cache keeps whatever
/// the previous successful scan wrote.
pub async fn scan() {
    let mut gateway = WebGateway::from_cache().await;

    info!("Fetching your vibes...");
    let scan = match genres::scan(&mut gateway).await {
        Ok(scan) => scan,
        Err(e) => error!("Scan failed: {}", e),
    };

    let main_genres = genres::selectable_genres(&scan.genre_index).len();
    let total_tracks = scan.total_tracks;

    if let Err(e) = ScanManager::new(scan).persist().await {
        error!("Failed to cache scan: {}", e);
    }

    success!(
        "Scan complete. {} tracks scanned, found {} main genres.",
        total_tracks,
        main_genres
    );
}
