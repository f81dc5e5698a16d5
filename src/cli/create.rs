use crate::{
    curation::{self, CurationOutcome},
    error,
    gateway::WebGateway,
    info,
    management::ScanManager,
    success,
    types::CurationRequest,
};

/// Curates a playlist from the cached genre index and the given request.
pub async fn create(request: CurationRequest) {
    let scan_mgr = match ScanManager::load().await {
        Ok(mgr) => mgr,
        Err(e) => {
            error!("No library scan found. Run groovecli scan first. Err: {}", e);
        }
    };

    let mut gateway = WebGateway::from_cache().await;

    info!("Curating songs...");
    match curation::curate(&mut gateway, &scan_mgr.scan().genre_index, &request).await {
        Ok(CurationOutcome::Created { track_count, .. }) => {
            success!("Created '{}' with {} tracks.", request.name, track_count);
        }
        Ok(CurationOutcome::NoSongs) => {
            info!("No songs found after filtering.");
        }
        Err(e) => error!("Failed to create playlist: {}", e),
    }
}
