use tabled::Table;

use crate::{genres, info, management::ScanManager, types::GenreTableRow, utils, warning};

/// Prints library statistics from the cached scan: totals plus the top
/// genres by bucket size (genres below the selectable threshold stay
/// hidden here too).
pub async fn stats() {
    let scan_mgr = match ScanManager::load().await {
        Ok(mgr) => mgr,
        Err(e) => {
            warning!("No library scan found. Run groovecli scan first. Err: {}", e);
            return;
        }
    };

    let scan = scan_mgr.scan();
    info!("Total songs scanned: {}", scan.total_tracks);
    info!("Unique genres found: {}", scan.genre_index.len());

    let table_rows: Vec<GenreTableRow> = genres::top_genres(&scan.genre_index)
        .into_iter()
        .map(|(genre, tracks)| GenreTableRow {
            genre: utils::title_case(&genre),
            tracks,
        })
        .collect();

    println!("{}", Table::new(table_rows));
}
