use tabled::Table;

use crate::{genres, management::ScanManager, types::GenreTableRow, utils, warning};

/// Lists the selectable genres from the cached scan.
///
/// Only genres with at least three associated tracks appear. `--search`
/// filters by case-insensitive substring.
pub async fn list_genres(search: Option<String>) {
    let scan_mgr = match ScanManager::load().await {
        Ok(mgr) => mgr,
        Err(e) => {
            warning!("No library scan found. Run groovecli scan first. Err: {}", e);
            return;
        }
    };

    let mut selectable = genres::selectable_genres(&scan_mgr.scan().genre_index);

    if let Some(genre_search) = search {
        let search_term = genre_search.to_lowercase();
        selectable.retain(|(genre, _)| genre.to_lowercase().contains(&search_term));
    }

    let table_rows: Vec<GenreTableRow> = selectable
        .into_iter()
        .map(|(genre, tracks)| GenreTableRow {
            genre: utils::title_case(&genre),
            tracks,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
