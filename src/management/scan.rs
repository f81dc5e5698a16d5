use std::{io::Error, path::PathBuf};

use crate::types::LibraryScan;

#[derive(Debug)]
pub enum ScanError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for ScanError {
    fn from(err: Error) -> Self {
        ScanError::IoError(err)
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::IoError(e) => write!(f, "io error: {}", e),
            ScanError::SerdeError(e) => write!(f, "serde error: {}", e),
        }
    }
}

/// Persists the result of a library scan (genre index plus totals).
///
/// The cache is only ever written after a fully successful scan, so a load
/// always yields a complete index; a failed scan leaves the previous scan in
/// place.
pub struct ScanManager {
    scan: LibraryScan,
}

impl ScanManager {
    pub fn new(scan: LibraryScan) -> Self {
        Self { scan }
    }

    pub async fn load() -> Result<Self, ScanError> {
        let path = Self::cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(ScanError::IoError)?;
        let scan: LibraryScan = serde_json::from_str(&content).map_err(ScanError::SerdeError)?;
        Ok(Self { scan })
    }

    pub async fn persist(&self) -> Result<(), ScanError> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(ScanError::IoError)?;
        }

        let json = serde_json::to_string_pretty(&self.scan).map_err(ScanError::SerdeError)?;
        async_fs::write(&path, json).await.map_err(ScanError::IoError)
    }

    pub fn scan(&self) -> &LibraryScan {
        &self.scan
    }

    fn cache_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("groovecli/cache/library-scan.json");
        path
    }
}
