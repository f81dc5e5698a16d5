mod auth;
mod scan;

pub use auth::TokenManager;
pub use scan::ScanError;
pub use scan::ScanManager;
