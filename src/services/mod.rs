pub mod regions;
pub mod sports;

pub use regions::RegionsService;
pub use sports::SportsService;

use thiserror::Error;

/// Failures surfaced by the service layer. Causes pass through unchanged;
/// handlers decide how they map to HTTP.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid uuid: {0}")]
    InvalidId(#[from] uuid::Error),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}
