use sqlx::PgPool;

use crate::services::{RegionsService, SportsService};

/// Shared application state, cloned per request by axum. Each service owns
/// its own handle to the pool.
#[derive(Clone)]
pub struct AppState {
    pub sports: SportsService,
    pub regions: RegionsService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sports: SportsService::new(pool.clone()),
            regions: RegionsService::new(pool),
        }
    }
}
