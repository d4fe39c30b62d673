use sqlx::PgPool;
use uuid::Uuid;

use super::ServiceError;
use crate::db;
use crate::models::Sport;

/// Sports lookups over the reference table. Owns its pool handle; one query
/// per method.
#[derive(Clone)]
pub struct SportsService {
    pool: PgPool,
}

impl SportsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_sports(&self) -> Result<Vec<Sport>, ServiceError> {
        Ok(db::get_all_sports(&self.pool).await?)
    }

    pub async fn get_active_sports(&self) -> Result<Vec<Sport>, ServiceError> {
        Ok(db::get_active_sports(&self.pool).await?)
    }

    /// Looks up a sport by its UUID. A malformed `id` fails before any query
    /// runs.
    pub async fn get_sport_by_id(&self, id: &str) -> Result<Sport, ServiceError> {
        let id = Uuid::parse_str(id)?;
        Ok(db::get_sport_by_id(&self.pool, id).await?)
    }

    pub async fn get_sport_by_code(&self, code: &str) -> Result<Sport, ServiceError> {
        Ok(db::get_sport_by_code(&self.pool, code).await?)
    }
}
