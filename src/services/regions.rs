use sqlx::PgPool;

use super::ServiceError;
use crate::db;
use crate::models::{Region, RegionHierarchyRow};

/// Region lookups over the reference table. Owns its pool handle; one query
/// per method.
#[derive(Clone)]
pub struct RegionsService {
    pool: PgPool,
}

impl RegionsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_regions(&self) -> Result<Vec<Region>, ServiceError> {
        Ok(db::get_all_regions(&self.pool).await?)
    }

    pub async fn get_prefectures(&self) -> Result<Vec<Region>, ServiceError> {
        Ok(db::get_prefectures(&self.pool).await?)
    }

    pub async fn get_municipalities_by_prefecture(
        &self,
        prefecture_code: &str,
    ) -> Result<Vec<Region>, ServiceError> {
        Ok(db::get_municipalities_by_prefecture(&self.pool, prefecture_code).await?)
    }

    pub async fn get_region_by_code(&self, code: &str) -> Result<Region, ServiceError> {
        Ok(db::get_region_by_code(&self.pool, code).await?)
    }

    pub async fn get_region_hierarchy(&self) -> Result<Vec<RegionHierarchyRow>, ServiceError> {
        Ok(db::get_region_hierarchy(&self.pool).await?)
    }
}
