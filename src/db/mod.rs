use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Region, RegionHierarchyRow, Sport};

// Sport queries. By-key lookups use fetch_one so a missing row surfaces as
// sqlx::Error::RowNotFound, unchanged, for the caller to map.
pub async fn get_all_sports(pool: &PgPool) -> Result<Vec<Sport>, sqlx::Error> {
    sqlx::query_as::<_, Sport>(r#"SELECT * FROM sports ORDER BY code"#)
        .fetch_all(pool)
        .await
}

pub async fn get_active_sports(pool: &PgPool) -> Result<Vec<Sport>, sqlx::Error> {
    sqlx::query_as::<_, Sport>(r#"SELECT * FROM sports WHERE is_active = TRUE ORDER BY code"#)
        .fetch_all(pool)
        .await
}

pub async fn get_sport_by_id(pool: &PgPool, id: Uuid) -> Result<Sport, sqlx::Error> {
    sqlx::query_as::<_, Sport>(r#"SELECT * FROM sports WHERE id = $1"#)
        .bind(id)
        .fetch_one(pool)
        .await
}

pub async fn get_sport_by_code(pool: &PgPool, code: &str) -> Result<Sport, sqlx::Error> {
    sqlx::query_as::<_, Sport>(r#"SELECT * FROM sports WHERE code = $1"#)
        .bind(code)
        .fetch_one(pool)
        .await
}

// Region queries. The type column is aliased because `type` is not a legal
// Rust field name.
pub async fn get_all_regions(pool: &PgPool) -> Result<Vec<Region>, sqlx::Error> {
    sqlx::query_as::<_, Region>(
        r#"SELECT code, name, type AS region_type, parent_code FROM regions ORDER BY code"#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_prefectures(pool: &PgPool) -> Result<Vec<Region>, sqlx::Error> {
    sqlx::query_as::<_, Region>(
        r#"SELECT code, name, type AS region_type, parent_code
           FROM regions
           WHERE type = 'prefecture'
           ORDER BY code"#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_municipalities_by_prefecture(
    pool: &PgPool,
    prefecture_code: &str,
) -> Result<Vec<Region>, sqlx::Error> {
    sqlx::query_as::<_, Region>(
        r#"SELECT code, name, type AS region_type, parent_code
           FROM regions
           WHERE type = 'municipality' AND parent_code = $1
           ORDER BY code"#,
    )
    .bind(prefecture_code)
    .fetch_all(pool)
    .await
}

pub async fn get_region_by_code(pool: &PgPool, code: &str) -> Result<Region, sqlx::Error> {
    sqlx::query_as::<_, Region>(
        r#"SELECT code, name, type AS region_type, parent_code FROM regions WHERE code = $1"#,
    )
    .bind(code)
    .fetch_one(pool)
    .await
}

pub async fn get_region_hierarchy(pool: &PgPool) -> Result<Vec<RegionHierarchyRow>, sqlx::Error> {
    sqlx::query_as::<_, RegionHierarchyRow>(
        r#"SELECT r.code, r.name, r.type AS region_type, r.parent_code, p.name AS parent_name
           FROM regions r
           LEFT JOIN regions p ON r.parent_code = p.code
           ORDER BY r.code"#,
    )
    .fetch_all(pool)
    .await
}
