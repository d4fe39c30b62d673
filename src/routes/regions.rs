use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{ApiResponse, Region, RegionsPayload};
use crate::state::AppState;

// Query parameters for listing regions
#[derive(Debug, Default, Deserialize)]
pub struct ListRegionsQuery {
    #[serde(default, rename = "type")]
    region_type: Option<String>,
    #[serde(default)]
    prefecture: Option<String>,
    #[serde(default)]
    hierarchy: Option<String>,
}

/// Which region query to run. Exactly one wins, in fixed priority order:
/// hierarchy, then type=prefecture, then a non-empty prefecture code.
#[derive(Debug, PartialEq, Eq)]
enum RegionFilter {
    Hierarchy,
    Prefectures,
    Municipalities(String),
    All,
}

impl RegionFilter {
    fn from_query(params: &ListRegionsQuery) -> Self {
        if params.hierarchy.as_deref() == Some("true") {
            return RegionFilter::Hierarchy;
        }
        if params.region_type.as_deref() == Some("prefecture") {
            return RegionFilter::Prefectures;
        }
        match params.prefecture.as_deref() {
            Some(code) if !code.is_empty() => RegionFilter::Municipalities(code.to_string()),
            _ => RegionFilter::All,
        }
    }
}

// GET /api/v1/regions - List regions; see RegionFilter for param precedence
pub async fn get_regions(
    State(state): State<AppState>,
    Query(params): Query<ListRegionsQuery>,
) -> Result<Json<ApiResponse<RegionsPayload>>, ApiError> {
    let result = match RegionFilter::from_query(&params) {
        RegionFilter::Hierarchy => state
            .regions
            .get_region_hierarchy()
            .await
            .map(RegionsPayload::Hierarchy),
        RegionFilter::Prefectures => state
            .regions
            .get_prefectures()
            .await
            .map(RegionsPayload::Flat),
        RegionFilter::Municipalities(code) => state
            .regions
            .get_municipalities_by_prefecture(&code)
            .await
            .map(RegionsPayload::Flat),
        RegionFilter::All => state
            .regions
            .get_all_regions()
            .await
            .map(RegionsPayload::Flat),
    };
    let payload = result.map_err(|_| ApiError::Internal)?;

    Ok(Json(ApiResponse::new(payload)))
}

// GET /api/v1/regions/:code - Get region by JIS code
pub async fn get_region_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Region>>, ApiError> {
    let region = state
        .regions
        .get_region_by_code(&code)
        .await
        .map_err(|_| ApiError::NotFound)?;

    Ok(Json(ApiResponse::new(region)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        region_type: Option<&str>,
        prefecture: Option<&str>,
        hierarchy: Option<&str>,
    ) -> ListRegionsQuery {
        ListRegionsQuery {
            region_type: region_type.map(String::from),
            prefecture: prefecture.map(String::from),
            hierarchy: hierarchy.map(String::from),
        }
    }

    #[test]
    fn hierarchy_wins_over_everything() {
        let params = query(Some("prefecture"), Some("13"), Some("true"));
        assert_eq!(RegionFilter::from_query(&params), RegionFilter::Hierarchy);
    }

    #[test]
    fn hierarchy_alone_selects_hierarchy() {
        let params = query(None, None, Some("true"));
        assert_eq!(RegionFilter::from_query(&params), RegionFilter::Hierarchy);
    }

    #[test]
    fn hierarchy_false_is_ignored() {
        let params = query(None, None, Some("false"));
        assert_eq!(RegionFilter::from_query(&params), RegionFilter::All);
    }

    #[test]
    fn type_prefecture_beats_prefecture_code() {
        let params = query(Some("prefecture"), Some("13"), None);
        assert_eq!(RegionFilter::from_query(&params), RegionFilter::Prefectures);
    }

    #[test]
    fn other_type_values_fall_through() {
        let params = query(Some("municipality"), None, None);
        assert_eq!(RegionFilter::from_query(&params), RegionFilter::All);
    }

    #[test]
    fn prefecture_code_selects_municipalities() {
        let params = query(None, Some("13"), None);
        assert_eq!(
            RegionFilter::from_query(&params),
            RegionFilter::Municipalities("13".to_string())
        );
    }

    #[test]
    fn empty_prefecture_code_is_ignored() {
        let params = query(None, Some(""), None);
        assert_eq!(RegionFilter::from_query(&params), RegionFilter::All);
    }

    #[test]
    fn no_params_selects_all() {
        let params = query(None, None, None);
        assert_eq!(RegionFilter::from_query(&params), RegionFilter::All);
    }
}
