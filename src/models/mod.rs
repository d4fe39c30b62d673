use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sport reference row; seeded externally, never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sport {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub is_active: bool,
}

/// Region reference row keyed by JIS code. Prefectures are roots,
/// municipalities point at their prefecture via `parent_code`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Region {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub region_type: String,
    pub parent_code: Option<String>,
}

/// Region joined with its parent's name; a read projection, not a table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RegionHierarchyRow {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub region_type: String,
    pub parent_code: Option<String>,
    pub parent_name: Option<String>,
}

/// Success side of the response envelope. Error responses are a separate
/// type, so a body can never carry both `data` and `error`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    pub fn with_meta(data: T, meta: Meta) -> Self {
        Self {
            data,
            meta: Some(meta),
        }
    }
}

/// Pagination-shaped metadata; no endpoint populates it yet.
#[derive(Debug, Default, Serialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

/// The two shapes the region collection endpoint can return, depending on
/// the selected filter.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RegionsPayload {
    Flat(Vec<Region>),
    Hierarchy(Vec<RegionHierarchyRow>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_is_omitted_when_absent() {
        let body = serde_json::to_value(ApiResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
        assert!(body.get("meta").is_none());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn meta_fields_serialize_only_when_set() {
        let response = ApiResponse::with_meta(
            Vec::<i64>::new(),
            Meta {
                total: Some(47),
                ..Meta::default()
            },
        );
        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["meta"]["total"], 47);
        assert!(body["meta"].get("limit").is_none());
    }

    #[test]
    fn region_type_serializes_as_type() {
        let region = Region {
            code: "13".to_string(),
            name: "東京都".to_string(),
            region_type: "prefecture".to_string(),
            parent_code: None,
        };
        let body = serde_json::to_value(region).unwrap();
        assert_eq!(body["type"], "prefecture");
        assert!(body.get("region_type").is_none());
    }

    #[test]
    fn regions_payload_serializes_untagged() {
        let flat = RegionsPayload::Flat(vec![]);
        assert_eq!(serde_json::to_value(flat).unwrap(), serde_json::json!([]));

        let hierarchy = RegionsPayload::Hierarchy(vec![RegionHierarchyRow {
            code: "13101".to_string(),
            name: "千代田区".to_string(),
            region_type: "municipality".to_string(),
            parent_code: Some("13".to_string()),
            parent_name: Some("東京都".to_string()),
        }]);
        let body = serde_json::to_value(hierarchy).unwrap();
        assert_eq!(body[0]["parent_name"], "東京都");
    }
}
