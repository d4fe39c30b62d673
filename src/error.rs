use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Every failure an endpoint can surface. The `Display` string doubles as the
/// user-facing message; causes are logged, never leaked.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("リクエストが無効です")]
    Validation(String),
    #[error("リソースが見つかりません")]
    NotFound,
    #[error("認証が必要です")]
    Unauthorized,
    #[error("アクセス権限がありません")]
    Forbidden,
    #[error("内部エラーが発生しました")]
    Internal,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::Forbidden => "FORBIDDEN",
            ApiError::Internal => "INTERNAL_ERROR",
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            ApiError::Validation(details) => Some(details.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every error response is built here, so one log line covers them all.
        tracing::error!(code = self.code(), status = %self.status(), "{}", self);

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
                details: self.details(),
            },
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_envelope() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "リソースが見つかりません");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn validation_carries_details() {
        let response = ApiError::Validation("active must be a boolean".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "リクエストが無効です");
        assert_eq!(body["error"]["details"], "active must be a boolean");
    }

    #[tokio::test]
    async fn details_omitted_unless_validation() {
        let body = body_json(ApiError::Internal.into_response()).await;
        assert!(body["error"].get("details").is_none());
    }

    #[tokio::test]
    async fn each_variant_maps_to_its_status_and_code() {
        let cases = [
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            (ApiError::Forbidden, StatusCode::FORBIDDEN, "FORBIDDEN"),
            (
                ApiError::Internal,
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
        ];

        for (error, status, code) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), status);
            assert_eq!(body_json(response).await["error"]["code"], code);
        }
    }
}
