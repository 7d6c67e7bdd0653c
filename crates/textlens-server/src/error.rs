//! API 에러 처리.
//!
//! 내부 원인이 무엇이든 와이어에는 고정된 메시지 네 가지만 나간다.
//! 원인은 핸들러에서 tracing으로 남긴 뒤 여기서 수렴된다.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use textlens_api_contracts::ErrorResponse;
use thiserror::Error;

/// API 에러 — Display 문자열이 곧 와이어 메시지다
#[derive(Debug, Error)]
pub enum ApiError {
    /// multipart 본문에 `image` 필드 없음 (400)
    #[error("No image uploaded.")]
    MissingImage,

    /// 요청 본문에 이미지 URL 없음 (400)
    #[error("No image URL provided.")]
    MissingUrl,

    /// 파일 라우트에서 인식 실패 (500)
    #[error("Failed to process the image.")]
    Recognition,

    /// URL 라우트에서 가져오기 또는 인식 실패 (500)
    #[error("Failed to process the image from URL.")]
    UrlProcessing,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingImage | ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            ApiError::Recognition | ApiError::UrlProcessing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_messages_are_exact() {
        assert_eq!(ApiError::MissingImage.to_string(), "No image uploaded.");
        assert_eq!(ApiError::MissingUrl.to_string(), "No image URL provided.");
        assert_eq!(
            ApiError::Recognition.to_string(),
            "Failed to process the image."
        );
        assert_eq!(
            ApiError::UrlProcessing.to_string(),
            "Failed to process the image from URL."
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::MissingImage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Recognition.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::UrlProcessing.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
