//! 인식 엔드포인트 핸들러.

use axum::extract::{Multipart, State};
use axum::Json;
use textlens_api_contracts::{ExtractTextResponse, UrlExtractRequest, MULTIPART_IMAGE_FIELD};
use tracing::{error, info};

use crate::error::ApiError;
use crate::AppState;

/// `POST /extract-text` — multipart `image` 필드의 바이트를 인식한다.
pub async fn extract_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractTextResponse>, ApiError> {
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("multipart 파싱 실패: {e}");
        ApiError::MissingImage
    })? {
        if field.name() == Some(MULTIPART_IMAGE_FIELD) {
            let bytes = field.bytes().await.map_err(|e| {
                error!("multipart 필드 읽기 실패: {e}");
                ApiError::MissingImage
            })?;
            image = Some(bytes.to_vec());
        }
    }

    let Some(bytes) = image else {
        return Err(ApiError::MissingImage);
    };

    info!("파일 인식 요청: {} bytes", bytes.len());

    let text = state.recognizer.recognize(&bytes).await.map_err(|e| {
        error!("이미지 인식 실패: {e}");
        ApiError::Recognition
    })?;

    Ok(Json(ExtractTextResponse {
        extracted_text: text,
    }))
}

/// `POST /extract-text-from-url` — URL의 바이트를 서버가 가져와 인식한다.
///
/// 가져오기 실패와 인식 실패는 하나의 와이어 메시지로 수렴한다.
pub async fn extract_text_from_url(
    State(state): State<AppState>,
    Json(request): Json<UrlExtractRequest>,
) -> Result<Json<ExtractTextResponse>, ApiError> {
    let url = request
        .image_url
        .filter(|u| !u.trim().is_empty())
        .ok_or(ApiError::MissingUrl)?;

    info!("URL 인식 요청: {url}");

    let bytes = state.fetcher.fetch(&url).await.map_err(|e| {
        error!("원격 이미지 가져오기 실패: {e}");
        ApiError::UrlProcessing
    })?;

    let text = state.recognizer.recognize(&bytes).await.map_err(|e| {
        error!("URL 이미지 인식 실패: {e}");
        ApiError::UrlProcessing
    })?;

    Ok(Json(ExtractTextResponse {
        extracted_text: text,
    }))
}
