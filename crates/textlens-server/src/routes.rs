//! API 라우트 정의.

use axum::routing::post;
use axum::Router;
use textlens_api_contracts::{EXTRACT_TEXT_FROM_URL_PATH, EXTRACT_TEXT_PATH};

use crate::handlers;
use crate::AppState;

/// API 라우트 생성.
///
/// 두 라우트 모두 본문을 싣는 POST다 — 조회형 메서드에 본문을 싣는
/// 변형은 재현하지 않는다.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // 파일 업로드 인식
        .route(EXTRACT_TEXT_PATH, post(handlers::extract::extract_text))
        // URL 위임 인식 (바이트는 서버가 가져옴)
        .route(
            EXTRACT_TEXT_FROM_URL_PATH,
            post(handlers::extract::extract_text_from_url),
        )
}
