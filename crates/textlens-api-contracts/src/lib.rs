//! # textlens-api-contracts
//!
//! 인식 서비스의 HTTP 전송 계약.
//! 서버와 클라이언트가 같은 타입을 공유하여 와이어 포맷 불일치를 막는다.
//! 필드 이름은 camelCase 와이어 포맷(`extractedText`, `imageUrl`)을 따른다.

use serde::{Deserialize, Serialize};

/// 파일 기반 인식 라우트 경로
pub const EXTRACT_TEXT_PATH: &str = "/extract-text";

/// URL 기반 인식 라우트 경로
pub const EXTRACT_TEXT_FROM_URL_PATH: &str = "/extract-text-from-url";

/// multipart 이미지 필드 이름
pub const MULTIPART_IMAGE_FIELD: &str = "image";

/// 인식 성공 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTextResponse {
    /// 인식된 텍스트 (단일 문자열)
    pub extracted_text: String,
}

/// URL 기반 인식 요청 본문
///
/// `image_url`이 None이거나 비어 있으면 서버가 400으로 거부한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlExtractRequest {
    /// 서버가 가져올 이미지 URL
    #[serde(default)]
    pub image_url: Option<String>,
}

impl UrlExtractRequest {
    /// URL을 담은 요청 생성
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
        }
    }
}

/// 실패 응답 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 사용자 표시용 에러 메시지
    pub error: String,
}
