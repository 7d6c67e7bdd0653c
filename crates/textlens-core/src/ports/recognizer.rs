//! 텍스트 인식 포트.
//!
//! OCR 엔진을 추상화한다. 소비 계약은 의도적으로 좁다: 이미지 바이트
//! 하나가 들어가면 문자열 하나가 나오거나 단일 범주 에러로 실패한다.
//! 부분 결과, 스트리밍, 신뢰도 점수는 계약에 없다.

use async_trait::async_trait;

use crate::error::CoreError;

/// 텍스트 인식기 — 외부 OCR 엔진의 소비 인터페이스
///
/// 구현체: `TesseractRecognizer` (textlens-vision, `ocr` feature)
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// 인코딩된 이미지 바이트(PNG/JPEG 등)에서 텍스트 추출.
    ///
    /// 실패는 `CoreError::Recognition` 단일 범주로 수렴한다.
    async fn recognize(&self, image: &[u8]) -> Result<String, CoreError>;

    /// 엔진 이름 (예: "tesseract")
    fn engine_name(&self) -> &str;
}
