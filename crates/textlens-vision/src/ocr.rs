//! Tesseract OCR 인식기.
//!
//! `leptess` 기반 `TextRecognizer` 포트 구현.
//! `ocr` feature flag 활성화 시에만 빌드된다.
//! 엔진은 블로킹이므로 spawn_blocking에서 실행한다.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use textlens_core::config::OcrConfig;
use textlens_core::error::CoreError;
use textlens_core::ports::recognizer::TextRecognizer;

/// OCR 에러 타입
#[derive(Debug, Error)]
pub enum OcrError {
    /// 입력 이미지 디코드 실패
    #[error("OCR 입력 디코드 실패: {0}")]
    Decode(#[source] image::ImageError),

    /// Tesseract 초기화 실패
    #[error("OCR 초기화 실패: {0}")]
    Init(String),

    /// 이미지 설정 실패
    #[error("OCR 이미지 설정 실패: {0}")]
    ImageSetup(String),

    /// 텍스트 추출 실패
    #[error("OCR 텍스트 추출 실패: {0}")]
    Extraction(String),

    /// 빈 이미지 입력
    #[error("빈 이미지: 너비 또는 높이가 0")]
    EmptyImage,

    /// 비동기 작업 실패
    #[error("OCR 비동기 작업 실패: {0}")]
    Async(String),
}

/// Tesseract 기반 텍스트 인식기 — `TextRecognizer` 포트 구현
pub struct TesseractRecognizer {
    /// Tesseract 데이터 경로 (None이면 시스템 기본값)
    tessdata_path: Option<PathBuf>,
    /// 인식 언어 코드
    language: String,
}

impl TesseractRecognizer {
    /// 새 인식기 생성
    pub fn new(tessdata_path: Option<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            tessdata_path,
            language: language.into(),
        }
    }

    /// 설정에서 인식기 생성
    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(config.tessdata_path.clone(), config.language.clone())
    }

    /// 인코딩된 이미지 바이트에서 텍스트 추출.
    ///
    /// 입력 포맷 검증을 겸해 image 크레이트로 먼저 디코드한 뒤
    /// PNG로 정규화해 엔진에 넘긴다 (leptess는 인코딩된 바이트를 받는다).
    pub async fn extract(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        let img = image::load_from_memory(image_bytes).map_err(OcrError::Decode)?;
        let (w, h) = (img.width(), img.height());

        if w == 0 || h == 0 {
            return Err(OcrError::EmptyImage);
        }

        let mut png = std::io::Cursor::new(Vec::new());
        img.write_to(&mut png, image::ImageFormat::Png)
            .map_err(|e| OcrError::ImageSetup(format!("PNG 정규화 실패: {e}")))?;
        let png_bytes = png.into_inner();

        let tessdata = self
            .tessdata_path
            .as_ref()
            .map(|p| p.to_string_lossy().to_string());
        let language = self.language.clone();

        // 별도 스레드에서 OCR 실행
        let text = tokio::task::spawn_blocking(move || {
            let tessdata_ref = tessdata.as_deref();

            let mut lt = leptess::LepTess::new(tessdata_ref, &language)
                .map_err(|e| OcrError::Init(format!("{e}")))?;

            lt.set_image_from_mem(&png_bytes)
                .map_err(|e| OcrError::ImageSetup(format!("이미지 메모리 설정 실패: {e}")))?;

            let text = lt
                .get_utf8_text()
                .map_err(|e| OcrError::Extraction(format!("{e}")))?;

            Ok::<_, OcrError>(text.trim().to_string())
        })
        .await
        .map_err(|e| OcrError::Async(format!("작업 조인 실패: {e}")))??;

        debug!("OCR 추출 완료: {}x{}, {}자", w, h, text.chars().count());
        Ok(text)
    }

    /// tessdata 경로 반환
    pub fn tessdata_path(&self) -> Option<&PathBuf> {
        self.tessdata_path.as_ref()
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image: &[u8]) -> Result<String, CoreError> {
        self.extract(image)
            .await
            .map_err(|e| CoreError::Recognition(e.to_string()))
    }

    fn engine_name(&self) -> &str {
        "tesseract"
    }
}
