//! 인식 서비스 전송 클라이언트.
//!
//! 파일 소스는 multipart로 파일 라우트에, URL 소스는 JSON으로 URL
//! 라우트에 제출한다 (URL 위임 설계 — 바이트는 서버가 가져온다).
//! 연결 실패, 비 2xx, 본문 파싱 실패는 모두 `CoreError::Transport`로
//! 수렴하되 서버의 `error` 메시지를 보존한다.

use std::time::Duration;
use textlens_api_contracts::{
    ErrorResponse, ExtractTextResponse, UrlExtractRequest, EXTRACT_TEXT_FROM_URL_PATH,
    EXTRACT_TEXT_PATH, MULTIPART_IMAGE_FIELD,
};
use textlens_core::config::ClientConfig;
use textlens_core::error::CoreError;
use textlens_core::models::source::ImageSource;
use tracing::debug;

/// 인식 서비스 HTTP 클라이언트
pub struct RecognitionClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecognitionClient {
    /// 설정에서 클라이언트 생성
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        Self::with_base_url(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// base URL과 타임아웃으로 클라이언트 생성
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Internal(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 소스 종류에 맞는 라우트로 인식 요청을 1건 발행한다
    pub async fn extract(&self, source: &ImageSource) -> Result<String, CoreError> {
        match source {
            ImageSource::File {
                bytes,
                filename,
                mime_type,
            } => self.extract_from_file(bytes.clone(), filename, mime_type).await,
            ImageSource::RemoteUrl(url) => self.extract_from_url(url).await,
        }
    }

    /// 파일 바이트를 multipart로 파일 라우트에 제출
    pub async fn extract_from_file(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        mime_type: &str,
    ) -> Result<String, CoreError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_type)
            .map_err(|e| CoreError::Transport(format!("잘못된 MIME 타입 {mime_type}: {e}")))?;
        let form = reqwest::multipart::Form::new().part(MULTIPART_IMAGE_FIELD, part);

        debug!("파일 제출: {}{}", self.base_url, EXTRACT_TEXT_PATH);
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, EXTRACT_TEXT_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| CoreError::Transport(format!("{e}")))?;

        Self::read_extracted_text(resp).await
    }

    /// URL 문자열을 JSON으로 URL 라우트에 제출
    pub async fn extract_from_url(&self, image_url: &str) -> Result<String, CoreError> {
        debug!("URL 제출: {}{}", self.base_url, EXTRACT_TEXT_FROM_URL_PATH);
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, EXTRACT_TEXT_FROM_URL_PATH))
            .json(&UrlExtractRequest::new(image_url))
            .send()
            .await
            .map_err(|e| CoreError::Transport(format!("{e}")))?;

        Self::read_extracted_text(resp).await
    }

    /// 응답을 추출 텍스트 또는 `Transport` 에러로 해석
    async fn read_extracted_text(resp: reqwest::Response) -> Result<String, CoreError> {
        let status = resp.status();

        if status.is_success() {
            let body: ExtractTextResponse = resp
                .json()
                .await
                .map_err(|e| CoreError::Transport(format!("응답 본문 파싱 실패: {e}")))?;
            return Ok(body.extracted_text);
        }

        // 비 2xx — 서버의 error 메시지를 보존해 사용자 메시지에 싣는다
        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|b| b.error)
            .unwrap_or(text);

        Err(CoreError::Transport(format!("HTTP {status}: {message}")))
    }
}
