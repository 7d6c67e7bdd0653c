//! 원격 이미지 가져오기.
//!
//! URL 위임 설계에서 서버가 이미지 바이트를 직접 가져온다.
//! 임의 URL을 버퍼링하므로 크기 상한을 강제한다.

use std::time::Duration;
use textlens_core::config::FetchConfig;
use textlens_core::error::CoreError;
use tracing::debug;

/// 원격 이미지 페처
#[derive(Clone)]
pub struct RemoteImageFetcher {
    client: reqwest::Client,
    max_image_bytes: u64,
}

impl RemoteImageFetcher {
    /// 설정에서 페처 생성
    pub fn new(config: &FetchConfig) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::Internal(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

        Ok(Self {
            client,
            max_image_bytes: config.max_image_bytes,
        })
    }

    /// URL에서 이미지 바이트를 가져온다.
    ///
    /// 도달 불가, 비 2xx, 크기 상한 초과는 모두 `CoreError::RemoteFetch`.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, CoreError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CoreError::RemoteFetch(format!("{url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::RemoteFetch(format!("{url}: HTTP {status}")));
        }

        if let Some(len) = resp.content_length() {
            if len > self.max_image_bytes {
                return Err(CoreError::RemoteFetch(format!(
                    "{url}: {len} bytes — 상한 {} 초과",
                    self.max_image_bytes
                )));
            }
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CoreError::RemoteFetch(format!("{url}: 본문 읽기 실패: {e}")))?;

        // Content-Length 없이 스트리밍된 응답도 상한을 넘지 못한다
        if bytes.len() as u64 > self.max_image_bytes {
            return Err(CoreError::RemoteFetch(format!(
                "{url}: {} bytes — 상한 {} 초과",
                bytes.len(),
                self.max_image_bytes
            )));
        }

        debug!("원격 이미지 수신: {url}, {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}
