//! 획득 세션.
//!
//! 세션은 `Option<ImageSource>` 슬롯 하나, 제출 상태 머신,
//! 진행 추정치 채널을 소유한다. 파일과 URL 중 하나를 선택하면 다른
//! 쪽은 구조적으로 비워진다. 모든 상태는 세션 스코프이며 `reset()`이
//! 전부 초기값으로 되돌린다 — 영속화는 없다.

use textlens_core::error::CoreError;
use textlens_core::models::source::{ImageSource, PreviewPayload};
use textlens_core::models::submission::SubmissionState;
use tokio::sync::watch;
use tracing::{error, info};

use crate::progress::{ProgressCountdown, PROGRESS_ESTIMATE_SECS};
use crate::submit::RecognitionClient;

/// 이미지 획득/제출 세션
pub struct ExtractionSession {
    source: Option<ImageSource>,
    state: SubmissionState,
    progress_tx: watch::Sender<u32>,
    progress_rx: watch::Receiver<u32>,
}

impl ExtractionSession {
    /// 빈 세션 생성
    pub fn new() -> Self {
        let (progress_tx, progress_rx) = watch::channel(0);
        Self {
            source: None,
            state: SubmissionState::Idle,
            progress_tx,
            progress_rx,
        }
    }

    /// 파일 소스 선택 — URL 소스가 있었다면 대체된다
    pub fn select_file(
        &mut self,
        bytes: Vec<u8>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
    ) {
        self.source = Some(ImageSource::File {
            bytes,
            filename: filename.into(),
            mime_type: mime_type.into(),
        });
    }

    /// URL 소스 선택 — 파일 소스가 있었다면 대체된다
    pub fn select_url(&mut self, url: impl Into<String>) {
        self.source = Some(ImageSource::RemoteUrl(url.into()));
    }

    /// 현재 소스
    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    /// 현재 소스의 미리보기 표현
    pub fn preview(&self) -> Option<PreviewPayload> {
        self.source.as_ref().map(ImageSource::preview)
    }

    /// 현재 제출 상태
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// 현재 진행 추정치 (초). InFlight 외에는 항상 0.
    pub fn progress(&self) -> u32 {
        *self.progress_rx.borrow()
    }

    /// 진행 추정치 구독 채널.
    ///
    /// 제출 전에 받아 두면 제출 중 외부에서 카운트다운을 관찰할 수 있다.
    pub fn progress_watch(&self) -> watch::Receiver<u32> {
        self.progress_rx.clone()
    }

    /// 모든 상태를 초기값으로 — 어떤 상태에서든 허용된다
    pub fn reset(&mut self) {
        self.source = None;
        self.state = SubmissionState::Idle;
        let _ = self.progress_tx.send(0);
        info!("세션 리셋");
    }

    /// 선택된 소스를 제출하고 정착 상태를 돌려준다.
    ///
    /// 전제 조건 위반은 상태를 건드리지 않고 에러로 반환된다:
    /// - 소스 미선택 → [`CoreError::EmptyInput`] (네트워크 호출 없음)
    /// - 이미 InFlight → [`CoreError::SubmissionInFlight`]
    ///
    /// 그 외의 모든 경로는 Succeeded 또는 Failed로 정착한다. 실패 원인은
    /// 로그로 남기고 사용자에게는 범주 메시지만 보여준다.
    pub async fn submit(
        &mut self,
        client: &RecognitionClient,
    ) -> Result<&SubmissionState, CoreError> {
        if self.state.is_in_flight() {
            return Err(CoreError::SubmissionInFlight);
        }
        if self.source.is_none() {
            return Err(CoreError::EmptyInput);
        }

        self.state = SubmissionState::InFlight;
        // 스코프 카운트다운: 이 함수를 어떤 경로로 벗어나든 drop이
        // 태스크를 끊고 추정치를 0으로 되돌린다
        let countdown = ProgressCountdown::start(self.progress_tx.clone(), PROGRESS_ESTIMATE_SECS);

        let result = match &self.source {
            Some(source) => client.extract(source).await,
            None => Err(CoreError::EmptyInput),
        };

        // InFlight를 벗어나는 전이가 완성되기 전에 타이머를 철거한다
        drop(countdown);

        self.state = match result {
            Ok(text) => {
                info!("인식 성공: {}자", text.chars().count());
                SubmissionState::Succeeded { text }
            }
            Err(e) => {
                error!("제출 실패: {e}");
                SubmissionState::Failed {
                    message: e.user_message(),
                }
            }
        };

        Ok(&self.state)
    }
}

impl Default for ExtractionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base_url: &str) -> RecognitionClient {
        RecognitionClient::with_base_url(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn selecting_one_source_clears_the_other() {
        let mut session = ExtractionSession::new();

        session.select_file(vec![1, 2], "a.png", "image/png");
        session.select_url("https://example.com/x.jpg");
        assert!(session.source().unwrap().is_remote_url());

        session.select_file(vec![3], "b.png", "image/png");
        assert!(session.source().unwrap().is_file());

        // 어떤 순서로 호출해도 소스는 정확히 하나
        session.select_url("https://example.com/y.jpg");
        session.select_url("https://example.com/z.jpg");
        session.select_file(vec![4], "c.png", "image/png");
        assert!(session.source().unwrap().is_file());
    }

    #[test]
    fn preview_follows_selected_source() {
        let mut session = ExtractionSession::new();
        assert!(session.preview().is_none());

        session.select_url("https://example.com/x.jpg");
        assert_eq!(session.preview().unwrap().uri, "https://example.com/x.jpg");

        session.select_file(vec![1], "a.png", "image/png");
        assert!(session.preview().unwrap().uri.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn submit_without_source_is_empty_input_and_no_network() {
        let mut server = mockito::Server::new_async().await;
        let file_mock = server
            .mock("POST", "/extract-text")
            .expect(0)
            .create_async()
            .await;
        let url_mock = server
            .mock("POST", "/extract-text-from-url")
            .expect(0)
            .create_async()
            .await;

        let mut session = ExtractionSession::new();
        let err = session.submit(&client(&server.url())).await.unwrap_err();

        assert!(matches!(err, CoreError::EmptyInput));
        assert_eq!(session.state(), &SubmissionState::Idle);
        file_mock.assert_async().await;
        url_mock.assert_async().await;
    }

    #[tokio::test]
    async fn submit_while_in_flight_is_rejected_without_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/extract-text")
            .expect(0)
            .create_async()
            .await;

        let mut session = ExtractionSession::new();
        session.select_file(vec![1], "a.png", "image/png");
        session.state = SubmissionState::InFlight;

        let err = session.submit(&client(&server.url())).await.unwrap_err();
        assert!(matches!(err, CoreError::SubmissionInFlight));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn successful_submit_settles_with_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/extract-text")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"extractedText":"hello"}"#)
            .create_async()
            .await;

        let mut session = ExtractionSession::new();
        session.select_file(vec![1, 2, 3], "scan.png", "image/png");

        let state = session.submit(&client(&server.url())).await.unwrap();
        assert_eq!(
            state,
            &SubmissionState::Succeeded {
                text: "hello".to_string()
            }
        );
        // 정착 직후 진행 추정치는 정확히 0
        assert_eq!(session.progress(), 0);
    }

    #[tokio::test]
    async fn failed_submit_settles_with_message_from_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/extract-text")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"x"}"#)
            .create_async()
            .await;

        let mut session = ExtractionSession::new();
        session.select_file(vec![1], "a.png", "image/png");

        let state = session.submit(&client(&server.url())).await.unwrap();
        match state {
            SubmissionState::Failed { message } => {
                assert!(message.contains('x'), "{message}")
            }
            other => panic!("Failed가 아님: {other:?}"),
        }
        assert_eq!(session.progress(), 0);
    }

    #[tokio::test]
    async fn url_submit_uses_url_route() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/extract-text-from-url")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "imageUrl": "https://example.com/x.png"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"extractedText":"url text"}"#)
            .create_async()
            .await;

        let mut session = ExtractionSession::new();
        session.select_url("https://example.com/x.png");

        let state = session.submit(&client(&server.url())).await.unwrap();
        assert_eq!(state.extracted_text(), Some("url text"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn reset_from_every_state_returns_to_initial() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/extract-text")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"extractedText":"hello"}"#)
            .create_async()
            .await;

        // Idle에서
        let mut session = ExtractionSession::new();
        session.select_file(vec![1], "a.png", "image/png");
        session.reset();
        assert!(session.source().is_none());
        assert_eq!(session.state(), &SubmissionState::Idle);
        assert_eq!(session.progress(), 0);

        // Succeeded에서
        session.select_file(vec![1], "a.png", "image/png");
        session.submit(&client(&server.url())).await.unwrap();
        assert!(session.state().is_settled());
        session.reset();
        assert!(session.source().is_none());
        assert_eq!(session.state(), &SubmissionState::Idle);
        assert_eq!(session.progress(), 0);

        // InFlight에서 (끼어든 리셋)
        session.state = SubmissionState::InFlight;
        session.reset();
        assert_eq!(session.state(), &SubmissionState::Idle);
        assert_eq!(session.progress(), 0);
    }
}
