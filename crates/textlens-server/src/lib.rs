//! # textlens-server
//!
//! 인식 서비스 HTTP 서버.
//! Axum 기반으로 두 인식 엔드포인트를 노출한다:
//!
//! - `POST /extract-text` — multipart 파일 업로드
//! - `POST /extract-text-from-url` — JSON으로 받은 URL을 서버가 가져옴
//!
//! 요청 간 공유 가변 상태는 없다 — 핸들러는 주입된 인식기 핸들만 공유하며
//! 각 요청은 독립적이다. 모든 오리진의 교차 출처 요청을 허용한다.

pub mod error;
pub mod fetch;
pub mod handlers;
pub mod routes;

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use textlens_core::config::{FetchConfig, ServerConfig};
use textlens_core::error::CoreError;
use textlens_core::ports::recognizer::TextRecognizer;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::fetch::RemoteImageFetcher;

/// 웹 서버 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    /// 텍스트 인식기 (외부 OCR 협력자)
    pub recognizer: Arc<dyn TextRecognizer>,
    /// 원격 이미지 가져오기
    pub fetcher: RemoteImageFetcher,
}

/// 라우터 + CORS + 요청 트레이싱으로 완성된 앱 구성.
///
/// 통합 테스트에서 스텁 인식기로 직접 띄울 수 있도록 공개한다.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::api_routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 인식 서비스 서버
pub struct WebServer {
    config: ServerConfig,
    state: AppState,
}

impl WebServer {
    /// 새 서버 생성
    pub fn new(
        recognizer: Arc<dyn TextRecognizer>,
        fetch_config: &FetchConfig,
        config: ServerConfig,
    ) -> Result<Self, CoreError> {
        let fetcher = RemoteImageFetcher::new(fetch_config)?;
        Ok(Self {
            config,
            state: AppState { recognizer, fetcher },
        })
    }

    /// 서버 실행.
    ///
    /// 설정된 포트는 공개된 base URL 계약의 일부이므로 대체 포트를
    /// 탐색하지 않는다 — 바인드 실패는 곧 에러다.
    ///
    /// # Arguments
    /// * `shutdown_rx` - 종료 신호 수신 채널
    pub async fn run(self, mut shutdown_rx: watch::Receiver<bool>) -> Result<(), std::io::Error> {
        let host = if self.config.allow_external {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let addr: SocketAddr = format!("{}:{}", host, self.config.port)
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{e}")))?;

        let listener = TcpListener::bind(addr).await?;
        info!(
            "인식 서비스 시작: http://{} (엔진: {})",
            addr,
            self.state.recognizer.engine_name()
        );

        axum::serve(listener, app(self.state))
            .with_graceful_shutdown(async move {
                loop {
                    if *shutdown_rx.borrow() {
                        info!("서버 종료 신호 수신");
                        break;
                    }
                    if shutdown_rx.changed().await.is_err() {
                        break;
                    }
                }
            })
            .await?;

        info!("인식 서비스 종료");
        Ok(())
    }

    /// 서버 URL 반환
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.config.port)
    }
}
