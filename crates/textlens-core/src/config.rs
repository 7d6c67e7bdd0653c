//! 애플리케이션 설정 구조체.
//!
//! 서버 바인드, 클라이언트 base URL, OCR 엔진, 원격 이미지 가져오기 설정을
//! 정의한다. `config_manager`를 통해 JSON 파일에서 로드/저장된다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 인식 서비스(HTTP 서버) 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 제출 클라이언트 설정
    #[serde(default)]
    pub client: ClientConfig,
    /// OCR 엔진 설정
    #[serde(default)]
    pub ocr: OcrConfig,
    /// 서버 측 원격 이미지 가져오기 설정
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            ocr: OcrConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

/// 인식 서비스 바인드 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 수신 포트
    #[serde(default = "default_port")]
    pub port: u16,
    /// 외부 접근 허용 (false면 127.0.0.1만 바인드)
    #[serde(default)]
    pub allow_external: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            allow_external: false,
        }
    }
}

fn default_port() -> u16 {
    5000
}

/// 제출 클라이언트 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// 인식 엔드포인트가 호스팅되는 base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_client_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_client_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_client_timeout_secs() -> u64 {
    60
}

/// OCR 엔진 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// 인식 언어 (Tesseract 언어 코드)
    #[serde(default = "default_ocr_language")]
    pub language: String,
    /// Tesseract 데이터 경로 (None이면 시스템 기본값)
    #[serde(default)]
    pub tessdata_path: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_ocr_language(),
            tessdata_path: None,
        }
    }
}

fn default_ocr_language() -> String {
    "eng".to_string()
}

/// 서버 측 원격 이미지 가져오기 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// 가져오기 타임아웃 (초)
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
    /// 허용 최대 이미지 크기 (bytes) — 임의 URL을 버퍼링하기 전 상한
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout_secs(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_max_image_bytes() -> u64 {
    20 * 1024 * 1024
}
