//! # textlens-core
//!
//! TEXTLENS 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 서버/클라이언트 양쪽 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — 어댑터 크레이트가 구현하는 포트 인터페이스
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::source::ImageSource;
    use crate::models::submission::SubmissionState;

    #[test]
    fn image_source_serde_roundtrip() {
        let source = ImageSource::File {
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
            filename: "receipt.png".to_string(),
            mime_type: "image/png".to_string(),
        };

        let json = serde_json::to_string(&source).unwrap();
        let deserialized: ImageSource = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, source);
        assert!(deserialized.is_file());
    }

    #[test]
    fn submission_state_default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.server.port, 5000);
        assert!(!config.server.allow_external);
        assert_eq!(config.client.base_url, "http://localhost:5000");
        assert_eq!(config.ocr.language, "eng");
        assert_eq!(config.fetch.max_image_bytes, 20 * 1024 * 1024);
    }
}
