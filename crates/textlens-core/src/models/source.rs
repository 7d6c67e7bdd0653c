//! 이미지 소스 모델.
//!
//! 파일 업로드와 원격 URL은 하나의 tagged enum으로 표현한다.
//! 세션은 `Option<ImageSource>` 슬롯 하나만 가지므로, 한쪽을 선택하면
//! 다른 쪽은 구조적으로 비워진다 — 상호 배타가 타입의 성질이 된다.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use serde::{Deserialize, Serialize};

/// 획득된 이미지 소스
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageSource {
    /// 로컬 파일에서 읽은 이미지 바이트
    File {
        /// 원본 이미지 바이트
        bytes: Vec<u8>,
        /// 파일 이름 (multipart 파트 이름에 사용)
        filename: String,
        /// MIME 타입 (예: "image/png")
        mime_type: String,
    },
    /// 원격 이미지 URL — 바이트는 서버가 가져온다
    RemoteUrl(String),
}

impl ImageSource {
    /// 파일 소스인지 여부
    pub fn is_file(&self) -> bool {
        matches!(self, ImageSource::File { .. })
    }

    /// URL 소스인지 여부
    pub fn is_remote_url(&self) -> bool {
        matches!(self, ImageSource::RemoteUrl(_))
    }

    /// 표시용 미리보기 표현 생성.
    ///
    /// 파일은 base64 data URL로, 원격 URL은 문자열 그대로.
    /// 프레젠테이션 계층이 추가 디코딩 없이 바로 사용할 수 있다.
    pub fn preview(&self) -> PreviewPayload {
        match self {
            ImageSource::File {
                bytes, mime_type, ..
            } => PreviewPayload {
                uri: format!("data:{};base64,{}", mime_type, B64.encode(bytes)),
            },
            ImageSource::RemoteUrl(url) => PreviewPayload { uri: url.clone() },
        }
    }
}

/// 미리보기 페이로드 — 그대로 표시 가능한 URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewPayload {
    /// data URL 또는 원격 URL
    pub uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_preview_is_data_url() {
        let source = ImageSource::File {
            bytes: vec![1, 2, 3],
            filename: "a.png".to_string(),
            mime_type: "image/png".to_string(),
        };
        let preview = source.preview();
        assert!(preview.uri.starts_with("data:image/png;base64,"));
        assert!(preview.uri.ends_with(&B64.encode([1u8, 2, 3])));
    }

    #[test]
    fn url_preview_is_the_url_itself() {
        let source = ImageSource::RemoteUrl("https://example.com/x.jpg".to_string());
        assert_eq!(source.preview().uri, "https://example.com/x.jpg");
    }

    #[test]
    fn variant_predicates() {
        let url = ImageSource::RemoteUrl("https://example.com/x.jpg".to_string());
        assert!(url.is_remote_url());
        assert!(!url.is_file());
    }
}
