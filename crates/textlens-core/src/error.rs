//! TEXTLENS 핵심 에러 타입.
//!
//! 어댑터 crate는 자체 에러를 이 타입으로 수렴시키고,
//! 제출 클라이언트 경계에서 사용자 메시지 하나로 변환한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 제출 워크플로 에러 분류와 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 선택된 이미지 소스 없음 — 네트워크 호출 전에 차단된다
    #[error("입력 이미지 없음: 파일 또는 URL을 먼저 선택해야 함")]
    EmptyInput,

    /// 이미 제출이 진행 중 — 세션당 동시 제출은 1건
    #[error("제출 진행 중: 완료 전 재제출 불가")]
    SubmissionInFlight,

    /// 전송 실패 (연결 불가, 비 2xx 응답, 응답 본문 파싱 실패)
    #[error("전송 에러: {0}")]
    Transport(String),

    /// 원격 이미지 URL 접근 실패 (도달 불가 또는 비 2xx)
    #[error("원격 이미지 가져오기 실패: {0}")]
    RemoteFetch(String),

    /// OCR 엔진 실패 — 하위 분류 없이 단일 범주로 보고된다
    #[error("텍스트 인식 실패: {0}")]
    Recognition(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}

impl CoreError {
    /// 사용자에게 보여줄 한 줄 메시지.
    ///
    /// 실패 범주를 평이한 언어로 이름 붙인다. 진단용 세부 원인은
    /// 로그로만 남기고 여기에는 포함하지 않는다.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::EmptyInput => "이미지를 먼저 선택하세요 (파일 또는 URL).".to_string(),
            CoreError::SubmissionInFlight => {
                "이미 처리 중입니다. 완료될 때까지 기다려 주세요.".to_string()
            }
            CoreError::Transport(detail) => {
                format!("서버와 통신하지 못했습니다: {detail}")
            }
            CoreError::RemoteFetch(_) => {
                "이미지 URL에 접근하지 못했습니다. 주소를 확인하세요.".to_string()
            }
            CoreError::Recognition(_) => "이미지에서 텍스트를 인식하지 못했습니다.".to_string(),
            _ => "처리 중 오류가 발생했습니다.".to_string(),
        }
    }
}
