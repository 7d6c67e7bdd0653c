//! 제출 상태 머신.

use serde::{Deserialize, Serialize};

/// 제출 상태.
///
/// Idle → InFlight → Succeeded | Failed. `reset()`은 어느 상태에서든
/// Idle로 되돌린다. 모든 코드 경로는 Succeeded 또는 Failed에 도달해야
/// 하며 InFlight에 머무르지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionState {
    /// 제출 전 초기 상태
    #[default]
    Idle,
    /// 요청이 발행되어 응답 대기 중
    InFlight,
    /// 인식 성공 — 추출된 텍스트 보유
    Succeeded {
        /// 추출된 텍스트
        text: String,
    },
    /// 인식 실패 — 사용자 표시용 메시지 보유
    Failed {
        /// 실패 범주를 이름 붙인 메시지
        message: String,
    },
}

impl SubmissionState {
    /// 요청이 진행 중인지 여부
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }

    /// 성공/실패로 정착했는지 여부
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded { .. } | SubmissionState::Failed { .. }
        )
    }

    /// 성공 시 추출 텍스트 반환
    pub fn extracted_text(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded { text } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(SubmissionState::InFlight.is_in_flight());
        assert!(!SubmissionState::Idle.is_in_flight());
        assert!(SubmissionState::Succeeded {
            text: "hello".to_string()
        }
        .is_settled());
        assert!(SubmissionState::Failed {
            message: "x".to_string()
        }
        .is_settled());
        assert!(!SubmissionState::InFlight.is_settled());
    }

    #[test]
    fn extracted_text_only_on_success() {
        let ok = SubmissionState::Succeeded {
            text: "hello".to_string(),
        };
        assert_eq!(ok.extracted_text(), Some("hello"));
        assert_eq!(SubmissionState::Idle.extracted_text(), None);
    }

    #[test]
    fn state_serde_uses_status_tag() {
        let json = serde_json::to_string(&SubmissionState::InFlight).unwrap();
        assert!(json.contains(r#""status":"in_flight""#));
    }
}
