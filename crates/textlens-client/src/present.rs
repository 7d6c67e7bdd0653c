//! 결과 프레젠테이션.
//!
//! 제출 상태를 표시용 텍스트로 렌더링하고, 추출 텍스트의 클립보드
//! 복사를 제공한다. 복사는 성공/실패 모두 사용자에게 알릴 수 있도록
//! 결과를 돌려준다.

use textlens_core::error::CoreError;
use textlens_core::models::submission::SubmissionState;
use textlens_core::ports::clipboard::ClipboardSink;
use tracing::warn;

/// 클립보드 복사 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// 텍스트가 클립보드에 복사됨
    Copied,
    /// 빈 텍스트 — 클립보드 백엔드를 호출하지 않음
    NothingToCopy,
}

/// 추출 텍스트를 클립보드에 복사.
///
/// 빈 텍스트는 no-op이며 백엔드를 호출하지 않는다. 실패는 에러로
/// 돌려주어 호출자가 사용자에게 알릴 수 있게 한다.
pub fn copy_to_clipboard(
    sink: &mut dyn ClipboardSink,
    text: &str,
) -> Result<CopyOutcome, CoreError> {
    if text.is_empty() {
        return Ok(CopyOutcome::NothingToCopy);
    }
    sink.set_text(text)?;
    Ok(CopyOutcome::Copied)
}

/// 제출 상태의 표시용 렌더링.
///
/// Succeeded는 추출 텍스트를, Failed는 실행 가능한 안내가 담긴
/// 메시지를 보여준다. 리셋은 어느 상태에서도 가능함을 함께 안내한다.
pub fn render_state(state: &SubmissionState) -> String {
    match state {
        SubmissionState::Idle => "이미지를 선택한 뒤 제출하세요.".to_string(),
        SubmissionState::InFlight => "처리 중...".to_string(),
        SubmissionState::Succeeded { text } => {
            format!("추출된 텍스트:\n{text}")
        }
        SubmissionState::Failed { message } => {
            format!("{message}\n리셋 후 다시 시도할 수 있습니다.")
        }
    }
}

/// arboard 기반 클립보드 어댑터 — `ClipboardSink` 포트 구현
pub struct ArboardClipboard {
    inner: arboard::Clipboard,
}

impl ArboardClipboard {
    /// 시스템 클립보드 핸들 획득
    pub fn new() -> Result<Self, CoreError> {
        let inner = arboard::Clipboard::new().map_err(|e| {
            warn!("클립보드 초기화 실패: {e}");
            CoreError::Internal(format!("클립보드 초기화 실패: {e}"))
        })?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CoreError> {
        self.inner
            .set_text(text)
            .map_err(|e| CoreError::Internal(format!("클립보드 쓰기 실패: {e}")))
    }
}
