//! 클립보드 포트.
//!
//! 결과 프레젠테이션의 복사 기능이 사용하는 좁은 인터페이스.
//! 테스트에서는 기록용 스텁으로 대체된다.

use crate::error::CoreError;

/// 클립보드 싱크 — 텍스트 쓰기만 지원
///
/// 구현체: `ArboardClipboard` (textlens-client)
pub trait ClipboardSink {
    /// 텍스트를 클립보드에 쓴다
    fn set_text(&mut self, text: &str) -> Result<(), CoreError>;
}
