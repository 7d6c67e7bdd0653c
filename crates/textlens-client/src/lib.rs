//! # textlens-client
//!
//! 이미지 → 텍스트 제출 워크플로의 클라이언트 측.
//!
//! - [`session`] — 획득 세션: `ImageSource` 슬롯, 제출 상태 머신, 리셋
//! - [`submit`] — 전송: multipart 파일 제출, JSON URL 제출
//! - [`progress`] — 장식용 진행 카운트다운 (실측 ETA 아님)
//! - [`present`] — 결과 프레젠테이션: 렌더링, 클립보드 복사

pub mod present;
pub mod progress;
pub mod session;
pub mod submit;
