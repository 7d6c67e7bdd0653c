//! API 핸들러 모듈.

pub mod extract;
