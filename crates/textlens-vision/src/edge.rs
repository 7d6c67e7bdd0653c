//! 엣지 필터 (미리보기 표시용).
//!
//! 그레이스케일 변환 후 Canny 엣지 검출을 적용하고 PNG로 재인코딩한다.
//! 순수 함수이며 같은 입력에 같은 출력을 낸다. 제출 경로에는 연결되지
//! 않는다 — 미리보기 이미지 변환에만 쓰인다.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use thiserror::Error;

/// Canny 하한 임계값
const CANNY_LOW: f32 = 50.0;

/// Canny 상한 임계값
const CANNY_HIGH: f32 = 100.0;

/// 엣지 필터 에러 타입
#[derive(Debug, Error)]
pub enum EdgeFilterError {
    /// 입력 바이트 디코드 실패
    #[error("이미지 디코드 실패: {0}")]
    Decode(#[source] image::ImageError),

    /// 출력 PNG 인코드 실패
    #[error("이미지 인코드 실패: {0}")]
    Encode(#[source] image::ImageError),

    /// 빈 이미지 입력
    #[error("빈 이미지: 너비 또는 높이가 0")]
    EmptyImage,

    /// 비동기 작업 실패
    #[error("엣지 필터 비동기 작업 실패: {0}")]
    Async(String),
}

/// 인코딩된 이미지 바이트에 엣지 필터 적용 (동기).
///
/// 디코드 → 그레이스케일 → Canny(50/100) → PNG 인코드.
pub fn apply_edge_filter(image_bytes: &[u8]) -> Result<Vec<u8>, EdgeFilterError> {
    let img = image::load_from_memory(image_bytes).map_err(EdgeFilterError::Decode)?;

    let gray = img.to_luma8();
    if gray.width() == 0 || gray.height() == 0 {
        return Err(EdgeFilterError::EmptyImage);
    }

    let edges = imageproc::edges::canny(&gray, CANNY_LOW, CANNY_HIGH);

    let mut out = Vec::new();
    DynamicImage::ImageLuma8(edges)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(EdgeFilterError::Encode)?;

    Ok(out)
}

/// 인코딩된 이미지 바이트에 엣지 필터 적용 (비동기).
///
/// 디코드/검출은 CPU 바운드이므로 spawn_blocking으로 실행한다.
pub async fn apply_edge_filter_async(image_bytes: Vec<u8>) -> Result<Vec<u8>, EdgeFilterError> {
    tokio::task::spawn_blocking(move || apply_edge_filter(&image_bytes))
        .await
        .map_err(|e| EdgeFilterError::Async(format!("작업 조인 실패: {e}")))?
}
