//! 장식용 진행 카운트다운.
//!
//! 고정 상수에서 시작해 1초마다 감소하고 0에서 멈추는 추정치다.
//! 실제 서버 진행률과 무관하며 측정된 ETA가 아니다.
//!
//! 카운트다운은 제출 경로가 소유하는 스코프 값이다: InFlight 진입 시
//! 생성되고, 성공/실패/취소 어느 경로로든 스코프를 벗어나면 drop이
//! 태스크를 중단하고 발행 값을 0으로 되돌린다. 요청보다 오래 사는
//! 타이머는 존재할 수 없다.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// 카운트다운 시작값 (초) — 공칭 추정치
pub const PROGRESS_ESTIMATE_SECS: u32 = 10;

/// 틱 간격
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// 스코프 카운트다운.
///
/// drop 시 틱 태스크를 중단하고 남은 추정치를 0으로 발행한다.
pub struct ProgressCountdown {
    remaining: watch::Sender<u32>,
    task: JoinHandle<()>,
}

impl ProgressCountdown {
    /// 카운트다운 시작.
    ///
    /// `remaining` 채널에 시작값을 발행한 뒤 1초 간격으로 감소시킨다.
    /// 0에 도달하면 그대로 유지한다 — 요청이 추정보다 오래 걸려도
    /// 음수로 내려가지 않는다.
    pub fn start(remaining: watch::Sender<u32>, estimate_secs: u32) -> Self {
        let _ = remaining.send(estimate_secs);

        let tx = remaining.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // 첫 tick은 즉시 발화하므로 소비한다
            interval.tick().await;

            loop {
                interval.tick().await;
                let mut reached_zero = false;
                tx.send_modify(|v| {
                    *v = v.saturating_sub(1);
                    reached_zero = *v == 0;
                });
                if reached_zero {
                    break;
                }
            }
        });

        Self { remaining, task }
    }
}

impl Drop for ProgressCountdown {
    fn drop(&mut self) {
        // 정착 관찰 후 잔여 틱이 추정치를 되살리지 못하도록
        // 중단을 먼저, 0 발행을 그 다음에 수행한다
        self.task.abort();
        let _ = self.remaining.send(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 태스크 틱이 처리될 기회를 준다
    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_is_monotonically_non_increasing() {
        let (tx, rx) = watch::channel(0u32);
        let _countdown = ProgressCountdown::start(tx, 5);

        let mut previous = *rx.borrow();
        assert_eq!(previous, 5);

        for _ in 0..8 {
            tokio::time::advance(Duration::from_secs(1)).await;
            settle().await;
            let current = *rx.borrow();
            assert!(current <= previous, "{current} > {previous}");
            previous = current;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_reaches_zero_and_holds() {
        let (tx, rx) = watch::channel(0u32);
        let _countdown = ProgressCountdown::start(tx, 3);

        for _ in 0..6 {
            tokio::time::advance(Duration::from_secs(1)).await;
            settle().await;
        }

        assert_eq!(*rx.borrow(), 0);

        // 0 도달 이후 추가 경과 시간에도 0 유지
        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(*rx.borrow(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_forces_zero_immediately() {
        let (tx, rx) = watch::channel(0u32);
        let countdown = ProgressCountdown::start(tx, 10);

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert!(*rx.borrow() > 0);

        drop(countdown);
        assert_eq!(*rx.borrow(), 0);

        // drop 이후 어떤 틱도 값을 되살리지 않는다
        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;
        assert_eq!(*rx.borrow(), 0);
    }
}
