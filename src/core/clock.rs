//! 把可变帧时间换算成固定周期的动画 tick。

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AnimationClock {
    period: Duration,
    max_ticks_per_frame: u32,
    accumulated: Duration,
}

impl AnimationClock {
    pub fn new(period: Duration, max_ticks_per_frame: u32) -> Self {
        Self {
            period,
            max_ticks_per_frame,
            accumulated: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// 累加帧时间，返回本帧应执行的 tick 数。
    ///
    /// 不足一个周期的余量留到下一帧；超过上限的 tick 直接丢弃。
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.accumulated += frame_time;

        let due = self.accumulated.as_nanos() / self.period.as_nanos();
        let remainder = self.accumulated.as_nanos() % self.period.as_nanos();
        self.accumulated = Duration::from_nanos(remainder as u64);

        if due > self.max_ticks_per_frame as u128 {
            log::debug!("丢弃 {} 个积压 tick", due - self.max_ticks_per_frame as u128);
            self.max_ticks_per_frame
        } else {
            due as u32
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
