//! # 切线动画状态
//!
//! 用户提交新的切点后，切线的支点从目标点外侧 `start_offset` 处出发，
//! 每个 tick 移动 `step`，到达目标点后停止。
//!
//! 斜率和截距在设置目标时按目标点计算一次，动画期间只有支点在滑动，
//! 因此画面上是一条平移的切线，而不是逐点重新求切线。

use super::function::CurveFunction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentAnimation {
    /// 用户最后提交的切点
    pub target_point: f64,
    /// 当前渲染的支点（向 target_point 插值）
    pub current_point: f64,
    pub f_at_target: f64,
    pub f_prime_at_target: f64,
    pub animating: bool,
    step: f64,
    start_offset: f64,
}

impl TangentAnimation {
    pub fn new(function: &dyn CurveFunction, step: f64, start_offset: f64) -> Self {
        Self {
            target_point: 0.0,
            current_point: 0.0,
            f_at_target: function.evaluate(0.0),
            f_prime_at_target: function.derivative(0.0),
            animating: false,
            step,
            start_offset,
        }
    }

    /// 设置新的切点并启动动画，进行中的动画直接丢弃。
    pub fn retarget(&mut self, x: f64, function: &dyn CurveFunction) {
        self.animating = false;
        self.target_point = x;

        // 两个分支在 x == 0 时都会命中，后者生效：current = 0 + offset
        if self.target_point <= 0.0 {
            self.current_point = self.target_point - self.start_offset;
        }
        if self.target_point >= 0.0 {
            self.current_point = self.target_point + self.start_offset;
        }

        self.f_at_target = function.evaluate(self.target_point);
        self.f_prime_at_target = function.derivative(self.target_point);
        self.animating = true;
    }

    /// 推进一步动画。不在动画中时不修改任何状态并返回 false。
    pub fn tick(&mut self) -> bool {
        if !self.animating {
            return false;
        }

        let before = self.current_point;
        if self.current_point > self.target_point {
            self.current_point -= self.step;
            // 大数值处步长小于浮点间距时不会再前进
            if self.current_point <= self.target_point || self.current_point == before {
                self.finish();
            }
        } else if self.current_point < self.target_point {
            self.current_point += self.step;
            if self.current_point >= self.target_point || self.current_point == before {
                self.finish();
            }
        } else {
            self.animating = false;
        }
        true
    }

    fn finish(&mut self) {
        self.current_point = self.target_point;
        self.animating = false;
    }

    /// 以当前支点为基准的切线值
    pub fn tangent_y(&self, x: f64) -> f64 {
        self.f_at_target + self.f_prime_at_target * (x - self.current_point)
    }

    /// 目标点处切线 y = m·x + b 的斜率 m
    pub fn slope(&self) -> f64 {
        self.f_prime_at_target
    }

    /// 目标点处切线 y = m·x + b 的截距 b
    pub fn intercept(&self) -> f64 {
        self.f_at_target - self.f_prime_at_target * self.target_point
    }
}
