//! # 被绘制的函数
//!
//! 函数以 [`CurveFunction`] trait 的形式提供给控制器，
//! 目前只有固定的抛物线 [`Parabola`]。

/// 可求值、可求导的一元实函数。
pub trait CurveFunction {
    fn evaluate(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;

    /// 用于状态栏显示的公式
    fn label(&self) -> &str;
}

/// f(x) = x²
#[derive(Debug, Clone, Copy, Default)]
pub struct Parabola;

impl CurveFunction for Parabola {
    fn evaluate(&self, x: f64) -> f64 {
        x * x
    }

    fn derivative(&self, x: f64) -> f64 {
        2.0 * x
    }

    fn label(&self) -> &str {
        "f(x) = x²"
    }
}
