//! # 视图 / 动画控制器
//!
//! 独占视图变换与切线动画状态。所有修改都在 UI 线程上按事件顺序发生，
//! 每次修改都会置位重绘标记；渲染端只通过 [`PlotController::snapshot`]
//! 读取按值复制的状态。

use crate::config::plot::PlotConfig;
use crate::rendering::viewport::{ViewTransform, ZoomLimits};

use super::function::{CurveFunction, Parabola};
use super::tangent::TangentAnimation;

/// 某一帧渲染所需的全部状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSnapshot {
    pub view: ViewTransform,
    pub tangent: TangentAnimation,
}

pub struct PlotController {
    view: ViewTransform,
    limits: ZoomLimits,
    tangent: TangentAnimation,
    function: Box<dyn CurveFunction>,
    needs_redraw: bool,
}

impl PlotController {
    pub fn new(config: &PlotConfig) -> Self {
        Self::with_function(config, Box::new(Parabola))
    }

    pub fn with_function(config: &PlotConfig, function: Box<dyn CurveFunction>) -> Self {
        let tangent =
            TangentAnimation::new(function.as_ref(), config.animation_step, config.start_offset);
        Self {
            view: ViewTransform::new(config.initial_scale),
            limits: ZoomLimits::from_config(config),
            tangent,
            function,
            needs_redraw: true,
        }
    }

    pub fn set_tangent_point(&mut self, x: f64) {
        if self.tangent.animating {
            log::debug!("取消进行中的动画 (target = {})", self.tangent.target_point);
        }
        self.tangent.retarget(x, self.function.as_ref());
        log::debug!(
            "切点 = {x}, 起点 = {}, f = {}, f' = {}",
            self.tangent.current_point,
            self.tangent.f_at_target,
            self.tangent.f_prime_at_target
        );
        self.needs_redraw = true;
    }

    /// 由外部时钟按固定周期调用。返回调用后是否仍在动画中。
    pub fn tick(&mut self) -> bool {
        if self.tangent.tick() {
            self.needs_redraw = true;
            if !self.tangent.animating {
                log::info!("切线动画结束于 x = {}", self.tangent.target_point);
            }
        }
        self.tangent.animating
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in(&self.limits);
        log::debug!("zoom in → scale = {:.3}", self.view.scale);
        self.needs_redraw = true;
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out(&self.limits);
        log::debug!("zoom out → scale = {:.3}", self.view.scale);
        self.needs_redraw = true;
    }

    pub fn pan(&mut self, dx_px: f64, dy_px: f64) {
        self.view.pan(dx_px, dy_px);
        self.needs_redraw = true;
    }

    pub fn reset_view(&mut self) {
        self.view.reset(&self.limits);
        log::debug!("视图已重置");
        self.needs_redraw = true;
    }

    pub fn is_animating(&self) -> bool {
        self.tangent.animating
    }

    pub fn function(&self) -> &dyn CurveFunction {
        self.function.as_ref()
    }

    pub fn snapshot(&self) -> PlotSnapshot {
        PlotSnapshot {
            view: self.view,
            tangent: self.tangent,
        }
    }

    /// 读取并清除重绘标记
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
