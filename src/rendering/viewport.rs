//! 函数空间与面板像素之间的视图变换。
//!
//! ```text
//! px = W/2 + (x - offset_x) * scale
//! py = H/2 - (y - offset_y) * scale
//! ```
//!
//! 坐标轴、曲线、切线都必须经过同一个映射，平移缩放时三者才保持一致。

use crate::config::plot::PlotConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// 像素/单位，始终 > 0
    pub scale: f64,
    /// 平移量（函数空间单位）
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub factor: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub initial_scale: f64,
}

impl ZoomLimits {
    pub fn from_config(config: &PlotConfig) -> Self {
        Self {
            factor: config.zoom_factor,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            initial_scale: config.initial_scale,
        }
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::from_config(&PlotConfig::default())
    }
}

impl ViewTransform {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn zoom_in(&mut self, limits: &ZoomLimits) {
        self.scale = (self.scale * limits.factor).min(limits.max_scale);
    }

    pub fn zoom_out(&mut self, limits: &ZoomLimits) {
        self.scale = (self.scale / limits.factor).max(limits.min_scale);
    }

    pub fn reset(&mut self, limits: &ZoomLimits) {
        *self = Self::new(limits.initial_scale);
    }

    /// 拖拽平移；屏幕 y 轴向下，因此 y 方向取反。
    pub fn pan(&mut self, dx_px: f64, dy_px: f64) {
        self.offset_x += dx_px / self.scale;
        self.offset_y -= dy_px / self.scale;
    }

    /// 函数空间 → 面板像素（相对面板左上角）
    pub fn to_screen(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
        (
            width / 2.0 + (x - self.offset_x) * self.scale,
            height / 2.0 - (y - self.offset_y) * self.scale,
        )
    }

    /// 面板像素 → 函数空间
    pub fn to_world(&self, px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
        (
            (px - width / 2.0) / self.scale + self.offset_x,
            (height / 2.0 - py) / self.scale + self.offset_y,
        )
    }

    pub fn visible_x_range(&self, width: f64) -> (f64, f64) {
        let half = width / (2.0 * self.scale);
        (self.offset_x - half, self.offset_x + half)
    }

    pub fn visible_y_range(&self, height: f64) -> (f64, f64) {
        let half = height / (2.0 * self.scale);
        (self.offset_y - half, self.offset_y + half)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(PlotConfig::default().initial_scale)
    }
}
