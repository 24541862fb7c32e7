//! # 绘图配置（PlotConfig）
//!
//! 所有可调数值的唯一来源：初始缩放、缩放倍率、动画步长、时钟周期、采样间距。
//! 默认值内嵌于 `assets/plot.json`；设置环境变量 `TANGENT_LINE_CONFIG`
//! 可指向同结构的 JSON 文件覆盖默认值。

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::config::ConfigError;

const PLOT_JSON: &str = include_str!("../assets/plot.json");

/// 覆盖配置文件路径的环境变量名
pub const CONFIG_ENV_VAR: &str = "TANGENT_LINE_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    // ── 视图 ──
    /// 初始像素/单位
    pub initial_scale: f64,
    /// 每次 zoom in / zoom out 的倍率
    pub zoom_factor: f64,
    pub min_scale: f64,
    pub max_scale: f64,

    // ── 切线动画 ──
    /// 每个 tick 移动的距离（函数空间单位）
    pub animation_step: f64,
    /// 新目标点的起始偏移
    pub start_offset: f64,
    pub tick_interval_ms: u64,
    /// 单帧最多执行的 tick 数，超出部分丢弃
    pub max_ticks_per_frame: u32,

    // ── 渲染 ──
    /// 曲线采样间距（像素）
    pub sample_spacing_px: f64,
    /// 刻度标签之间的最小像素间距
    pub min_label_spacing_px: f64,
    pub window_size: [f32; 2],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            initial_scale: 40.0,
            zoom_factor: 1.2,
            min_scale: 0.01,
            max_scale: 100_000.0,
            animation_step: 0.02,
            start_offset: 2.0,
            tick_interval_ms: 10,
            max_ticks_per_frame: 50,
            sample_spacing_px: 1.0,
            min_label_spacing_px: 32.0,
            window_size: [800.0, 668.0],
        }
    }
}

impl PlotConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: PlotConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// 加载内嵌默认配置，如设置了 `TANGENT_LINE_CONFIG` 则尝试覆盖。
    ///
    /// 覆盖文件缺失或非法时记录警告并回退到内嵌配置。
    pub fn load() -> Result<Self, ConfigError> {
        let embedded = Self::from_json(PLOT_JSON)?;

        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Ok(embedded);
        };
        let path = Path::new(&path);
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("配置已加载: {}", path.display());
                Ok(config)
            }
            Err(error) => {
                log::warn!("覆盖配置 {} 不可用，使用内嵌默认值: {error}", path.display());
                Ok(embedded)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("initial_scale", self.initial_scale),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("animation_step", self.animation_step),
            ("sample_spacing_px", self.sample_spacing_px),
            ("min_label_spacing_px", self.min_label_spacing_px),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} 必须为正数 (当前 {value})")));
            }
        }

        if !(self.zoom_factor.is_finite() && self.zoom_factor > 1.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom_factor 必须大于 1 (当前 {})",
                self.zoom_factor
            )));
        }
        if !self.start_offset.is_finite() || self.start_offset < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "start_offset 不能为负 (当前 {})",
                self.start_offset
            )));
        }
        if self.min_scale > self.initial_scale || self.initial_scale > self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "要求 min_scale <= initial_scale <= max_scale (当前 {} / {} / {})",
                self.min_scale, self.initial_scale, self.max_scale
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms 不能为 0".to_string()));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(ConfigError::Invalid("max_ticks_per_frame 不能为 0".to_string()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = PlotConfig::from_json(PLOT_JSON).expect("内嵌配置应当合法");
        assert_eq!(config, PlotConfig::default());
        assert_relative_eq!(config.initial_scale, 40.0);
        assert_eq!(config.tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = PlotConfig::from_json(r#"{ "initial_scale": 60.0 }"#).unwrap();
        assert_relative_eq!(config.initial_scale, 60.0);
        assert_relative_eq!(config.zoom_factor, 1.2);
        assert_relative_eq!(config.animation_step, 0.02);
    }

    #[test]
    fn rejects_non_positive_step() {
        let err = PlotConfig::from_json(r#"{ "animation_step": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zoom_factor_not_above_one() {
        let err = PlotConfig::from_json(r#"{ "zoom_factor": 1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_initial_scale_outside_bounds() {
        let err = PlotConfig::from_json(r#"{ "initial_scale": 5.0, "min_scale": 10.0 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PlotConfig::from_json("{ initial_scale: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PlotConfig::from_file(Path::new("/nonexistent/plot.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
