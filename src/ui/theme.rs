//! # 绘图配色
//!
//! 白底黑轴，曲线红色，切线蓝色；提供一键应用到 egui Style 的函数。

use egui::{Color32, Rounding, Stroke, Visuals};

// ═══════════════════════════════════════════════════════════
// 画布
// ═══════════════════════════════════════════════════════════

pub const CANVAS_BG: Color32 = Color32::WHITE;
pub const CANVAS_BORDER: Color32 = Color32::from_gray(190);

pub const AXIS: Color32 = Color32::BLACK;
pub const TICK_LABEL: Color32 = Color32::from_gray(40);

/// 函数曲线
pub const CURVE: Color32 = Color32::from_rgb(220, 30, 30);
/// 切线
pub const TANGENT: Color32 = Color32::from_rgb(30, 70, 220);
/// 切线支点标记
pub const PIVOT: Color32 = Color32::from_rgb(20, 40, 150);

pub const AXIS_WIDTH: f32 = 1.0;
pub const CURVE_WIDTH: f32 = 1.5;
pub const TANGENT_WIDTH: f32 = 1.5;
pub const TICK_HALF_LENGTH: f32 = 5.0;

// ═══════════════════════════════════════════════════════════
// 状态栏
// ═══════════════════════════════════════════════════════════

pub const TEXT_ERROR: Color32 = Color32::from_rgb(200, 40, 40);
pub const TEXT_MUTED: Color32 = Color32::from_gray(110);

// ═══════════════════════════════════════════════════════════
// 应用主题
// ═══════════════════════════════════════════════════════════

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = Visuals::light();
    let rounding = Rounding::same(3.0);
    visuals.widgets.inactive.rounding = rounding;
    visuals.widgets.hovered.rounding = rounding;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, TANGENT);
    visuals.widgets.active.rounding = rounding;
    visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(30, 70, 220, 60);
    visuals.selection.stroke = Stroke::new(1.0, TANGENT);
    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    ctx.set_style(style);
}
