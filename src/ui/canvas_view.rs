use egui::{Align2, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

use crate::core::controller::PlotSnapshot;
use crate::core::function::CurveFunction;
use crate::rendering::plot::{
    axis_origin, axis_ticks, sample_curve, sample_tangent, Axis, PanelSize,
};
use crate::ui::theme;

/// 画布参数（来自 PlotConfig）
#[derive(Debug, Clone, Copy)]
pub struct CanvasOptions {
    pub sample_spacing_px: f64,
    pub min_label_spacing_px: f64,
}

/// 本帧画布上的交互结果
#[derive(Debug, Clone, Copy)]
pub struct CanvasResponse {
    /// 拖拽位移（像素）
    pub drag: Option<Vec2>,
    /// 画布占用的屏幕区域
    pub rect: Rect,
}

fn to_pos(rect: Rect, point: [f64; 2]) -> Pos2 {
    Pos2::new(rect.left() + point[0] as f32, rect.top() + point[1] as f32)
}

/// 指针位于画布内时，换算出它在函数空间中的坐标。
pub fn hover_coordinate(rect: Rect, pointer: Pos2, snapshot: &PlotSnapshot) -> Option<[f64; 2]> {
    if !rect.contains(pointer) {
        return None;
    }
    let local = pointer - rect.min;
    let (x, y) = snapshot.view.to_world(
        local.x as f64,
        local.y as f64,
        rect.width() as f64,
        rect.height() as f64,
    );
    Some([x, y])
}

/// 绘制坐标轴、函数曲线和切线，并汇报拖拽位移与画布区域。
pub fn show_canvas(
    ui: &mut Ui,
    snapshot: &PlotSnapshot,
    function: &dyn CurveFunction,
    options: CanvasOptions,
) -> CanvasResponse {
    let available = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(available, Sense::drag());
    let painter = ui.painter_at(rect);
    let size = PanelSize {
        width: rect.width() as f64,
        height: rect.height() as f64,
    };

    painter.rect_filled(rect, 0.0, theme::CANVAS_BG);
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, theme::CANVAS_BORDER));

    // ── axes ─────────────────────────────────────────────────
    let axis_stroke = Stroke::new(theme::AXIS_WIDTH, theme::AXIS);
    let origin = to_pos(rect, axis_origin(snapshot, size));
    painter.line_segment(
        [Pos2::new(rect.left(), origin.y), Pos2::new(rect.right(), origin.y)],
        axis_stroke,
    );
    painter.line_segment(
        [Pos2::new(origin.x, rect.top()), Pos2::new(origin.x, rect.bottom())],
        axis_stroke,
    );

    let font = FontId::proportional(11.0);
    let half = theme::TICK_HALF_LENGTH;
    for tick in axis_ticks(snapshot, size, options.min_label_spacing_px) {
        let p = to_pos(rect, tick.position);
        match tick.axis {
            Axis::X => {
                painter.line_segment(
                    [p - Vec2::new(0.0, half), p + Vec2::new(0.0, half)],
                    axis_stroke,
                );
                painter.text(
                    p + Vec2::new(0.0, half + 3.0),
                    Align2::CENTER_TOP,
                    &tick.label,
                    font.clone(),
                    theme::TICK_LABEL,
                );
            }
            Axis::Y => {
                painter.line_segment(
                    [p - Vec2::new(half, 0.0), p + Vec2::new(half, 0.0)],
                    axis_stroke,
                );
                painter.text(
                    p + Vec2::new(half + 3.0, 0.0),
                    Align2::LEFT_CENTER,
                    &tick.label,
                    font.clone(),
                    theme::TICK_LABEL,
                );
            }
        }
    }

    // ── curve ────────────────────────────────────────────────
    let curve: Vec<Pos2> = sample_curve(snapshot, function, size, options.sample_spacing_px)
        .into_iter()
        .map(|p| to_pos(rect, p))
        .collect();
    painter.add(Shape::line(curve, Stroke::new(theme::CURVE_WIDTH, theme::CURVE)));

    // ── tangent ──────────────────────────────────────────────
    let tangent: Vec<Pos2> = sample_tangent(snapshot, size, options.sample_spacing_px)
        .into_iter()
        .map(|p| to_pos(rect, p))
        .collect();
    painter.add(Shape::line(tangent, Stroke::new(theme::TANGENT_WIDTH, theme::TANGENT)));

    let pivot_x = snapshot.tangent.current_point;
    let (px, py) = snapshot.view.to_screen(
        pivot_x,
        snapshot.tangent.tangent_y(pivot_x),
        size.width,
        size.height,
    );
    let pivot = to_pos(rect, [px, py]);
    if rect.contains(pivot) {
        painter.circle_filled(pivot, 3.5, theme::PIVOT);
    }

    let mut result = CanvasResponse { drag: None, rect };

    // ── drag to pan ──────────────────────────────────────────
    if response.dragged() {
        let delta = response.drag_delta();
        if delta != Vec2::ZERO {
            result.drag = Some(delta);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::plot::PlotConfig;
    use crate::core::controller::PlotController;
    use approx::assert_relative_eq;

    fn canvas_rect() -> Rect {
        Rect::from_min_size(Pos2::new(0.0, 40.0), Vec2::new(800.0, 600.0))
    }

    #[test]
    fn hover_at_canvas_center_is_origin() {
        let snapshot = PlotController::new(&PlotConfig::default()).snapshot();
        let [x, y] = hover_coordinate(canvas_rect(), Pos2::new(400.0, 340.0), &snapshot)
            .expect("指针在画布内");
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, 0.0);
    }

    #[test]
    fn hover_uses_current_view() {
        let mut controller = PlotController::new(&PlotConfig::default());
        controller.pan(40.0, 0.0);
        let snapshot = controller.snapshot();
        let [x, y] = hover_coordinate(canvas_rect(), Pos2::new(440.0, 300.0), &snapshot)
            .expect("指针在画布内");
        assert_relative_eq!(x, 2.0);
        assert_relative_eq!(y, 1.0);
    }

    #[test]
    fn pointer_outside_canvas_has_no_coordinate() {
        let snapshot = PlotController::new(&PlotConfig::default()).snapshot();
        assert!(hover_coordinate(canvas_rect(), Pos2::new(400.0, 10.0), &snapshot).is_none());
    }
}
