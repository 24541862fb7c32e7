//! 绘图采样：把曲线、切线和坐标轴刻度换算成面板像素坐标。
//!
//! 这里只产出纯数据，具体绘制交给 `ui::canvas_view`。

use crate::core::controller::PlotSnapshot;
use crate::core::function::CurveFunction;

/// 面板尺寸（像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// 坐标轴上的一个刻度
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub axis: Axis,
    /// 刻度中心的像素坐标
    pub position: [f64; 2],
    pub label: String,
}

/// 刻度步长依次为 1, 2, 5, 10, 20, 50, …
fn tick_stride(scale: f64, min_label_spacing_px: f64) -> f64 {
    let mut stride = 1.0;
    let mut multipliers = [2.0, 2.5, 2.0].iter().cycle();
    while stride * scale < min_label_spacing_px {
        stride *= multipliers.next().copied().unwrap_or(2.0);
    }
    stride
}

/// 在可见 x 范围内按固定像素间距采样 `y = eval(x)`
fn sample_visible<F>(
    snapshot: &PlotSnapshot,
    size: PanelSize,
    spacing_px: f64,
    eval: F,
) -> Vec<[f64; 2]>
where
    F: Fn(f64) -> f64,
{
    let view = &snapshot.view;
    let (start, end) = view.visible_x_range(size.width);
    let step = spacing_px / view.scale;
    let count = ((end - start) / step).ceil() as usize + 1;

    (0..=count)
        .map(|i| {
            let x = start + i as f64 * step;
            let (px, py) = view.to_screen(x, eval(x), size.width, size.height);
            [px, py]
        })
        .collect()
}

pub fn sample_curve(
    snapshot: &PlotSnapshot,
    function: &dyn CurveFunction,
    size: PanelSize,
    spacing_px: f64,
) -> Vec<[f64; 2]> {
    sample_visible(snapshot, size, spacing_px, |x| function.evaluate(x))
}

pub fn sample_tangent(snapshot: &PlotSnapshot, size: PanelSize, spacing_px: f64) -> Vec<[f64; 2]> {
    let tangent = snapshot.tangent;
    sample_visible(snapshot, size, spacing_px, |x| tangent.tangent_y(x))
}

/// 原点所在的像素位置（坐标轴交点，可能在面板之外）
pub fn axis_origin(snapshot: &PlotSnapshot, size: PanelSize) -> [f64; 2] {
    let (px, py) = snapshot.view.to_screen(0.0, 0.0, size.width, size.height);
    [px, py]
}

/// 生成两条坐标轴上位于可见范围内的整数刻度（不含原点）。
pub fn axis_ticks(
    snapshot: &PlotSnapshot,
    size: PanelSize,
    min_label_spacing_px: f64,
) -> Vec<AxisTick> {
    let view = &snapshot.view;
    let stride = tick_stride(view.scale, min_label_spacing_px);
    let mut ticks = Vec::new();

    let (x_lo, x_hi) = view.visible_x_range(size.width);
    let mut k = (x_lo / stride).ceil();
    while k * stride <= x_hi {
        let value = k * stride;
        if value != 0.0 {
            let (px, py) = view.to_screen(value, 0.0, size.width, size.height);
            ticks.push(AxisTick {
                axis: Axis::X,
                position: [px, py],
                label: format!("{value:.1}"),
            });
        }
        k += 1.0;
    }

    let (y_lo, y_hi) = view.visible_y_range(size.height);
    let mut k = (y_lo / stride).ceil();
    while k * stride <= y_hi {
        let value = k * stride;
        if value != 0.0 {
            let (px, py) = view.to_screen(0.0, value, size.width, size.height);
            ticks.push(AxisTick {
                axis: Axis::Y,
                position: [px, py],
                label: format!("{value:.1}"),
            });
        }
        k += 1.0;
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::plot::PlotConfig;
    use crate::core::controller::PlotController;
    use crate::core::function::Parabola;
    use approx::assert_relative_eq;

    const SIZE: PanelSize = PanelSize {
        width: 800.0,
        height: 600.0,
    };

    fn snapshot() -> PlotSnapshot {
        PlotController::new(&PlotConfig::default()).snapshot()
    }

    #[test]
    fn stride_grows_when_zoomed_out() {
        assert_eq!(tick_stride(40.0, 32.0), 1.0);
        assert_eq!(tick_stride(20.0, 32.0), 2.0);
        assert_eq!(tick_stride(10.0, 32.0), 5.0);
        assert_eq!(tick_stride(5.0, 32.0), 10.0);
        assert_eq!(tick_stride(2.0, 32.0), 20.0);
        assert_eq!(tick_stride(1.0, 32.0), 50.0);
    }

    #[test]
    fn curve_spans_visible_width() {
        let snap = snapshot();
        let points = sample_curve(&snap, &Parabola, SIZE, 1.0);
        assert!(points.len() >= 801);
        assert_relative_eq!(points[0][0], 0.0, epsilon = 1e-9);
        assert!(points.last().unwrap()[0] >= 800.0);

        // x = 0 在面板中心，y = 0 也在中心
        let center = points
            .iter()
            .find(|p| (p[0] - 400.0).abs() < 1e-9)
            .expect("应当采样到中心列");
        assert_relative_eq!(center[1], 300.0, epsilon = 1e-9);
    }

    #[test]
    fn curve_follows_pan() {
        let mut controller = PlotController::new(&PlotConfig::default());
        controller.pan(-400.0, 0.0);
        let snap = controller.snapshot();
        let points = sample_curve(&snap, &Parabola, SIZE, 1.0);
        // 平移后可见范围是 [-20, 0]，最左端 x = -20
        let (x, _) = snap.view.to_world(points[0][0], points[0][1], SIZE.width, SIZE.height);
        assert_relative_eq!(x, -20.0, epsilon = 1e-9);
    }

    #[test]
    fn point_count_is_bounded_by_width() {
        let mut controller = PlotController::new(&PlotConfig::default());
        for _ in 0..40 {
            controller.zoom_out();
        }
        let points = sample_curve(&controller.snapshot(), &Parabola, SIZE, 1.0);
        assert!(points.len() <= 803);
    }

    #[test]
    fn tangent_passes_through_pivot() {
        let mut controller = PlotController::new(&PlotConfig::default());
        controller.set_tangent_point(3.0);
        let snap = controller.snapshot();
        let tangent = snap.tangent;
        for p in sample_tangent(&snap, SIZE, 1.0) {
            let (x, y) = snap.view.to_world(p[0], p[1], SIZE.width, SIZE.height);
            assert_relative_eq!(y, tangent.tangent_y(x), epsilon = 1e-6);
        }
    }

    #[test]
    fn default_ticks_are_unit_spaced() {
        let snap = snapshot();
        let ticks = axis_ticks(&snap, SIZE, 32.0);
        let xs: Vec<_> = ticks.iter().filter(|t| t.axis == Axis::X).collect();
        let ys: Vec<_> = ticks.iter().filter(|t| t.axis == Axis::Y).collect();
        // x ∈ [-10, 10]，y ∈ [-7.5, 7.5]，去掉原点
        assert_eq!(xs.len(), 20);
        assert_eq!(ys.len(), 14);

        let one = xs.iter().find(|t| t.label == "1.0").unwrap();
        assert_eq!(one.label, "1.0");
        assert_relative_eq!(one.position[0], 440.0);
        assert_relative_eq!(one.position[1], 300.0);

        let up = ys.iter().find(|t| t.label == "2.0").unwrap();
        assert_relative_eq!(up.position[1], 220.0);
        assert_eq!(up.label, "2.0");
    }

    #[test]
    fn axis_origin_moves_with_pan() {
        let mut controller = PlotController::new(&PlotConfig::default());
        controller.pan(40.0, 40.0);
        let origin = axis_origin(&controller.snapshot(), SIZE);
        assert_relative_eq!(origin[0], 360.0);
        assert_relative_eq!(origin[1], 260.0);
    }
}
