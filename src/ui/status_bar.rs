use egui::Ui;

use crate::ui::theme;

/// 状态栏要显示的内容
pub struct StatusLine<'a> {
    pub message: &'a str,
    pub is_error: bool,
    pub function_label: &'a str,
    pub slope: f64,
    pub intercept: f64,
    pub scale: f64,
    /// 指针所在的函数空间坐标
    pub hover: Option<[f64; 2]>,
}

/// 切线方程文本，例如 `y = 6.00x - 9.00`
pub fn format_equation(slope: f64, intercept: f64) -> String {
    let sign = if intercept < 0.0 { '-' } else { '+' };
    format!("y = {slope:.2}x {sign} {:.2}", intercept.abs())
}

pub fn show_status_bar(ui: &mut Ui, status: &StatusLine<'_>) {
    ui.horizontal_wrapped(|ui| {
        if status.is_error {
            ui.colored_label(theme::TEXT_ERROR, format!("Error: {}", status.message));
        } else {
            ui.label(status.message);
        }
        ui.separator();
        ui.label(status.function_label);
        ui.separator();
        ui.label(format!("Tangent: {}", format_equation(status.slope, status.intercept)));
        ui.separator();
        ui.colored_label(theme::TEXT_MUTED, format!("{:.1} px/unit", status.scale));
        if let Some([x, y]) = status.hover {
            ui.separator();
            ui.colored_label(theme::TEXT_MUTED, format!("({x:.2}, {y:.2})"));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_with_negative_intercept() {
        assert_eq!(format_equation(6.0, -9.0), "y = 6.00x - 9.00");
    }

    #[test]
    fn equation_with_positive_intercept() {
        assert_eq!(format_equation(-1.0, 0.25), "y = -1.00x + 0.25");
    }

    #[test]
    fn equation_at_origin() {
        assert_eq!(format_equation(0.0, 0.0), "y = 0.00x + 0.00");
    }
}
