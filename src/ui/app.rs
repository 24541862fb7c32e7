use std::time::Duration;

use eframe::egui;

use crate::config::plot::PlotConfig;
use crate::core::clock::AnimationClock;
use crate::core::controller::PlotController;
use crate::ui::canvas_view::{hover_coordinate, show_canvas, CanvasOptions};
use crate::ui::control_panel::show_control_panel;
use crate::ui::input::parse_tangent_input;
use crate::ui::status_bar::{show_status_bar, StatusLine};
use crate::ui::theme;

pub struct TangentApp {
    controller: PlotController,
    clock: AnimationClock,
    canvas_options: CanvasOptions,
    x_input: String,
    last_status: String,
    status_is_error: bool,
    /// 上一帧画布区域，仅在窗口缩放时变化
    canvas_rect: Option<egui::Rect>,
}

impl TangentApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &PlotConfig) -> Self {
        theme::apply_theme(&cc.egui_ctx);

        Self {
            controller: PlotController::new(config),
            clock: AnimationClock::new(config.tick_interval(), config.max_ticks_per_frame),
            canvas_options: CanvasOptions {
                sample_spacing_px: config.sample_spacing_px,
                min_label_spacing_px: config.min_label_spacing_px,
            },
            x_input: String::new(),
            last_status: "Enter an x-coordinate and press Enter".to_string(),
            status_is_error: false,
            canvas_rect: None,
        }
    }

    /// 按固定周期推进切线动画；只在动画进行中消耗帧时间。
    fn advance_animation(&mut self, ctx: &egui::Context) {
        if !self.controller.is_animating() {
            return;
        }

        let frame_time = ctx.input(|i| i.unstable_dt).max(0.0);
        let due = self.clock.advance(Duration::from_secs_f32(frame_time));
        for _ in 0..due {
            if !self.controller.tick() {
                break;
            }
        }
    }

    fn submit_tangent_point(&mut self) {
        match parse_tangent_input(&self.x_input) {
            Ok(x) => {
                self.controller.set_tangent_point(x);
                self.clock.reset();
                self.last_status = format!("Tangent point x = {x}");
                self.status_is_error = false;
            }
            Err(error) => {
                log::warn!("切点输入无效: {error}");
                self.last_status = error.to_string();
                self.status_is_error = true;
            }
        }
    }
}

impl eframe::App for TangentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_animation(ctx);

        egui::TopBottomPanel::top("control_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let action =
                    show_control_panel(ui, &mut self.x_input, self.controller.is_animating());
                ui.add_space(4.0);

                if action.submit {
                    self.submit_tangent_point();
                }
                if action.zoom_in {
                    self.controller.zoom_in();
                }
                if action.zoom_out {
                    self.controller.zoom_out();
                }
                if action.reset_view {
                    self.controller.reset_view();
                }
            });

        let snapshot = self.controller.snapshot();
        let hover = match (self.canvas_rect, ctx.input(|i| i.pointer.hover_pos())) {
            (Some(rect), Some(pointer)) => hover_coordinate(rect, pointer, &snapshot),
            _ => None,
        };

        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .min_height(24.0)
            .show(ctx, |ui| {
                show_status_bar(
                    ui,
                    &StatusLine {
                        message: &self.last_status,
                        is_error: self.status_is_error,
                        function_label: self.controller.function().label(),
                        slope: snapshot.tangent.slope(),
                        intercept: snapshot.tangent.intercept(),
                        scale: snapshot.view.scale,
                        hover,
                    },
                );
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let response = show_canvas(
                    ui,
                    &snapshot,
                    self.controller.function(),
                    self.canvas_options,
                );
                if let Some(delta) = response.drag {
                    self.controller.pan(delta.x as f64, delta.y as f64);
                }
                self.canvas_rect = Some(response.rect);
            });

        if self.controller.take_redraw() {
            ctx.request_repaint();
        }
        if self.controller.is_animating() {
            ctx.request_repaint_after(self.clock.period());
        }
    }
}
