use egui::{Key, TextEdit, Ui};

// ── action returned to the app ──────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ControlAction {
    /// 输入框按下 Enter 或点击 Apply
    pub submit: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub reset_view: bool,
}

// ── panel rendering ─────────────────────────────────────────

pub fn show_control_panel(ui: &mut Ui, x_input: &mut String, animating: bool) -> ControlAction {
    let mut action = ControlAction::default();

    ui.horizontal(|ui| {
        ui.label("Enter x-coordinate:");
        let response = ui.add(
            TextEdit::singleline(x_input)
                .desired_width(70.0)
                .hint_text("e.g. 1.5"),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            action.submit = true;
        }
        if ui.button("Apply").clicked() {
            action.submit = true;
        }

        ui.separator();

        if ui.button("Zoom In").clicked() {
            action.zoom_in = true;
        }
        if ui.button("Zoom Out").clicked() {
            action.zoom_out = true;
        }
        if ui.button("Reset view").clicked() {
            action.reset_view = true;
        }

        if animating {
            ui.separator();
            ui.spinner();
        }
    });

    action
}
