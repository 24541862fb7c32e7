pub mod app;
pub mod canvas_view;
pub mod control_panel;
pub mod input;
pub mod status_bar;
pub mod theme;
