use egui::{Color32, Context, Stroke};

pub const LIGHT_PINK: Color32 = Color32::from_rgb(0xFF, 0xC0, 0xCB);
pub const HOT_PINK: Color32 = Color32::from_rgb(0xFF, 0x69, 0xB4);
pub const DEEP_PINK: Color32 = Color32::from_rgb(0xFF, 0x14, 0x93);

pub const CORNER_RADIUS: f32 = 10.0;
pub const LABEL_BORDER_WIDTH: f32 = 3.0;
pub const BUTTON_TEXT_SIZE: f32 = 16.0;

/// Applies the pink look: light pink background, hot pink buttons that
/// darken on hover.
pub fn apply(ctx: &Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = LIGHT_PINK;
    visuals.window_fill = LIGHT_PINK;

    let widgets = &mut visuals.widgets;
    for (widget, fill) in [
        (&mut widgets.inactive, HOT_PINK),
        (&mut widgets.hovered, DEEP_PINK),
        (&mut widgets.active, DEEP_PINK),
    ] {
        widget.weak_bg_fill = fill;
        widget.bg_fill = fill;
        widget.rounding = CORNER_RADIUS.into();
        widget.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        widget.bg_stroke = Stroke::NONE;
    }

    ctx.set_visuals(visuals);
}

/// Frame drawn around the display label.
pub fn label_frame() -> egui::Frame {
    egui::Frame::none()
        .stroke(Stroke::new(LABEL_BORDER_WIDTH, HOT_PINK))
        .rounding(CORNER_RADIUS)
        .inner_margin(LABEL_BORDER_WIDTH)
}
