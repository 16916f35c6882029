use egui::{Color32, Rect, RichText, Sense, pos2};

use crate::DrawerApp;
use crate::theme;

const OPEN_BUTTON_TEXT: &str = "🎀 Open Image 🎀";

/// Button stacked above the display label.
pub fn central_panel(app: &mut DrawerApp, ctx: &egui::Context) {
    // Handle input against the label rect laid out last frame
    app.handle_input(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        let button = egui::Button::new(
            RichText::new(OPEN_BUTTON_TEXT)
                .size(theme::BUTTON_TEXT_SIZE)
                .strong()
                .color(Color32::WHITE),
        )
        .min_size(egui::vec2(ui.available_width(), 36.0));

        if ui.add(button).clicked() {
            app.open_image(ctx);
        }

        ui.add_space(8.0);

        theme::label_frame().show(ui, |ui| {
            ui.set_min_size(ui.available_size());

            egui::ScrollArea::both()
                .drag_to_scroll(false)
                .show(ui, |ui| {
                    let texture = match app.editor.canvas() {
                        Some(canvas) => app
                            .texture
                            .texture_for(ctx, canvas)
                            .map(|texture_id| (canvas.size(), texture_id)),
                        None => None,
                    };
                    match texture {
                        Some((size, texture_id)) => {
                            // One point per image pixel, anchored at the label origin
                            let (rect, _response) =
                                ui.allocate_exact_size(size, Sense::click_and_drag());
                            ui.painter().image(
                                texture_id,
                                rect,
                                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                                Color32::WHITE,
                            );
                            app.input.set_label_rect(rect, ui.clip_rect());
                        }
                        None => {
                            ui.centered_and_justified(|ui| {
                                ui.label(RichText::new("No image loaded").color(theme::DEEP_PINK));
                            });
                            app.input.set_label_rect(Rect::NOTHING, Rect::NOTHING);
                        }
                    }
                });
        });
    });
}
