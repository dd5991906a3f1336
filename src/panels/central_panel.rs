use egui::{Pos2, Sense, Vec2};

use crate::PaintApp;

/// Screen position to canvas coordinates, snapped to whole pixels.
fn to_canvas(pos: Pos2, origin: Pos2) -> Pos2 {
    (pos - origin).round().to_pos2()
}

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            let canvas = response.rect;

            // Pointer input is ignored while the text prompt is open
            if !app.is_prompting() {
                handle_input(app, ui, &response, canvas.min);
            }

            let items = app.editor().render_list();
            app.renderer().render(&painter, canvas, &items);
        });
}

fn handle_input(app: &mut PaintApp, ui: &egui::Ui, response: &egui::Response, origin: Pos2) {
    let (pressed, released, delta, pos, time) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.delta(),
            i.pointer.interact_pos(),
            i.time,
        )
    });
    let Some(pos) = pos.map(|p| to_canvas(p, origin)) else {
        return;
    };

    if pressed && response.hovered() {
        app.pointer_pressed(pos, time);
    } else if delta != Vec2::ZERO {
        app.pointer_moved(pos);
    }

    if released {
        app.pointer_released(pos);
    }
}
