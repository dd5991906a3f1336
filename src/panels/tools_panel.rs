use egui::Color32;
use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::PaintApp;
use crate::element::{FontSpec, Paint};
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.editor().tool();
            for tool in ToolKind::ALL {
                if ui.selectable_label(active_tool == Some(tool), tool.name()).clicked() {
                    log::info!("Tool selected from UI: {tool}");
                    let actions = app.editor_mut().set_tool(tool);
                    app.apply(actions);
                }
            }
            if ui.selectable_label(active_tool.is_none(), "Select").clicked() {
                log::info!("Selection mode");
                let actions = app.editor_mut().clear_tool();
                app.apply(actions);
            }

            ui.separator();
            style_section(app, ui);
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.editor().history().can_undo();
                let can_redo = app.editor().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    let actions = app.editor_mut().undo();
                    app.apply(actions);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    let actions = app.editor_mut().redo();
                    app.apply(actions);
                }
            });

            ui.horizontal(|ui| {
                let has_selection = app.editor().selection().is_some();
                if ui.add_enabled(has_selection, egui::Button::new("Delete")).clicked() {
                    let actions = app.editor_mut().delete_selected();
                    app.apply(actions);
                }
                if ui.button("Clear all").clicked() {
                    let actions = app.editor_mut().clear_all();
                    app.apply(actions);
                }
            });

            let history = app.editor().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.undo_depth()));
                ui.label(format!("Redo stack size: {}", history.redo_depth()));
            });

            ui.separator();
            ui.heading("File");
            ui.text_edit_singleline(app.file_path_mut());
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    app.save_drawing();
                }
                if ui.button("Open").clicked() {
                    app.open_drawing();
                }
            });
            if let Some(status) = app.status() {
                ui.label(status);
            }

            ui.separator();
            ui.label(format!(
                "State: {} ({} shapes)",
                app.editor().state().name(),
                app.editor().scene().len()
            ));
        });
}

fn style_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("Style");
    let style = app.editor().style().clone();

    ui.horizontal(|ui| {
        ui.label("Stroke:");
        let mut color = style.stroke.color().unwrap_or(Color32::BLACK);
        if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
            app.editor_mut().set_stroke_color(Paint::Color(color));
        }
    });

    ui.horizontal(|ui| {
        let mut filled = !style.fill.is_none();
        if ui.checkbox(&mut filled, "Fill:").changed() && !filled {
            app.editor_mut().set_fill_color(Paint::None);
        }
        let mut color = style.fill.color().unwrap_or(Color32::WHITE);
        if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() || (filled && style.fill.is_none()) {
            app.editor_mut().set_fill_color(Paint::Color(color));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Width:");
        let mut width = style.width;
        if ui.add(egui::Slider::new(&mut width, 1..=50)).changed() {
            app.editor_mut().set_stroke_width(width);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Font size:");
        let mut size = style.font.size();
        if ui.add(egui::Slider::new(&mut size, 6..=72)).changed() {
            let font = FontSpec::new(style.font.family(), size);
            app.editor_mut().set_font(font);
        }
    });
}
