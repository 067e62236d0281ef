use crate::element::ElementKind;
use crate::PageBuilderApp;

fn icon(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Heading => "H",
        ElementKind::Image => "🖼",
        ElementKind::Button => "▢",
    }
}

pub fn toolbar_panel(app: &mut PageBuilderApp, ctx: &egui::Context) {
    egui::SidePanel::left("toolbar_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Elements");
            ui.label("Drag onto the canvas");
            ui.add_space(4.0);

            for kind in ElementKind::ALL {
                let id = egui::Id::new(("toolbar_source", kind.tag()));
                ui.dnd_drag_source(id, kind, |ui| {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_min_width(140.0);
                        ui.horizontal(|ui| {
                            ui.strong(icon(kind));
                            ui.label(kind.label());
                        });
                    });
                });
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Preview").clicked() {
                    log::info!("Preview requested from toolbar");
                    app.open_preview(ctx);
                }
                if ui.button("Export").clicked() {
                    log::info!("Export requested from toolbar");
                    app.export();
                }
            });

            if let Some(status) = app.status() {
                ui.small(status);
            }

            ui.separator();
            if ui.small_button("Document Debug").clicked() {
                app.toggle_debug();
            }
        });
}
