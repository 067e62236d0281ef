use egui::{Align, Color32, Layout, RichText};

use crate::element::{Content, Element, ElementId, ElementKind};
use crate::style::{parse_color, resolve_color, Alignment, ButtonSize, FontSize, ImageWidth};
use crate::PageBuilderApp;

/// Root font size used to turn rem values into points
const REM: f32 = 16.0;

const SELECTED_STROKE: Color32 = Color32::from_rgb(33, 150, 243);

enum CanvasAction {
    Select(ElementId),
    Delete(ElementId),
}

fn to_color32(raw: &str) -> Color32 {
    parse_color(&resolve_color(raw))
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::GRAY)
}

fn layout_for(raw_align: &str) -> Layout {
    let align = match Alignment::resolve(raw_align) {
        Alignment::Left => Align::Min,
        Alignment::Center => Align::Center,
        Alignment::Right => Align::Max,
    };
    Layout::top_down(align)
}

/// Draw an approximation of the element as it will render
fn draw_element(ui: &mut egui::Ui, element: &Element) {
    match element.content() {
        Content::Heading(props) => {
            ui.with_layout(layout_for(&props.align), |ui| {
                let size = FontSize::resolve(&props.font_size).rem() * REM;
                ui.label(
                    RichText::new(&props.text)
                        .size(size)
                        .strong()
                        .color(to_color32(&props.color)),
                );
            });
        }
        Content::Image(props) => {
            ui.with_layout(layout_for(&props.align), |ui| {
                let width = ui.available_width() * ImageWidth::resolve(&props.width).fraction();
                egui::Frame::none()
                    .fill(Color32::from_rgb(0x66, 0x7e, 0xea))
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width((width - 24.0).max(0.0));
                        ui.colored_label(Color32::WHITE, format!("🖼 {}", props.alt));
                        ui.small(&props.src);
                    });
            });
        }
        Content::Button(props) => {
            ui.with_layout(layout_for(&props.align), |ui| {
                let size = ButtonSize::resolve(&props.size).rem() * REM;
                let label = RichText::new(&props.text)
                    .size(size)
                    .color(to_color32(&props.text_color));
                let button = egui::Button::new(label).fill(to_color32(&props.background_color));
                let response = ui.add(button);
                if let Some(link) = props.link_target() {
                    response.on_hover_text(format!("Links to: {link}"));
                }
            });
        }
        Content::Unrecognized { tag } => {
            ui.label(format!("Unknown element type: {tag}"));
        }
    }
}

pub fn canvas_panel(app: &mut PageBuilderApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let mut actions = Vec::new();
        let document = app.session().document();

        let frame = egui::Frame::default()
            .inner_margin(12.0)
            .fill(ui.visuals().extreme_bg_color);
        let (zone, dropped) = ui.dnd_drop_zone::<ElementKind, _>(frame, |ui| {
            ui.set_min_size(ui.available_size());
            egui::ScrollArea::vertical().show(ui, |ui| {
                if document.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.heading("Drag elements here to start building");
                        ui.label("Select any element on the canvas to edit its properties");
                    });
                }

                for element in document.elements() {
                    let id = element.id();
                    let stroke = if document.is_selected(id) {
                        egui::Stroke::new(2.0, SELECTED_STROKE)
                    } else {
                        egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
                    };
                    egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let body = ui.scope(|ui| {
                                ui.set_width((ui.available_width() - 32.0).max(0.0));
                                draw_element(ui, element);
                            });
                            if body.response.interact(egui::Sense::click()).clicked() {
                                actions.push(CanvasAction::Select(id));
                            }
                            if ui.small_button("×").on_hover_text("Delete").clicked() {
                                actions.push(CanvasAction::Delete(id));
                            }
                        });
                    });
                    ui.add_space(6.0);
                }
            });
        });

        // A click inside the canvas that hit no element clears the selection.
        let background_click = actions.is_empty()
            && ui.input(|i| i.pointer.primary_clicked())
            && zone
                .response
                .hover_pos()
                .is_some();

        let session = app.session_mut();
        for action in actions {
            match action {
                CanvasAction::Select(id) => session.on_element_clicked(Some(id)),
                CanvasAction::Delete(id) => session.on_delete_requested(id),
            }
        }
        if background_click {
            session.on_element_clicked(None);
        }
        if let Some(kind) = dropped {
            session.on_element_dropped(*kind);
        }
    });
}
