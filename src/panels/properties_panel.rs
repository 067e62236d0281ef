use crate::element::ElementId;
use crate::properties::{
    ColorDraft, ColorDrafts, Field, FieldControl, FieldEvent, PanelState, NO_SELECTION_TEXT,
};
use crate::style::parse_color;
use crate::PageBuilderApp;

/// An edit collected while drawing, applied once the panel is drawn
struct Edit {
    name: &'static str,
    event: FieldEvent,
    value: String,
}

/// What the fields produced this frame
#[derive(Default)]
struct Collected {
    edits: Vec<Edit>,
    colors: Vec<ColorDraft>,
}

fn field_widget(
    ui: &mut egui::Ui,
    element_id: ElementId,
    field: &Field,
    drafts: &ColorDrafts,
    out: &mut Collected,
) {
    ui.label(field.label);
    match field.control {
        FieldControl::Text | FieldControl::Url => {
            let mut value = field.value.clone();
            let mut edit = egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY);
            if let Some(placeholder) = field.placeholder {
                edit = edit.hint_text(placeholder);
            }
            if ui.add(edit).changed() {
                out.edits.push(Edit {
                    name: field.key.name(),
                    event: FieldEvent::Input,
                    value,
                });
            }
        }
        FieldControl::Select(choices) => {
            let options = choices.options();
            let mut selected = field.value.clone();
            let current = options
                .iter()
                .find(|option| option.value == selected)
                .map(|option| option.label)
                .unwrap_or_default();
            egui::ComboBox::from_id_salt(field.key.name())
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for option in &options {
                        ui.selectable_value(&mut selected, option.value.to_owned(), option.label);
                    }
                });
            if selected != field.value {
                out.edits.push(Edit {
                    name: field.key.name(),
                    event: FieldEvent::Commit,
                    value: selected,
                });
            }
        }
        FieldControl::Color => {
            let stored = parse_color(&field.value).unwrap_or([0x33, 0x33, 0x33]);
            let mut rgb = drafts.get(element_id, field.key).unwrap_or(stored);
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                out.colors.push(ColorDraft {
                    element_id,
                    key: field.key,
                    rgb,
                });
            }
        }
    }
    if let Some(hint) = &field.hint {
        ui.weak(hint);
    }
    ui.add_space(6.0);
}

pub fn properties_panel(app: &mut PageBuilderApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Properties");
            ui.separator();

            let mut collected = Collected::default();
            let mut delete = false;
            match app.session().panel() {
                PanelState::Placeholder => {
                    ui.weak(NO_SELECTION_TEXT);
                }
                PanelState::Editing { element_id, fields, .. } => {
                    for field in &fields {
                        field_widget(ui, element_id, field, app.color_drafts(), &mut collected);
                    }
                    if ui.button("Delete Element").clicked() {
                        delete = true;
                    }
                }
            }
            let picker_open = ui.memory(|memory| memory.any_popup_open());

            // Picker drags only update the draft; the document sees the color
            // once the picker closes.
            let mut commits = Vec::new();
            let drafts = app.color_drafts_mut();
            for draft in collected.colors {
                commits.extend(drafts.update(draft));
            }
            commits.extend(drafts.finish(picker_open));

            let session = app.session_mut();
            for draft in commits {
                if let Err(err) = session.on_color_committed(draft) {
                    log::warn!("Color commit failed: {}", err);
                }
            }
            for edit in collected.edits {
                if let Err(err) = session.on_field_changed(edit.name, edit.event, &edit.value) {
                    log::warn!("Properties panel edit failed: {}", err);
                }
            }
            if delete {
                session.on_panel_delete();
            }
        });
}
