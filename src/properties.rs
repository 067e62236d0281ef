//! The bridge between the properties panel and the document.
//!
//! The panel is described as data: [`panel_state`] lists the editable fields of
//! the selected element with their current values, and edits come back through
//! [`apply_field_event`]. Text-like fields apply on every keystroke
//! ([`FieldEvent::Input`]); select and color fields only when the user commits
//! a choice ([`FieldEvent::Commit`]).

use crate::document::Document;
use crate::element::{Element, ElementId, ElementKind, PropertyKey};
use crate::error::BuilderResult;
use crate::style::{resolve_color, to_hex, Alignment, ButtonSize, FontSize, ImageWidth};

pub const NO_SELECTION_TEXT: &str = "Select an element to edit its properties";
pub const LINK_PLACEHOLDER: &str = "https://example.com";

/// One choice of a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The closed set of values a select field offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choices {
    FontSize,
    ButtonSize,
    Align,
    Width,
}

impl Choices {
    pub fn options(self) -> Vec<FieldOption> {
        fn collect<T: Copy>(
            all: [T; 3],
            value: fn(T) -> &'static str,
            label: fn(T) -> &'static str,
        ) -> Vec<FieldOption> {
            all.into_iter()
                .map(|choice| FieldOption {
                    value: value(choice),
                    label: label(choice),
                })
                .collect()
        }
        match self {
            Choices::FontSize => collect(FontSize::ALL, FontSize::tag, FontSize::label),
            Choices::ButtonSize => collect(ButtonSize::ALL, ButtonSize::tag, ButtonSize::label),
            Choices::Align => collect(Alignment::ALL, Alignment::tag, Alignment::label),
            Choices::Width => collect(ImageWidth::ALL, ImageWidth::tag, ImageWidth::label),
        }
    }

    /// The option a stored raw value resolves to
    pub fn resolve(self, raw: &str) -> &'static str {
        match self {
            Choices::FontSize => FontSize::resolve(raw).tag(),
            Choices::ButtonSize => ButtonSize::resolve(raw).tag(),
            Choices::Align => Alignment::resolve(raw).tag(),
            Choices::Width => ImageWidth::resolve(raw).tag(),
        }
    }
}

/// The widget a field is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    Text,
    Url,
    Color,
    Select(Choices),
}

impl FieldControl {
    pub fn cadence(self) -> Cadence {
        match self {
            FieldControl::Text | FieldControl::Url => Cadence::Live,
            FieldControl::Color | FieldControl::Select(_) => Cadence::Commit,
        }
    }
}

/// When edits of a field reach the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Every keystroke
    Live,
    /// Only when a choice is committed
    Commit,
}

/// An edit event coming from the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Input,
    Commit,
}

impl FieldEvent {
    fn matches(self, cadence: Cadence) -> bool {
        matches!(
            (self, cadence),
            (FieldEvent::Input, Cadence::Live) | (FieldEvent::Commit, Cadence::Commit)
        )
    }
}

/// A color picked for one field but not yet committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDraft {
    pub element_id: ElementId,
    pub key: PropertyKey,
    pub rgb: [u8; 3],
}

impl ColorDraft {
    pub fn hex(&self) -> String {
        to_hex(self.rgb)
    }

    fn targets(&self, element_id: ElementId, key: PropertyKey) -> bool {
        self.element_id == element_id && self.key == key
    }
}

/// Holds the color under the open picker.
///
/// A picker reports a change on every drag frame; the document only sees the
/// last color, once the picker closes.
#[derive(Debug, Default)]
pub struct ColorDrafts {
    current: Option<ColorDraft>,
}

impl ColorDrafts {
    /// The drafted color of `key` on `element_id`, if it is being picked
    pub fn get(&self, element_id: ElementId, key: PropertyKey) -> Option<[u8; 3]> {
        self.current
            .filter(|draft| draft.targets(element_id, key))
            .map(|draft| draft.rgb)
    }

    /// Record a picker change. A draft for a different field is handed back
    /// so it can still be committed.
    pub fn update(&mut self, draft: ColorDraft) -> Option<ColorDraft> {
        self.current
            .replace(draft)
            .filter(|previous| !previous.targets(draft.element_id, draft.key))
    }

    /// Take the draft to commit once no picker is open
    pub fn finish(&mut self, picker_open: bool) -> Option<ColorDraft> {
        if picker_open { None } else { self.current.take() }
    }
}

#[derive(Debug, Clone, Copy)]
struct FieldDescriptor {
    key: PropertyKey,
    label: &'static str,
    control: FieldControl,
}

const fn field(key: PropertyKey, label: &'static str, control: FieldControl) -> FieldDescriptor {
    FieldDescriptor { key, label, control }
}

fn descriptors(kind: ElementKind) -> &'static [FieldDescriptor] {
    use FieldControl::*;
    use PropertyKey as P;
    const HEADING: &[FieldDescriptor] = &[
        field(P::Text, "Text Content", Text),
        field(P::FontSize, "Font Size", Select(Choices::FontSize)),
        field(P::Color, "Text Color", Color),
        field(P::Align, "Text Alignment", Select(Choices::Align)),
    ];
    const IMAGE: &[FieldDescriptor] = &[
        field(P::Src, "Image URL", Url),
        field(P::Alt, "Alt Text", Text),
        field(P::Align, "Image Alignment", Select(Choices::Align)),
        field(P::Width, "Width", Select(Choices::Width)),
    ];
    const BUTTON: &[FieldDescriptor] = &[
        field(P::Text, "Button Text", Text),
        field(P::BackgroundColor, "Background Color", Color),
        field(P::TextColor, "Text Color", Color),
        field(P::Size, "Button Size", Select(Choices::ButtonSize)),
        field(P::Align, "Button Alignment", Select(Choices::Align)),
        field(P::Link, "Link URL", Url),
    ];
    match kind {
        ElementKind::Heading => HEADING,
        ElementKind::Image => IMAGE,
        ElementKind::Button => BUTTON,
    }
}

/// An editable field with the value the panel should show
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: PropertyKey,
    pub label: &'static str,
    pub control: FieldControl,
    pub cadence: Cadence,
    /// Raw text for text fields, the normalized hex for colors, and the
    /// resolved option value for selects
    pub value: String,
    pub placeholder: Option<&'static str>,
    /// Extra line shown under the field
    pub hint: Option<String>,
}

/// What the properties panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    /// Nothing is selected
    Placeholder,
    Editing {
        element_id: ElementId,
        /// `None` for unrecognized elements, which have no fields
        kind: Option<ElementKind>,
        fields: Vec<Field>,
    },
}

impl PanelState {
    pub fn fields(&self) -> &[Field] {
        match self {
            PanelState::Placeholder => &[],
            PanelState::Editing { fields, .. } => fields,
        }
    }

    pub fn field(&self, key: PropertyKey) -> Option<&Field> {
        self.fields().iter().find(|field| field.key == key)
    }
}

/// Describe the panel for the current selection
pub fn panel_state(document: &Document) -> PanelState {
    match document.selected() {
        None => PanelState::Placeholder,
        Some(element) => PanelState::Editing {
            element_id: element.id(),
            kind: element.kind(),
            fields: fields_for(element),
        },
    }
}

fn fields_for(element: &Element) -> Vec<Field> {
    let Some(kind) = element.kind() else {
        return Vec::new();
    };
    descriptors(kind)
        .iter()
        .map(|descriptor| {
            let raw = element.property(descriptor.key).unwrap_or_default();
            Field {
                key: descriptor.key,
                label: descriptor.label,
                control: descriptor.control,
                cadence: descriptor.control.cadence(),
                value: display_value(descriptor.control, raw),
                placeholder: (descriptor.key == PropertyKey::Link).then_some(LINK_PLACEHOLDER),
                hint: hint(descriptor.key, raw),
            }
        })
        .collect()
}

fn display_value(control: FieldControl, raw: &str) -> String {
    match control {
        FieldControl::Select(choices) => choices.resolve(raw).to_owned(),
        FieldControl::Color => resolve_color(raw),
        FieldControl::Text | FieldControl::Url => raw.to_owned(),
    }
}

fn hint(key: PropertyKey, raw: &str) -> Option<String> {
    (key == PropertyKey::Link && !raw.trim().is_empty()).then(|| format!("Links to: {raw}"))
}

/// Forward a panel edit of the field called `name` to the selected element.
///
/// Returns `Ok(true)` when the document changed. Events with the wrong cadence
/// for the field (an `Input` on a select, a `Commit` on a text box) are ignored
/// and return `Ok(false)`. So are events arriving with nothing selected: the
/// panel shows no fields then, so such an event is left over from an element
/// deselected or deleted in the same frame and names no element to update.
pub fn apply_field_event(
    document: &mut Document,
    name: &str,
    event: FieldEvent,
    value: &str,
) -> BuilderResult<bool> {
    let Some(element) = document.selected() else {
        log::debug!("Ignoring edit of `{}` with nothing selected", name);
        return Ok(false);
    };
    let id = element.id();
    let descriptor = element.kind().and_then(|kind| {
        descriptors(kind)
            .iter()
            .find(|descriptor| descriptor.key.name() == name)
    });
    let Some(descriptor) = descriptor else {
        return Err(element.invalid_property(name));
    };
    if !event.matches(descriptor.control.cadence()) {
        return Ok(false);
    }
    document.set_property(id, name, value)?;
    Ok(true)
}

/// Delete the selected element from the panel's delete action and return the
/// refreshed panel
pub fn delete_selected(document: &mut Document) -> PanelState {
    if let Some(id) = document.selected_id() {
        document.delete(id);
    }
    panel_state(document)
}
