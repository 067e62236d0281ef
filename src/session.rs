use crate::config::ExportConfig;
use crate::document::Document;
use crate::element::{ElementId, ElementKind, PropertyKey};
use crate::error::BuilderResult;
use crate::event::{BuilderEvent, EventBus};
use crate::markup::{self, ExportArtifact, RenderMode};
use crate::properties::{self, ColorDraft, FieldEvent, PanelState};

/// One editing session: the document plus the operations a UI calls into.
///
/// Every mutation goes through here so subscribers on [`BuilderSession::events`]
/// see it. The document is owned by the session and only lent out read-only.
#[derive(Debug, Default)]
pub struct BuilderSession {
    document: Document,
    events: EventBus,
    export: ExportConfig,
}

impl BuilderSession {
    pub fn new(export: ExportConfig) -> Self {
        Self {
            document: Document::new(),
            events: EventBus::new(),
            export,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn export_config(&self) -> &ExportConfig {
        &self.export
    }

    /// An element of `kind` was dropped on the canvas: append it and select it
    pub fn on_element_dropped(&mut self, kind: ElementKind) -> ElementId {
        self.on_tag_dropped(kind.tag())
    }

    /// Like [`Self::on_element_dropped`], for a raw drag payload tag
    pub fn on_tag_dropped(&mut self, tag: &str) -> ElementId {
        let element = self.document.append_tag(tag);
        let (id, kind) = (element.id(), element.kind());
        log::info!("Added {} element {}", tag, id);
        self.events.emit(BuilderEvent::ElementAdded { id, kind });
        self.select(Some(id));
        id
    }

    /// An element (or the empty canvas, with `None`) was clicked
    pub fn on_element_clicked(&mut self, id: Option<ElementId>) {
        self.select(id);
    }

    pub fn on_delete_requested(&mut self, id: ElementId) {
        let old = self.document.selected_id();
        if self.document.delete(id).is_none() {
            return;
        }
        log::info!("Deleted element {}", id);
        self.events.emit(BuilderEvent::ElementRemoved { id });
        self.emit_selection_change(old);
    }

    /// A properties panel field called `name` changed
    pub fn on_field_changed(&mut self, name: &str, event: FieldEvent, value: &str) -> BuilderResult<bool> {
        let changed = properties::apply_field_event(&mut self.document, name, event, value)
            .inspect_err(|err| log::warn!("Rejected edit of `{}`: {}", name, err))?;
        if changed {
            // apply_field_event only changes a selected element with a known property.
            if let (Some(id), Some(property)) = (self.document.selected_id(), PropertyKey::from_name(name)) {
                log::debug!("Element {} {} = {:?}", id, name, value);
                self.events.emit(BuilderEvent::PropertyChanged {
                    id,
                    property,
                    value: value.to_owned(),
                });
            }
        }
        Ok(changed)
    }

    /// A color picker closed. The draft is committed if its element is still
    /// the selected one, and dropped otherwise.
    pub fn on_color_committed(&mut self, draft: ColorDraft) -> BuilderResult<bool> {
        if self.document.selected_id() != Some(draft.element_id) {
            log::debug!("Dropping color for element {}, no longer selected", draft.element_id);
            return Ok(false);
        }
        self.on_field_changed(draft.key.name(), FieldEvent::Commit, &draft.hex())
    }

    /// The panel's own delete action
    pub fn on_panel_delete(&mut self) -> PanelState {
        if let Some(id) = self.document.selected_id() {
            self.on_delete_requested(id);
        }
        self.panel()
    }

    pub fn panel(&self) -> PanelState {
        properties::panel_state(&self.document)
    }

    pub fn on_preview_requested(&self) -> String {
        let html = markup::render(&self.document, RenderMode::Preview);
        log::info!("Rendered preview of {} elements", self.document.len());
        self.events.emit(BuilderEvent::PreviewRendered { bytes: html.len() });
        html
    }

    pub fn on_export_requested(&self) -> ExportArtifact {
        let artifact = ExportArtifact::new(&self.document, &self.export);
        log::info!("Rendered export {} ({} elements)", artifact.file_name, self.document.len());
        self.events.emit(BuilderEvent::Exported {
            file_name: artifact.file_name.clone(),
            bytes: artifact.contents.len(),
        });
        artifact
    }

    fn select(&mut self, id: Option<ElementId>) {
        let old = self.document.selected_id();
        self.document.select(id);
        self.emit_selection_change(old);
    }

    fn emit_selection_change(&self, old: Option<ElementId>) {
        let new = self.document.selected_id();
        if old != new {
            log::debug!("Selection {:?} -> {:?}", old, new);
            self.events.emit(BuilderEvent::SelectionChanged { old, new });
        }
    }
}
