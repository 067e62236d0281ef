use serde::Serialize;

use crate::element::{Element, ElementId, ElementKind};
use crate::error::{BuilderError, BuilderResult};
use crate::id_generator::IdGenerator;

/// The page being built: elements in insertion order plus at most one selection.
///
/// Insertion order is both the visual order on the canvas and the order the
/// renderer emits. Elements are only ever appended at the end or removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    #[serde(skip)]
    ids: IdGenerator,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new element of `kind` with default properties
    pub fn append(&mut self, kind: ElementKind) -> &Element {
        let id = self.ids.generate_id();
        self.push(Element::new(id, kind))
    }

    /// Append an element from a drop tag. Tags naming no known kind still
    /// produce an (unrecognized) element.
    pub fn append_tag(&mut self, tag: &str) -> &Element {
        let id = self.ids.generate_id();
        self.push(Element::from_tag(id, tag))
    }

    fn push(&mut self, element: Element) -> &Element {
        log::debug!("Appending {} element {}", element.tag(), element.id());
        let index = self.elements.len();
        self.elements.push(element);
        &self.elements[index]
    }

    /// Select an element, or clear the selection with `None`.
    ///
    /// Selecting an id that is not in the document clears the selection.
    /// Returns the selection after the call.
    pub fn select(&mut self, id: Option<ElementId>) -> Option<ElementId> {
        self.selected = id.filter(|id| self.contains(*id));
        if id.is_some() && self.selected.is_none() {
            log::debug!("Select of missing element {:?}; selection cleared", id);
        }
        self.selected
    }

    /// Remove an element. Absent ids are a no-op.
    pub fn delete(&mut self, id: ElementId) -> Option<Element> {
        let Some(index) = self.index_of(id) else {
            log::debug!("Delete of missing element {}", id);
            return None;
        };
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.elements.remove(index))
    }

    /// Set a property on the element with `id`
    pub fn set_property(&mut self, id: ElementId, name: &str, value: &str) -> BuilderResult<()> {
        let Some(index) = self.index_of(id) else {
            return Err(BuilderError::NotFound(id));
        };
        self.elements[index].set_property(name, value)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }
}
