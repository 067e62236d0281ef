use crate::element::{ElementId, ElementKind, PropertyKey};

#[derive(Debug, Clone, PartialEq)]
pub enum BuilderEvent {
    ElementAdded {
        id: ElementId,
        /// `None` for drops whose tag names no known kind
        kind: Option<ElementKind>,
    },
    ElementRemoved {
        id: ElementId,
    },
    SelectionChanged {
        old: Option<ElementId>,
        new: Option<ElementId>,
    },
    PropertyChanged {
        id: ElementId,
        property: PropertyKey,
        value: String,
    },
    PreviewRendered {
        bytes: usize,
    },
    Exported {
        file_name: String,
        bytes: usize,
    },
}
