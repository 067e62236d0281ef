use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BuilderError, BuilderResult};

mod props;

pub use props::{ButtonProps, HeadingProps, ImageProps, default_value};

/// Identifier of an element, unique within its document
pub type ElementId = usize;

/// The block types that can be placed on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Heading,
    Image,
    Button,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [ElementKind::Heading, ElementKind::Image, ElementKind::Button];

    /// The tag carried by toolbar drag sources
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Heading => "heading",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Heading => "Heading",
            ElementKind::Image => "Image",
            ElementKind::Button => "Button",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Properties legal for this kind, in the order their styles are emitted
    pub fn properties(self) -> &'static [PropertyKey] {
        use PropertyKey::*;
        match self {
            ElementKind::Heading => &[Text, FontSize, Color, Align],
            ElementKind::Image => &[Src, Alt, Width, Align],
            ElementKind::Button => &[Text, BackgroundColor, TextColor, Size, Align, Link],
        }
    }

    pub fn accepts(self, key: PropertyKey) -> bool {
        self.properties().contains(&key)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Names of the editable properties across all kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKey {
    Text,
    FontSize,
    Color,
    Align,
    Src,
    Alt,
    Width,
    BackgroundColor,
    TextColor,
    Size,
    Link,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 11] = [
        PropertyKey::Text,
        PropertyKey::FontSize,
        PropertyKey::Color,
        PropertyKey::Align,
        PropertyKey::Src,
        PropertyKey::Alt,
        PropertyKey::Width,
        PropertyKey::BackgroundColor,
        PropertyKey::TextColor,
        PropertyKey::Size,
        PropertyKey::Link,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PropertyKey::Text => "text",
            PropertyKey::FontSize => "fontSize",
            PropertyKey::Color => "color",
            PropertyKey::Align => "align",
            PropertyKey::Src => "src",
            PropertyKey::Alt => "alt",
            PropertyKey::Width => "width",
            PropertyKey::BackgroundColor => "backgroundColor",
            PropertyKey::TextColor => "textColor",
            PropertyKey::Size => "size",
            PropertyKey::Link => "link",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific property storage of an element.
///
/// `Unrecognized` holds drops whose tag names no known kind. Such elements
/// take part in ordering, selection and deletion but have no properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Heading(HeadingProps),
    Image(ImageProps),
    Button(ButtonProps),
    Unrecognized { tag: String },
}

impl Content {
    fn new(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Heading => Content::Heading(HeadingProps::default()),
            ElementKind::Image => Content::Image(ImageProps::default()),
            ElementKind::Button => Content::Button(ButtonProps::default()),
        }
    }
}

/// One placed block on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    content: Content,
}

impl Element {
    /// Create an element of `kind` with every property at its default
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            content: Content::new(kind),
        }
    }

    /// Create an element from a drop tag; unknown tags become `Unrecognized`
    pub fn from_tag(id: ElementId, tag: &str) -> Self {
        match ElementKind::from_tag(tag) {
            Some(kind) => Self::new(id, kind),
            None => Self {
                id,
                content: Content::Unrecognized {
                    tag: tag.to_string(),
                },
            },
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// `None` for unrecognized elements
    pub fn kind(&self) -> Option<ElementKind> {
        match &self.content {
            Content::Heading(_) => Some(ElementKind::Heading),
            Content::Image(_) => Some(ElementKind::Image),
            Content::Button(_) => Some(ElementKind::Button),
            Content::Unrecognized { .. } => None,
        }
    }

    pub fn tag(&self) -> &str {
        match &self.content {
            Content::Unrecognized { tag } => tag,
            _ => self.kind().map(ElementKind::tag).unwrap_or_default(),
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The stored, user-facing value of a property
    pub fn property(&self, key: PropertyKey) -> Option<&str> {
        match &self.content {
            Content::Heading(props) => props.get(key),
            Content::Image(props) => props.get(key),
            Content::Button(props) => props.get(key),
            Content::Unrecognized { .. } => None,
        }
    }

    /// Replace the stored value of the property called `name`.
    ///
    /// The value is stored as given; it is only interpreted when styles are
    /// resolved at render time.
    pub fn set_property(&mut self, name: &str, value: impl Into<String>) -> BuilderResult<()> {
        let key = PropertyKey::from_name(name)
            .filter(|key| self.kind().is_some_and(|kind| kind.accepts(*key)));
        let Some(key) = key else {
            return Err(self.invalid_property(name));
        };
        let slot = match &mut self.content {
            Content::Heading(props) => props.get_mut(key),
            Content::Image(props) => props.get_mut(key),
            Content::Button(props) => props.get_mut(key),
            Content::Unrecognized { .. } => None,
        };
        if let Some(slot) = slot {
            *slot = value.into();
        }
        Ok(())
    }

    pub(crate) fn invalid_property(&self, name: &str) -> BuilderError {
        BuilderError::InvalidProperty {
            kind: self.tag().to_string(),
            property: name.to_string(),
        }
    }
}
