use serde::{Deserialize, Serialize};

use super::{ElementKind, PropertyKey};

const DEFAULT_HEADING_TEXT: &str = "Your Heading Here";
const DEFAULT_HEADING_COLOR: &str = "#333333";
const DEFAULT_IMAGE_SRC: &str =
    "https://via.placeholder.com/300x200/667eea/white?text=Your+Image";
const DEFAULT_IMAGE_ALT: &str = "Placeholder";
const DEFAULT_BUTTON_TEXT: &str = "Click Me";
const DEFAULT_BUTTON_BACKGROUND: &str = "#2196f3";
const DEFAULT_BUTTON_TEXT_COLOR: &str = "#ffffff";

/// The value a property of `kind` holds before the user touches it.
///
/// `None` when the property is not legal for the kind.
pub fn default_value(kind: ElementKind, key: PropertyKey) -> Option<&'static str> {
    use PropertyKey::*;
    let value = match (kind, key) {
        (ElementKind::Heading, Text) => DEFAULT_HEADING_TEXT,
        (ElementKind::Heading, FontSize) => "medium",
        (ElementKind::Heading, Color) => DEFAULT_HEADING_COLOR,
        (ElementKind::Image, Src) => DEFAULT_IMAGE_SRC,
        (ElementKind::Image, Alt) => DEFAULT_IMAGE_ALT,
        (ElementKind::Image, Width) => "100%",
        (ElementKind::Button, Text) => DEFAULT_BUTTON_TEXT,
        (ElementKind::Button, BackgroundColor) => DEFAULT_BUTTON_BACKGROUND,
        (ElementKind::Button, TextColor) => DEFAULT_BUTTON_TEXT_COLOR,
        (ElementKind::Button, Size) => "medium",
        (ElementKind::Button, Link) => "",
        (_, Align) => "left",
        _ => return None,
    };
    Some(value)
}

fn seed(kind: ElementKind, key: PropertyKey) -> String {
    default_value(kind, key).unwrap_or_default().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingProps {
    pub text: String,
    pub font_size: String,
    pub color: String,
    pub align: String,
}

impl Default for HeadingProps {
    fn default() -> Self {
        use PropertyKey::*;
        Self {
            text: seed(ElementKind::Heading, Text),
            font_size: seed(ElementKind::Heading, FontSize),
            color: seed(ElementKind::Heading, Color),
            align: seed(ElementKind::Heading, Align),
        }
    }
}

impl HeadingProps {
    pub(crate) fn get(&self, key: PropertyKey) -> Option<&str> {
        let value = match key {
            PropertyKey::Text => &self.text,
            PropertyKey::FontSize => &self.font_size,
            PropertyKey::Color => &self.color,
            PropertyKey::Align => &self.align,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub(crate) fn get_mut(&mut self, key: PropertyKey) -> Option<&mut String> {
        match key {
            PropertyKey::Text => Some(&mut self.text),
            PropertyKey::FontSize => Some(&mut self.font_size),
            PropertyKey::Color => Some(&mut self.color),
            PropertyKey::Align => Some(&mut self.align),
            _ => None,
        }
    }
}

/// Image properties. `align` positions the image inside its container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
    pub width: String,
    pub align: String,
}

impl Default for ImageProps {
    fn default() -> Self {
        use PropertyKey::*;
        Self {
            src: seed(ElementKind::Image, Src),
            alt: seed(ElementKind::Image, Alt),
            width: seed(ElementKind::Image, Width),
            align: seed(ElementKind::Image, Align),
        }
    }
}

impl ImageProps {
    pub(crate) fn get(&self, key: PropertyKey) -> Option<&str> {
        let value = match key {
            PropertyKey::Src => &self.src,
            PropertyKey::Alt => &self.alt,
            PropertyKey::Width => &self.width,
            PropertyKey::Align => &self.align,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub(crate) fn get_mut(&mut self, key: PropertyKey) -> Option<&mut String> {
        match key {
            PropertyKey::Src => Some(&mut self.src),
            PropertyKey::Alt => Some(&mut self.alt),
            PropertyKey::Width => Some(&mut self.width),
            PropertyKey::Align => Some(&mut self.align),
            _ => None,
        }
    }
}

/// Button properties. An empty `link` means the button is not wrapped in an anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    pub text: String,
    pub background_color: String,
    pub text_color: String,
    pub size: String,
    pub align: String,
    pub link: String,
}

impl Default for ButtonProps {
    fn default() -> Self {
        use PropertyKey::*;
        Self {
            text: seed(ElementKind::Button, Text),
            background_color: seed(ElementKind::Button, BackgroundColor),
            text_color: seed(ElementKind::Button, TextColor),
            size: seed(ElementKind::Button, Size),
            align: seed(ElementKind::Button, Align),
            link: seed(ElementKind::Button, Link),
        }
    }
}

impl ButtonProps {
    pub(crate) fn get(&self, key: PropertyKey) -> Option<&str> {
        let value = match key {
            PropertyKey::Text => &self.text,
            PropertyKey::BackgroundColor => &self.background_color,
            PropertyKey::TextColor => &self.text_color,
            PropertyKey::Size => &self.size,
            PropertyKey::Align => &self.align,
            PropertyKey::Link => &self.link,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub(crate) fn get_mut(&mut self, key: PropertyKey) -> Option<&mut String> {
        match key {
            PropertyKey::Text => Some(&mut self.text),
            PropertyKey::BackgroundColor => Some(&mut self.background_color),
            PropertyKey::TextColor => Some(&mut self.text_color),
            PropertyKey::Size => Some(&mut self.size),
            PropertyKey::Align => Some(&mut self.align),
            PropertyKey::Link => Some(&mut self.link),
            _ => None,
        }
    }

    /// The link target, if one is set. Whitespace-only links count as unset.
    pub fn link_target(&self) -> Option<&str> {
        if self.link.trim().is_empty() {
            None
        } else {
            Some(self.link.as_str())
        }
    }
}
