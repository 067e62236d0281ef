//! Style resolution: turns stored property values into concrete CSS.
//!
//! Stored values are whatever the user entered (an enum tag such as `large`, a
//! color string, ...). Every lookup here is total: unknown tags fall back to the
//! documented default of the property, and malformed colors resolve to
//! [`DEFAULT_TEXT_COLOR`]. Nothing in this module touches a document.

use std::fmt;

use crate::element::{default_value, ElementKind, PropertyKey};

/// Fallback for empty or unparseable colors
pub const DEFAULT_TEXT_COLOR: &str = "#333333";

/// Text alignment of a heading, or of the container around an image or button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn resolve(raw: &str) -> Self {
        match normalize_tag(raw).as_str() {
            "center" => Alignment::Center,
            "right" => Alignment::Right,
            _ => Alignment::Left,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
        }
    }

    /// Margin that pushes a block-level image to this side of its container
    pub fn image_margin(self) -> &'static str {
        match self {
            Alignment::Left => "0 auto 0 0",
            Alignment::Center => "0 auto",
            Alignment::Right => "0 0 0 auto",
        }
    }
}

/// Heading font size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    /// Accepts the tag or the CSS value it stands for
    pub fn resolve(raw: &str) -> Self {
        match normalize_tag(raw).as_str() {
            "small" | "1.5rem" => FontSize::Small,
            "large" | "3rem" => FontSize::Large,
            _ => FontSize::Medium,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            FontSize::Small => "1.5rem",
            FontSize::Medium => "2rem",
            FontSize::Large => "3rem",
        }
    }

    pub fn rem(self) -> f32 {
        match self {
            FontSize::Small => 1.5,
            FontSize::Medium => 2.0,
            FontSize::Large => 3.0,
        }
    }
}

/// Image width relative to its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageWidth {
    #[default]
    Full,
    Half,
    Quarter,
}

impl ImageWidth {
    pub const ALL: [ImageWidth; 3] = [ImageWidth::Full, ImageWidth::Half, ImageWidth::Quarter];

    pub fn resolve(raw: &str) -> Self {
        match normalize_tag(raw).as_str() {
            "50%" | "half" => ImageWidth::Half,
            "25%" | "quarter" => ImageWidth::Quarter,
            _ => ImageWidth::Full,
        }
    }

    /// The stored tag is the CSS percentage itself
    pub fn tag(self) -> &'static str {
        self.css()
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageWidth::Full => "Full Width",
            ImageWidth::Half => "Half Width",
            ImageWidth::Quarter => "Quarter Width",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            ImageWidth::Full => "100%",
            ImageWidth::Half => "50%",
            ImageWidth::Quarter => "25%",
        }
    }

    pub fn fraction(self) -> f32 {
        match self {
            ImageWidth::Full => 1.0,
            ImageWidth::Half => 0.5,
            ImageWidth::Quarter => 0.25,
        }
    }
}

/// Button size. Padding and font size always come from the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    pub fn resolve(raw: &str) -> Self {
        match normalize_tag(raw).as_str() {
            "small" => ButtonSize::Small,
            "large" => ButtonSize::Large,
            _ => ButtonSize::Medium,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonSize::Small => "Small",
            ButtonSize::Medium => "Medium",
            ButtonSize::Large => "Large",
        }
    }

    pub fn padding(self) -> &'static str {
        match self {
            ButtonSize::Small => "0.5rem 1rem",
            ButtonSize::Medium => "0.75rem 1.5rem",
            ButtonSize::Large => "1rem 2rem",
        }
    }

    pub fn font_size(self) -> &'static str {
        match self {
            ButtonSize::Small => "0.875rem",
            ButtonSize::Medium => "1rem",
            ButtonSize::Large => "1.125rem",
        }
    }

    pub fn rem(self) -> f32 {
        match self {
            ButtonSize::Small => 0.875,
            ButtonSize::Medium => 1.0,
            ButtonSize::Large => 1.125,
        }
    }
}

fn normalize_tag(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Parse `#rgb`, `#rrggbb` or an `rgb(r, g, b)` style triple.
///
/// For the triple form the first three numeric runs are used, each clamped to
/// 255. Returns `None` for anything else.
pub fn parse_color(raw: &str) -> Option<[u8; 3]> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex(hex);
    }

    let mut channels = [0u8; 3];
    let mut found = 0;
    for run in raw.split(|c: char| !c.is_ascii_digit()).filter(|run| !run.is_empty()) {
        if found == channels.len() {
            break;
        }
        // Runs are all digits, so the only parse failure is overflow.
        let value = run.parse::<u64>().unwrap_or(u64::MAX).min(255);
        channels[found] = value as u8;
        found += 1;
    }
    (found == channels.len()).then_some(channels)
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits: Vec<u8> = match hex.len() {
        3 => hex.bytes().flat_map(|b| [b, b]).collect(),
        6 => hex.bytes().collect(),
        _ => return None,
    };
    let mut channels = [0u8; 3];
    for (channel, pair) in channels.iter_mut().zip(digits.chunks(2)) {
        let pair = std::str::from_utf8(pair).ok()?;
        *channel = u8::from_str_radix(pair, 16).ok()?;
    }
    Some(channels)
}

/// Format a color as lowercase `#rrggbb`
pub fn to_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Normalize any accepted color input to `#rrggbb`.
///
/// Empty or malformed input is not an error; it resolves to `#333333`.
pub fn resolve_color(raw: &str) -> String {
    parse_color(raw)
        .map(to_hex)
        .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string())
}

/// An ordered list of CSS declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(Vec<(&'static str, String)>);

impl Declarations {
    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.0.push((property, value.into()));
    }

    pub fn extend(&mut self, other: Declarations) {
        self.0.extend(other.0);
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders as an inline style attribute value: `a: 1; b: 2;`
impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}

/// Styles produced by one property.
///
/// `element` goes on the element's own tag. `container` goes on the block that
/// wraps it; only image and button alignment lands there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleFragment {
    pub element: Declarations,
    pub container: Declarations,
}

impl StyleFragment {
    pub fn merge(&mut self, other: StyleFragment) {
        self.element.extend(other.element);
        self.container.extend(other.container);
    }

    pub fn is_empty(&self) -> bool {
        self.element.is_empty() && self.container.is_empty()
    }
}

/// Resolve one property of an element of `kind` into concrete styles.
///
/// `raw` is the stored value, or `None` when the property was never set, in
/// which case the property's default is used. Content properties (text, src,
/// alt, link) and properties illegal for `kind` produce an empty fragment.
pub fn resolve(kind: ElementKind, key: PropertyKey, raw: Option<&str>) -> StyleFragment {
    let mut fragment = StyleFragment::default();
    let Some(value) = raw.or_else(|| default_value(kind, key)) else {
        return fragment;
    };

    match (kind, key) {
        (ElementKind::Heading, PropertyKey::FontSize) => {
            fragment.element.push("font-size", FontSize::resolve(value).css());
        }
        (ElementKind::Heading, PropertyKey::Color) => {
            fragment.element.push("color", resolve_color(value));
        }
        (ElementKind::Heading, PropertyKey::Align) => {
            fragment.element.push("text-align", Alignment::resolve(value).tag());
        }
        (ElementKind::Image, PropertyKey::Width) => {
            fragment.element.push("width", ImageWidth::resolve(value).css());
        }
        (ElementKind::Image, PropertyKey::Align) => {
            let align = Alignment::resolve(value);
            fragment.container.push("text-align", align.tag());
            fragment.element.push("display", "block");
            fragment.element.push("margin", align.image_margin());
        }
        (ElementKind::Button, PropertyKey::BackgroundColor) => {
            fragment.element.push("background-color", resolve_color(value));
        }
        (ElementKind::Button, PropertyKey::TextColor) => {
            fragment.element.push("color", resolve_color(value));
        }
        (ElementKind::Button, PropertyKey::Size) => {
            let size = ButtonSize::resolve(value);
            fragment.element.push("padding", size.padding());
            fragment.element.push("font-size", size.font_size());
        }
        (ElementKind::Button, PropertyKey::Align) => {
            fragment.container.push("text-align", Alignment::resolve(value).tag());
        }
        (ElementKind::Heading, PropertyKey::Text | PropertyKey::Src | PropertyKey::Alt)
        | (ElementKind::Heading, PropertyKey::Width | PropertyKey::BackgroundColor)
        | (ElementKind::Heading, PropertyKey::TextColor | PropertyKey::Size | PropertyKey::Link)
        | (ElementKind::Image, PropertyKey::Text | PropertyKey::FontSize | PropertyKey::Color)
        | (ElementKind::Image, PropertyKey::Src | PropertyKey::Alt | PropertyKey::Link)
        | (ElementKind::Image, PropertyKey::BackgroundColor | PropertyKey::TextColor)
        | (ElementKind::Image, PropertyKey::Size)
        | (ElementKind::Button, PropertyKey::Text | PropertyKey::FontSize | PropertyKey::Color)
        | (ElementKind::Button, PropertyKey::Src | PropertyKey::Alt | PropertyKey::Width)
        | (ElementKind::Button, PropertyKey::Link) => {}
    }
    fragment
}

/// Resolve every property of `kind` in declaration order, reading stored
/// values through `lookup`.
pub fn resolve_all<'a>(
    kind: ElementKind,
    lookup: impl Fn(PropertyKey) -> Option<&'a str>,
) -> StyleFragment {
    let mut fragment = StyleFragment::default();
    for &key in kind.properties() {
        fragment.merge(resolve(kind, key, lookup(key)));
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_shorthand_expands() {
        assert_eq!(parse_color("#abc"), Some([0xaa, 0xbb, 0xcc]));
        assert_eq!(resolve_color("#ABC"), "#aabbcc");
    }

    #[test]
    fn rgb_channels_clamp() {
        assert_eq!(parse_color("rgb(300, 0, 16)"), Some([255, 0, 16]));
        assert_eq!(resolve_color("rgb(300, 0, 16)"), "#ff0010");
    }

    #[test]
    fn extra_components_are_ignored() {
        assert_eq!(parse_color("rgba(1, 2, 3, 0.5)"), Some([1, 2, 3]));
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gggggg"), None);
    }

    #[test]
    fn declarations_display_inline() {
        let mut decls = Declarations::default();
        decls.push("a", "1");
        decls.push("b", "2");
        assert_eq!(decls.to_string(), "a: 1; b: 2;");
        assert_eq!(Declarations::default().to_string(), "");
    }
}
