use page_builder::element::{Content, Element, ElementKind, PropertyKey};
use page_builder::style::{self, Alignment, ButtonSize, FontSize, ImageWidth, resolve_color};
use page_builder::BuilderError;

fn create_test_heading() -> Element {
    Element::new(1, ElementKind::Heading)
}

fn create_test_button() -> Element {
    Element::new(2, ElementKind::Button)
}

#[test]
fn test_element_defaults() {
    let heading = create_test_heading();
    assert_eq!(heading.id(), 1);
    assert_eq!(heading.kind(), Some(ElementKind::Heading));
    assert_eq!(heading.property(PropertyKey::Text), Some("Your Heading Here"));
    assert_eq!(heading.property(PropertyKey::FontSize), Some("medium"));
    assert_eq!(heading.property(PropertyKey::Color), Some("#333333"));
    assert_eq!(heading.property(PropertyKey::Align), Some("left"));

    let image = Element::new(3, ElementKind::Image);
    assert_eq!(image.property(PropertyKey::Width), Some("100%"));
    assert_eq!(image.property(PropertyKey::Align), Some("left"));
    assert_eq!(image.property(PropertyKey::Alt), Some("Placeholder"));

    let button = create_test_button();
    assert_eq!(button.property(PropertyKey::Text), Some("Click Me"));
    assert_eq!(button.property(PropertyKey::BackgroundColor), Some("#2196f3"));
    assert_eq!(button.property(PropertyKey::TextColor), Some("#ffffff"));
    assert_eq!(button.property(PropertyKey::Size), Some("medium"));
    assert_eq!(button.property(PropertyKey::Link), Some(""));
}

#[test]
fn test_set_property_stores_raw_value() {
    let mut heading = create_test_heading();
    heading.set_property("fontSize", "large").unwrap();
    heading.set_property("color", "rgb(255, 0, 0)").unwrap();

    // Stored as entered; resolution happens at render time
    assert_eq!(heading.property(PropertyKey::FontSize), Some("large"));
    assert_eq!(heading.property(PropertyKey::Color), Some("rgb(255, 0, 0)"));
}

#[test]
fn test_set_property_rejects_foreign_property() {
    let mut heading = create_test_heading();
    let before = heading.clone();

    let err = heading.set_property("link", "https://example.com").unwrap_err();
    assert!(matches!(
        err,
        BuilderError::InvalidProperty { ref kind, ref property } if kind == "heading" && property == "link"
    ));

    let err = heading.set_property("no-such-property", "x").unwrap_err();
    assert!(matches!(err, BuilderError::InvalidProperty { .. }));

    assert_eq!(heading, before);
}

#[test]
fn test_unrecognized_tag() {
    let mut element = Element::from_tag(7, "carousel");
    assert_eq!(element.kind(), None);
    assert_eq!(element.tag(), "carousel");
    assert!(matches!(element.content(), Content::Unrecognized { tag } if tag == "carousel"));
    assert!(element.set_property("text", "hi").is_err());
}

#[test]
fn test_empty_and_default_gray_resolve_alike() {
    assert_eq!(resolve_color(""), "#333333");
    assert_eq!(resolve_color("rgb(51,51,51)"), "#333333");
    assert_eq!(resolve_color("rgb(51, 51, 51)"), "#333333");
}

#[test]
fn test_color_normalization() {
    assert_eq!(resolve_color("rgb(33, 150, 243)"), "#2196f3");
    assert_eq!(resolve_color("rgb(0, 0, 5)"), "#000005");
    assert_eq!(resolve_color("#FF8800"), "#ff8800");
    // fewer than three components
    assert_eq!(resolve_color("rgb(10, 20)"), "#333333");
    assert_eq!(resolve_color("tomato"), "#333333");
}

#[test]
fn test_enum_tags_and_css_values() {
    assert_eq!(FontSize::resolve("large"), FontSize::Large);
    assert_eq!(FontSize::resolve("1.5rem"), FontSize::Small);
    assert_eq!(FontSize::resolve("huge"), FontSize::Medium);
    assert_eq!(FontSize::resolve(""), FontSize::Medium);

    assert_eq!(ImageWidth::resolve("50%"), ImageWidth::Half);
    assert_eq!(ImageWidth::resolve("quarter"), ImageWidth::Quarter);
    assert_eq!(ImageWidth::resolve("bogus"), ImageWidth::Full);

    assert_eq!(Alignment::resolve(" Center "), Alignment::Center);
    assert_eq!(Alignment::resolve("justify"), Alignment::Left);
}

#[test]
fn test_button_size_pairs() {
    let small = style::resolve(ElementKind::Button, PropertyKey::Size, Some("small"));
    assert_eq!(small.element.to_string(), "padding: 0.5rem 1rem; font-size: 0.875rem;");

    let medium = style::resolve(ElementKind::Button, PropertyKey::Size, None);
    assert_eq!(medium.element.to_string(), "padding: 0.75rem 1.5rem; font-size: 1rem;");

    let large = style::resolve(ElementKind::Button, PropertyKey::Size, Some("large"));
    assert_eq!(large.element.get("padding"), Some(ButtonSize::Large.padding()));
    assert_eq!(large.element.get("font-size"), Some("1.125rem"));
}

#[test]
fn test_absent_values_use_property_defaults() {
    let bg = style::resolve(ElementKind::Button, PropertyKey::BackgroundColor, None);
    assert_eq!(bg.element.get("background-color"), Some("#2196f3"));

    let size = style::resolve(ElementKind::Heading, PropertyKey::FontSize, None);
    assert_eq!(size.element.get("font-size"), Some("2rem"));

    let width = style::resolve(ElementKind::Image, PropertyKey::Width, None);
    assert_eq!(width.element.get("width"), Some("100%"));
}

#[test]
fn test_alignment_targets() {
    // Heading aligns itself
    let heading = style::resolve(ElementKind::Heading, PropertyKey::Align, Some("right"));
    assert_eq!(heading.element.get("text-align"), Some("right"));
    assert!(heading.container.is_empty());

    // Image aligns its container and resets its own margin
    let image = style::resolve(ElementKind::Image, PropertyKey::Align, Some("center"));
    assert_eq!(image.container.get("text-align"), Some("center"));
    assert_eq!(image.element.get("margin"), Some("0 auto"));
    assert_eq!(image.element.get("text-align"), None);

    let image = style::resolve(ElementKind::Image, PropertyKey::Align, Some("right"));
    assert_eq!(image.element.get("margin"), Some("0 0 0 auto"));

    // Button aligns its container only
    let button = style::resolve(ElementKind::Button, PropertyKey::Align, Some("center"));
    assert_eq!(button.container.get("text-align"), Some("center"));
    assert!(button.element.is_empty());
}

#[test]
fn test_content_properties_have_no_style() {
    assert!(style::resolve(ElementKind::Heading, PropertyKey::Text, Some("Hi")).is_empty());
    assert!(style::resolve(ElementKind::Button, PropertyKey::Link, Some("https://x.y")).is_empty());
    assert!(style::resolve(ElementKind::Heading, PropertyKey::Width, None).is_empty());
}
