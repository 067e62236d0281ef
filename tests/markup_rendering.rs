use page_builder::config::ExportConfig;
use page_builder::markup::{write_preview, PREVIEW_FILE_NAME};
use page_builder::{render, Document, ElementKind, ExportArtifact, RenderMode};

fn body_of(html: &str) -> &str {
    let start = html.find("<body>").expect("body open") + "<body>".len();
    let end = html.find("</body>").expect("body close");
    &html[start..end]
}

#[test]
fn test_heading_scenario() {
    let mut document = Document::new();
    let id = document.append(ElementKind::Heading).id();
    document.set_property(id, "text", "Hi").unwrap();
    document.set_property(id, "fontSize", "large").unwrap();

    let html = render(&document, RenderMode::Export);
    assert!(html.contains(
        r#"<h2 style="font-size: 3rem; color: #333333; text-align: left;">Hi</h2>"#
    ));
}

#[test]
fn test_heading_defaults_always_present() {
    let mut document = Document::new();
    document.append(ElementKind::Heading);

    let html = render(&document, RenderMode::Preview);
    assert!(html.contains(
        r#"<h2 style="font-size: 2rem; color: #333333; text-align: left;">Your Heading Here</h2>"#
    ));
}

#[test]
fn test_button_size_scenario() {
    let mut document = Document::new();
    let id = document.append(ElementKind::Button).id();
    document.set_property(id, "size", "small").unwrap();

    let html = render(&document, RenderMode::Export);
    assert!(html.contains(
        r#"<button style="background-color: #2196f3; color: #ffffff; padding: 0.5rem 1rem; font-size: 0.875rem;">Click Me</button>"#
    ));
}

#[test]
fn test_button_link_wrap_and_unwrap() {
    let mut document = Document::new();
    let id = document.append(ElementKind::Button).id();
    document.set_property(id, "align", "center").unwrap();
    document.set_property(id, "link", "https://example.com").unwrap();

    let linked = render(&document, RenderMode::Export);
    let expected = concat!(
        "    <div style=\"text-align: center; margin: 1rem 0;\">\n",
        "      <a href=\"https://example.com\" target=\"_blank\" style=\"text-decoration: none;\">\n",
        "        <button style=\"background-color: #2196f3; color: #ffffff; padding: 0.75rem 1.5rem; font-size: 1rem;\">Click Me</button>\n",
        "      </a>\n",
        "    </div>\n",
    );
    assert!(linked.contains(expected), "{linked}");

    document.set_property(id, "link", "").unwrap();
    let unlinked = render(&document, RenderMode::Export);
    assert!(!unlinked.contains("<a "));
    assert!(unlinked.contains(concat!(
        "    <div style=\"text-align: center; margin: 1rem 0;\">\n",
        "      <button style=\"background-color: #2196f3; color: #ffffff; padding: 0.75rem 1.5rem; font-size: 1rem;\">Click Me</button>\n",
        "    </div>\n",
    )));
}

#[test]
fn test_whitespace_link_is_not_a_link() {
    let mut document = Document::new();
    let id = document.append(ElementKind::Button).id();
    document.set_property(id, "link", "   ").unwrap();
    assert!(!render(&document, RenderMode::Preview).contains("<a "));
}

#[test]
fn test_image_center_alignment_on_container() {
    let mut document = Document::new();
    let id = document.append(ElementKind::Image).id();
    document.set_property(id, "src", "https://example.com/cat.png").unwrap();
    document.set_property(id, "alt", "Cat").unwrap();
    document.set_property(id, "align", "center").unwrap();
    document.set_property(id, "width", "50%").unwrap();

    let html = render(&document, RenderMode::Preview);
    let expected = concat!(
        "  <div style=\"text-align: center;\">\n",
        "    <img src=\"https://example.com/cat.png\" alt=\"Cat\" style=\"width: 50%; display: block; margin: 0 auto;\">\n",
        "  </div>\n",
    );
    assert!(html.contains(expected), "{html}");
}

#[test]
fn test_empty_document_has_empty_body() {
    let document = Document::new();

    let preview = render(&document, RenderMode::Preview);
    assert_eq!(body_of(&preview), "\n");
    assert!(preview.contains("<title>Preview</title>"));

    let export = render(&document, RenderMode::Export);
    assert_eq!(body_of(&export), "\n  <div class=\"container\">\n  </div>\n");
    assert!(export.contains("<title>My Website</title>"));
}

#[test]
fn test_standalone_document_shape() {
    let html = render(&Document::new(), RenderMode::Export);
    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("<meta name=\"viewport\""));
    assert!(html.contains(".container {"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn test_render_is_idempotent_and_ordered() {
    let mut document = Document::new();
    let heading = document.append(ElementKind::Heading).id();
    document.append(ElementKind::Image);
    let button = document.append(ElementKind::Button).id();
    document.set_property(heading, "text", "First").unwrap();
    document.set_property(button, "text", "Last").unwrap();
    document.select(Some(button));
    let before = document.clone();

    let first = render(&document, RenderMode::Export);
    let second = render(&document, RenderMode::Export);
    assert_eq!(first, second);
    assert_eq!(document.elements(), before.elements());

    let h2 = first.find("<h2").unwrap();
    let img = first.find("<img").unwrap();
    let btn = first.find("<button").unwrap();
    assert!(h2 < img && img < btn);
}

#[test]
fn test_modes_share_element_markup() {
    let mut document = Document::new();
    document.append(ElementKind::Heading);
    document.append(ElementKind::Button);

    let strip = |html: &str| {
        body_of(html)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.contains("container") && *line != "</div>")
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };
    let preview = render(&document, RenderMode::Preview);
    let export = render(&document, RenderMode::Export);
    let preview_lines = strip(&preview);
    let export_lines = strip(&export);
    assert!(!preview_lines.is_empty());
    assert_eq!(preview_lines, export_lines);
}

#[test]
fn test_text_is_escaped() {
    let mut document = Document::new();
    let id = document.append(ElementKind::Heading).id();
    document.set_property(id, "text", "<script>\"&\"</script>").unwrap();

    let html = render(&document, RenderMode::Preview);
    assert!(html.contains("&lt;script&gt;&quot;&amp;&quot;&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_unrecognized_element_placeholder() {
    let mut document = Document::new();
    document.append_tag("carousel");
    document.append(ElementKind::Heading);

    let html = render(&document, RenderMode::Export);
    assert!(html.contains("    <p>Unknown element type: carousel</p>\n"));
    assert!(html.contains("<h2"));
}

#[test]
fn test_export_artifact_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut document = Document::new();
    document.append(ElementKind::Heading);

    let config = ExportConfig::default();
    let artifact = ExportArtifact::new(&document, &config);
    assert_eq!(artifact.file_name, "my-website.html");
    assert_eq!(artifact.mime, "text/html");

    let path = artifact.write_to(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("my-website.html"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&document, RenderMode::Export));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = ExportArtifact::new(&Document::new(), &ExportConfig::default());
    let result = artifact.write_to(dir.path().join("missing").join("nested"));
    assert!(matches!(result, Err(page_builder::BuilderError::Io(_))));
}

#[test]
fn test_default_image_is_left_aligned() {
    let mut document = Document::new();
    document.append(ElementKind::Image);

    let html = render(&document, RenderMode::Export);
    let expected = concat!(
        "    <div style=\"text-align: left;\">\n",
        "      <img src=\"https://via.placeholder.com/300x200/667eea/white?text=Your+Image\" alt=\"Placeholder\" style=\"width: 100%; display: block; margin: 0 auto 0 0;\">\n",
        "    </div>\n",
    );
    assert!(html.contains(expected), "{html}");
}

#[test]
fn test_colors_and_alignment_are_resolved_in_markup() {
    let mut document = Document::new();
    let heading = document.append(ElementKind::Heading).id();
    document.set_property(heading, "color", "rgb(255, 0, 0)").unwrap();
    document.set_property(heading, "align", "right").unwrap();
    let button = document.append(ElementKind::Button).id();
    document.set_property(button, "backgroundColor", "#ABC").unwrap();
    document.set_property(button, "textColor", "rgb(0,0,0)").unwrap();

    let html = render(&document, RenderMode::Preview);
    assert!(html.contains(
        r#"<h2 style="font-size: 2rem; color: #ff0000; text-align: right;">Your Heading Here</h2>"#
    ));
    assert!(html.contains(
        r#"<button style="background-color: #aabbcc; color: #000000; padding: 0.75rem 1.5rem; font-size: 1rem;">Click Me</button>"#
    ));
}

#[test]
fn test_preview_written_for_browser() {
    let dir = tempfile::tempdir().unwrap();
    let mut document = Document::new();
    document.append(ElementKind::Button);
    let html = render(&document, RenderMode::Preview);

    let path = write_preview(&html, dir.path()).unwrap();
    assert_eq!(path, dir.path().join(PREVIEW_FILE_NAME));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), html);
}
