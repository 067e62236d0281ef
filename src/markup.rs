//! Serializes a [`Document`] into a standalone HTML page.
//!
//! Both render modes share the per-element rules; they only differ in the
//! wrapping document: title, stylesheet, and whether the elements sit inside a
//! `.container` card.

use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::document::Document;
use crate::element::{ButtonProps, Content, Element, ElementKind, HeadingProps, ImageProps};
use crate::error::BuilderResult;
use crate::style::{self, Declarations};

const PREVIEW_STYLES: &[&str] = &[
    "body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; padding: 20px; margin: 0; line-height: 1.6; }",
    "@media (max-width: 768px) { body { padding: 10px; } }",
    "h2 { margin: 0.5rem 0; word-wrap: break-word; }",
    "img { max-width: 100%; height: auto; display: block; }",
    "button { padding: 0.75rem 1.5rem; border: none; border-radius: 6px; cursor: pointer; font-size: 1rem; font-weight: 500; margin: 0.5rem 0; transition: background-color 0.2s ease; max-width: 100%; word-wrap: break-word; }",
    "@media (max-width: 768px) { button { padding: 0.6rem 1.2rem; font-size: 0.9rem; } }",
    "button:hover { opacity: 0.9; }",
    "@media (max-width: 768px) { h2 { font-size: 1.5rem !important; } }",
];

const EXPORT_STYLES: &[&str] = &[
    "body { font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif; line-height: 1.6; margin: 0; padding: 20px; }",
    "@media (max-width: 768px) { body { padding: 10px; } }",
    ".container { max-width: 1200px; margin: 0 auto; padding: 20px; background-color: #fff; border-radius: 8px; box-shadow: 0 4px 10px rgba(0,0,0,0.05); }",
    "@media (max-width: 768px) { .container { padding: 15px; } }",
    "h1, h2, h3 { margin: 0.5rem 0; word-wrap: break-word; }",
    "@media (max-width: 768px) { h1, h2, h3 { font-size: 1.5rem; } }",
    "img { max-width: 100%; height: auto; border-radius: 4px; margin: 0.5rem 0; display: block; }",
    "button { padding: 0.75rem 1.5rem; border: none; border-radius: 6px; cursor: pointer; font-size: 1rem; font-weight: 500; margin: 0.5rem 0; transition: background-color 0.2s ease; max-width: 100%; word-wrap: break-word; }",
    "@media (max-width: 768px) { button { padding: 0.6rem 1.2rem; font-size: 0.9rem; } }",
    "button:hover { opacity: 0.9; }",
];

/// Margin of the block wrapping a button
const BUTTON_CONTAINER_MARGIN: &str = "1rem 0";

/// What the markup is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Shown right away in a viewer
    Preview,
    /// Saved as a file
    Export,
}

impl RenderMode {
    fn title(self) -> &'static str {
        match self {
            RenderMode::Preview => "Preview",
            RenderMode::Export => "My Website",
        }
    }

    fn styles(self) -> &'static [&'static str] {
        match self {
            RenderMode::Preview => PREVIEW_STYLES,
            RenderMode::Export => EXPORT_STYLES,
        }
    }
}

/// Render `document` as a complete HTML page.
///
/// Rendering never fails and never mutates the document; the same document
/// always yields byte-identical output.
pub fn render(document: &Document, mode: RenderMode) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write_page(&mut html, document, mode);
    html
}

fn write_page(out: &mut String, document: &Document, mode: RenderMode) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "  <meta charset=\"UTF-8\">")?;
    writeln!(
        out,
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(out, "  <title>{}</title>", mode.title())?;
    writeln!(out, "  <style>")?;
    for rule in mode.styles() {
        writeln!(out, "    {rule}")?;
    }
    writeln!(out, "  </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    match mode {
        RenderMode::Preview => write_elements(out, document, 1)?,
        RenderMode::Export => {
            writeln!(out, "  <div class=\"container\">")?;
            write_elements(out, document, 2)?;
            writeln!(out, "  </div>")?;
        }
    }
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_elements(out: &mut String, document: &Document, depth: usize) -> fmt::Result {
    for element in document.elements() {
        write_element(out, element, depth)?;
    }
    Ok(())
}

/// Write the markup for one element, indented by `depth` levels
pub fn write_element(out: &mut String, element: &Element, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    match element.content() {
        Content::Heading(props) => write_heading(out, &pad, props),
        Content::Image(props) => write_image(out, &pad, props),
        Content::Button(props) => write_button(out, &pad, props),
        Content::Unrecognized { tag } => {
            writeln!(out, "{pad}<p>Unknown element type: {}</p>", escape_html(tag))
        }
    }
}

fn write_heading(out: &mut String, pad: &str, props: &HeadingProps) -> fmt::Result {
    let styles = style::resolve_all(ElementKind::Heading, |key| props.get(key));
    writeln!(
        out,
        "{pad}<h2 style=\"{}\">{}</h2>",
        styles.element,
        escape_html(&props.text)
    )
}

fn write_image(out: &mut String, pad: &str, props: &ImageProps) -> fmt::Result {
    let styles = style::resolve_all(ElementKind::Image, |key| props.get(key));
    writeln!(out, "{pad}<div style=\"{}\">", styles.container)?;
    writeln!(
        out,
        "{pad}  <img src=\"{}\" alt=\"{}\" style=\"{}\">",
        escape_html(&props.src),
        escape_html(&props.alt),
        styles.element
    )?;
    writeln!(out, "{pad}</div>")
}

fn write_button(out: &mut String, pad: &str, props: &ButtonProps) -> fmt::Result {
    let styles = style::resolve_all(ElementKind::Button, |key| props.get(key));
    let mut container: Declarations = styles.container;
    container.push("margin", BUTTON_CONTAINER_MARGIN);

    writeln!(out, "{pad}<div style=\"{container}\">")?;
    let button = format!(
        "<button style=\"{}\">{}</button>",
        styles.element,
        escape_html(&props.text)
    );
    match props.link_target() {
        Some(link) => {
            writeln!(
                out,
                "{pad}  <a href=\"{}\" target=\"_blank\" style=\"text-decoration: none;\">",
                escape_html(link)
            )?;
            writeln!(out, "{pad}    {button}")?;
            writeln!(out, "{pad}  </a>")?;
        }
        None => writeln!(out, "{pad}  {button}")?,
    }
    writeln!(out, "{pad}</div>")
}

/// Escape text for use in element content and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// File name of the preview page written for the system browser
pub const PREVIEW_FILE_NAME: &str = "page-builder-preview.html";

/// Write preview markup into `dir` and return the path of the written file
pub fn write_preview(html: &str, dir: impl AsRef<Path>) -> BuilderResult<PathBuf> {
    let path = dir.as_ref().join(PREVIEW_FILE_NAME);
    fs::write(&path, html)?;
    log::debug!("Wrote preview to {}", path.display());
    Ok(path)
}

/// A rendered export, ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: String,
    pub contents: String,
}

impl ExportArtifact {
    pub fn new(document: &Document, config: &ExportConfig) -> Self {
        Self {
            file_name: config.file_name.clone(),
            mime: config.mime.clone(),
            contents: render(document, RenderMode::Export),
        }
    }

    /// Write the artifact into `dir` and return the path of the written file
    pub fn write_to(&self, dir: impl AsRef<Path>) -> BuilderResult<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        fs::write(&path, &self.contents)?;
        log::info!("Exported {} bytes to {}", self.contents.len(), path.display());
        Ok(path)
    }
}
