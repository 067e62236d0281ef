use crate::config::BuilderConfig;
use crate::markup;
use crate::panels::{canvas_panel, properties_panel, toolbar_panel};
use crate::properties::ColorDrafts;
use crate::session::BuilderSession;

/// The desktop page builder: toolbar, canvas and properties panel around a
/// [`BuilderSession`].
#[derive(Debug)]
pub struct PageBuilderApp {
    session: BuilderSession,
    /// Colors under an open picker, committed when it closes
    color_drafts: ColorDrafts,
    /// Markup of the open preview source window, if any
    preview: Option<String>,
    /// Last preview or export outcome, shown in the toolbar
    status: Option<String>,
    show_debug: bool,
}

impl PageBuilderApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BuilderConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            session: BuilderSession::new(config.export),
            color_drafts: ColorDrafts::default(),
            preview: None,
            status: None,
            show_debug: false,
        }
    }

    pub fn session(&self) -> &BuilderSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut BuilderSession {
        &mut self.session
    }

    pub fn color_drafts(&self) -> &ColorDrafts {
        &self.color_drafts
    }

    pub fn color_drafts_mut(&mut self) -> &mut ColorDrafts {
        &mut self.color_drafts
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn toggle_debug(&mut self) {
        self.show_debug = !self.show_debug;
    }

    /// Render the preview, open it in the system browser and show its source
    pub fn open_preview(&mut self, ctx: &egui::Context) {
        let html = self.session.on_preview_requested();
        match markup::write_preview(&html, std::env::temp_dir()) {
            Ok(path) => {
                ctx.open_url(egui::OpenUrl::new_tab(format!("file://{}", path.display())));
                self.status = Some(format!("Preview opened from {}", path.display()));
            }
            Err(err) => {
                log::error!("Failed to write preview: {}", err);
                self.status = Some(format!("Preview failed: {err}"));
            }
        }
        self.preview = Some(html);
    }

    pub fn export(&mut self) {
        let artifact = self.session.on_export_requested();
        let output_dir = &self.session.export_config().output_dir;
        self.status = match artifact.write_to(output_dir) {
            Ok(path) => Some(format!("Exported to {}", path.display())),
            Err(err) => {
                log::error!("Failed to export {}: {}", artifact.file_name, err);
                Some(format!("Export failed: {err}"))
            }
        };
    }

    fn preview_window(&mut self, ctx: &egui::Context) {
        let Some(markup) = &self.preview else {
            return;
        };
        let mut open = true;
        egui::Window::new("Preview source")
            .open(&mut open)
            .default_size([640.0, 480.0])
            .vscroll(true)
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut markup.as_str())
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
        if !open {
            self.preview = None;
        }
    }

    fn debug_window(&mut self, ctx: &egui::Context) {
        if !self.show_debug {
            return;
        }
        let document = self.session.document();
        egui::Window::new("Document Debug")
            .open(&mut self.show_debug)
            .show(ctx, |ui| {
                ui.label(format!("Number of elements: {}", document.len()));
                ui.label(format!("Selected: {:?}", document.selected_id()));
                let json = serde_json::to_string_pretty(document)
                    .unwrap_or_else(|err| format!("<unserializable: {err}>"));
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.monospace(json);
                });
            });
    }
}

impl eframe::App for PageBuilderApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        toolbar_panel(self, ctx);
        properties_panel(self, ctx);
        canvas_panel(self, ctx);

        self.preview_window(ctx);
        self.debug_window(ctx);
    }
}
