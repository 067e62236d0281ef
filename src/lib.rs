#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod id_generator;
pub mod markup;
pub mod panels;
pub mod properties;
pub mod session;
pub mod style;

pub use app::PageBuilderApp;
pub use config::{BuilderConfig, ExportConfig};
pub use document::Document;
pub use element::{Element, ElementId, ElementKind, PropertyKey};
pub use error::{BuilderError, BuilderResult};
pub use event::{BuilderEvent, EventBus, EventHandler};
pub use markup::{render, ExportArtifact, RenderMode};
pub use properties::{FieldEvent, PanelState};
pub use session::BuilderSession;
