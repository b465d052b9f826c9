// Document Renderer: resume entity → layout tree.
// The tree is paginated by `crate::layout`; encoders live in `crate::export`.

pub mod document;
pub mod placeholders;
pub mod renderer;

pub use document::{
    Block, Justify, Node, Page, RenderedDocument, Section, SectionFragment, SectionKind, TextRun,
    TextStyle,
};
pub use renderer::{build_sections, render, render_resume, render_with_config};
