// Layout engine: font metrics, page flow and page-fill analysis.
// Turns the renderer's section list into pages; pure and synchronous.

pub mod flow;
pub mod font_metrics;
pub mod page_fill;

pub use flow::paginate;
pub use font_metrics::{default_page_config, FontFace, PageConfig, PageFormat};
pub use page_fill::{analyze_document, analyze_page_fill, PageFillAnalysis, PageFillVerdict};
