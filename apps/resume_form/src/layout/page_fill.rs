//! Page Fill Analysis: how much of each page the flowed content uses.
//!
//! # Verdicts
//! - fill > 100%  → `Overflow` (only possible when one block is taller than a page)
//! - fill < 25%   → `Sparse`
//! - otherwise    → `Acceptable`

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::PageConfig;
use crate::render::{Page, RenderedDocument};

/// Below this fill fraction a page is reported as sparse.
pub const SPARSE_FILL_THRESHOLD: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageFillVerdict {
    Acceptable,
    Sparse,
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFillAnalysis {
    pub page_number: usize,
    pub used_pt: f32,
    pub available_pt: f32,
    pub fill_fraction: f32,
    pub verdict: PageFillVerdict,
}

pub fn analyze_page_fill(page: &Page, config: &PageConfig) -> PageFillAnalysis {
    let available_pt = config.content_height_pt();
    let fill_fraction = page.used_height_pt / available_pt;

    let verdict = if fill_fraction > 1.0 {
        PageFillVerdict::Overflow
    } else if fill_fraction < SPARSE_FILL_THRESHOLD {
        PageFillVerdict::Sparse
    } else {
        PageFillVerdict::Acceptable
    };

    PageFillAnalysis {
        page_number: page.number,
        used_pt: page.used_height_pt,
        available_pt,
        fill_fraction,
        verdict,
    }
}

pub fn analyze_document(document: &RenderedDocument, config: &PageConfig) -> Vec<PageFillAnalysis> {
    document
        .pages
        .iter()
        .map(|page| analyze_page_fill(page, config))
        .collect()
}
