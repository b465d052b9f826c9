//! Page flow: distributes rendered sections over fixed-size pages.
//!
//! # Rules
//! - Blocks keep document order and are never split.
//! - A section heading stays on the same page as the section's first block.
//! - A section that spills over continues on the next page without a heading.
//! - A block taller than a page gets a page to itself.

use crate::layout::font_metrics::{get_metrics, style_metrics, PageConfig};
use crate::render::{Block, Justify, Node, Page, Section, SectionFragment, TextStyle};

/// Height of a [`Node::Spacer`]: one body line.
pub fn spacer_height_pt(config: &PageConfig) -> f32 {
    let body = style_metrics(TextStyle::Body);
    body.size_pt * body.line_height.unwrap_or(config.line_height)
}

/// Estimated height of `text` set in `style` at the page's content width.
pub fn run_height_pt(text: &str, style: TextStyle, config: &PageConfig) -> f32 {
    let m = style_metrics(style);
    let width_em = config.content_width_pt() / m.size_pt;
    let lines = get_metrics(m.face).wrapped_lines(text, width_em);
    lines as f32 * m.size_pt * m.line_height.unwrap_or(config.line_height) + m.margin_bottom_pt
}

pub fn node_height_pt(node: &Node, config: &PageConfig) -> f32 {
    match node {
        Node::Spacer => spacer_height_pt(config),
        Node::Text { run } => run_height_pt(&run.display_text(), run.style, config),
        Node::Row { runs, justify } => {
            // Measured as one line of text in the row's largest style.
            let joined = match justify {
                Justify::Inline { separator } => node.display_line_with(separator),
                Justify::SpaceBetween => node.display_line_with(" "),
            };
            runs.iter()
                .map(|run| run_height_pt(&joined, run.style, config))
                .fold(0.0_f32, f32::max)
        }
    }
}

pub fn block_height_pt(block: &Block, config: &PageConfig) -> f32 {
    block.nodes.iter().map(|n| node_height_pt(n, config)).sum()
}

/// Flows `sections` onto pages. Always returns at least one page.
///
/// Sections without blocks are dropped.
pub fn paginate(sections: Vec<Section>, config: &PageConfig) -> Vec<Page> {
    let available = config.content_height_pt();
    let mut pages: Vec<Page> = Vec::new();
    let mut current = empty_page(1);

    for section in sections {
        let heading = section.kind.heading();
        let heading_h = heading
            .map(|h| run_height_pt(h, TextStyle::Heading, config))
            .unwrap_or(0.0);
        let mut started = false;

        for block in section.blocks {
            let block_h = block_height_pt(&block, config);
            let needed = if started { block_h } else { block_h + heading_h };

            if current.used_height_pt + needed > available && !current.fragments.is_empty() {
                let next = empty_page(current.number + 1);
                pages.push(std::mem::replace(&mut current, next));
            }

            let needs_fragment = current
                .fragments
                .last()
                .map_or(true, |f| f.kind != section.kind);
            if needs_fragment {
                current.fragments.push(SectionFragment {
                    kind: section.kind,
                    heading: if started { None } else { heading.map(str::to_string) },
                    continued: started,
                    blocks: Vec::new(),
                });
                if !started {
                    current.used_height_pt += heading_h;
                }
            }

            current.used_height_pt += block_h;
            if let Some(fragment) = current.fragments.last_mut() {
                fragment.blocks.push(block);
            }
            started = true;
        }
    }

    pages.push(current);
    pages
}

fn empty_page(number: usize) -> Page {
    Page {
        number,
        fragments: Vec::new(),
        used_height_pt: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{default_page_config, PageFormat};
    use crate::render::{SectionKind, TextRun};

    fn body_block(text: &str) -> Block {
        Block::new(vec![Node::text(TextRun::new(text, TextStyle::Body))])
    }

    fn section(kind: SectionKind, blocks: usize) -> Section {
        Section {
            kind,
            blocks: (0..blocks).map(|i| body_block(&format!("block {i}"))).collect(),
        }
    }

    #[test]
    fn test_spacer_is_one_body_line() {
        let config = PageConfig::default();
        assert!((spacer_height_pt(&config) - 14.4).abs() < 1e-3);
    }

    #[test]
    fn test_short_document_fits_one_page() {
        let config = PageConfig::default();
        let pages = paginate(
            vec![section(SectionKind::Header, 2), section(SectionKind::Education, 2)],
            &config,
        );
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].fragments.len(), 2);
        assert_eq!(pages[0].fragments[0].heading, None);
        assert_eq!(pages[0].fragments[1].heading.as_deref(), Some("Education"));
        assert!(!pages[0].fragments[1].continued);
    }

    #[test]
    fn test_empty_input_yields_one_empty_page() {
        let pages = paginate(vec![], &PageConfig::default());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].fragments.is_empty());
    }

    #[test]
    fn test_overflow_continues_section_on_next_page() {
        let config = PageConfig::default();
        // 14.4pt per body line, 802pt per page → ~55 blocks per page
        let pages = paginate(vec![section(SectionKind::Projects, 80)], &config);
        assert_eq!(pages.len(), 2);

        let first = &pages[0].fragments[0];
        assert_eq!(first.heading.as_deref(), Some("Projects"));
        assert!(!first.continued);

        let second = &pages[1].fragments[0];
        assert_eq!(second.heading, None);
        assert!(second.continued);
        assert_eq!(first.blocks.len() + second.blocks.len(), 80);

        for page in &pages {
            assert!(page.used_height_pt <= config.content_height_pt());
        }
    }

    #[test]
    fn test_blocks_keep_order_across_pages() {
        let config = default_page_config(PageFormat::Letter);
        let pages = paginate(vec![section(SectionKind::Experience, 120)], &config);
        let texts: Vec<String> = pages
            .iter()
            .flat_map(|p| &p.fragments)
            .flat_map(|f| &f.blocks)
            .map(|b| b.nodes[0].display_line())
            .collect();
        let expected: Vec<String> = (0..120).map(|i| format!("block {i}")).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_oversized_block_gets_its_own_page() {
        let config = PageConfig::default();
        let huge = Block::new(vec![Node::Spacer; 80]);
        let pages = paginate(
            vec![
                section(SectionKind::Header, 1),
                Section {
                    kind: SectionKind::Projects,
                    blocks: vec![huge],
                },
            ],
            &config,
        );
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].fragments[0].kind, SectionKind::Projects);
        assert!(pages[1].used_height_pt > config.content_height_pt());
    }

    #[test]
    fn test_heading_moves_with_first_block() {
        let config = PageConfig::default();
        // Fill the first page almost completely with the header section.
        let filler = Block::new(vec![Node::Spacer; 54]);
        let pages = paginate(
            vec![
                Section {
                    kind: SectionKind::Header,
                    blocks: vec![filler],
                },
                section(SectionKind::Skills, 1),
            ],
            &config,
        );
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].fragments.len(), 1);
        assert_eq!(pages[1].fragments[0].heading.as_deref(), Some("Skills"));
    }
}
