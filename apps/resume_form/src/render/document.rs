//! The rendered layout tree: pages → section fragments → blocks → nodes.
//!
//! The tree is independent of any output encoding. Encoders (JSON, plain text,
//! an external PDF backend) walk it in document order.

use serde::{Deserialize, Serialize};

use crate::layout::PageFormat;

/// Column width used when flattening space-between rows to plain text.
pub const PLAIN_TEXT_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Education,
    Experience,
    Projects,
    Skills,
}

impl SectionKind {
    /// Fixed rendering order.
    pub const ORDER: [SectionKind; 5] = [
        SectionKind::Header,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
    ];

    pub fn heading(self) -> Option<&'static str> {
        match self {
            SectionKind::Header => None,
            SectionKind::Education => Some("Education"),
            SectionKind::Experience => Some("Experience"),
            SectionKind::Projects => Some("Projects"),
            SectionKind::Skills => Some("Skills"),
        }
    }
}

/// Typographic role of a run. Sizes and faces are resolved by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Name,
    Location,
    Contact,
    Heading,
    Strong,
    Body,
    Caption,
    Skill,
}

/// One piece of text: an optional fixed label followed by a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
    pub style: TextStyle,
    /// True when `value` is the fallback for an empty field.
    pub placeholder: bool,
}

impl TextRun {
    pub fn new(value: impl Into<String>, style: TextStyle) -> Self {
        Self {
            label: None,
            value: value.into(),
            style,
            placeholder: false,
        }
    }

    pub fn placeholder(value: impl Into<String>, style: TextStyle) -> Self {
        Self {
            placeholder: true,
            ..Self::new(value, style)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label and value as printed.
    pub fn display_text(&self) -> String {
        match &self.label {
            Some(label) => format!("{label}{}", self.value),
            None => self.value.clone(),
        }
    }
}

/// How the runs of a row share the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Justify {
    /// Runs follow each other, joined by `separator`.
    Inline { separator: String },
    /// First run flush left, last run flush right.
    SpaceBetween,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Text { run: TextRun },
    Row { runs: Vec<TextRun>, justify: Justify },
    /// One blank body line.
    Spacer,
}

impl Node {
    pub fn text(run: TextRun) -> Self {
        Node::Text { run }
    }

    pub fn inline(runs: Vec<TextRun>, separator: &str) -> Self {
        Node::Row {
            runs,
            justify: Justify::Inline {
                separator: separator.to_string(),
            },
        }
    }

    pub fn space_between(runs: Vec<TextRun>) -> Self {
        Node::Row {
            runs,
            justify: Justify::SpaceBetween,
        }
    }

    pub fn runs(&self) -> &[TextRun] {
        match self {
            Node::Text { run } => std::slice::from_ref(run),
            Node::Row { runs, .. } => runs,
            Node::Spacer => &[],
        }
    }

    /// The node as one printed line (rows are flattened).
    pub fn display_line(&self) -> String {
        match self {
            Node::Text { run } => run.display_text(),
            Node::Row {
                runs,
                justify: Justify::Inline { separator },
            } => runs
                .iter()
                .map(TextRun::display_text)
                .collect::<Vec<_>>()
                .join(separator),
            Node::Row {
                runs,
                justify: Justify::SpaceBetween,
            } => flatten_space_between(runs),
            Node::Spacer => String::new(),
        }
    }

    /// Runs joined by `separator`, ignoring the row's own justification.
    pub fn display_line_with(&self, separator: &str) -> String {
        self.runs()
            .iter()
            .map(TextRun::display_text)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn flatten_space_between(runs: &[TextRun]) -> String {
    let texts: Vec<String> = runs.iter().map(TextRun::display_text).collect();
    match texts.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, middle @ .., last] => {
            let mut left = first.clone();
            for text in middle {
                left.push(' ');
                left.push_str(text);
            }
            let used = left.chars().count() + last.chars().count();
            let gap = PLAIN_TEXT_WIDTH.saturating_sub(used).max(1);
            format!("{left}{}{last}", " ".repeat(gap))
        }
    }
}

/// A group of nodes that is never split across pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub nodes: Vec<Node>,
}

impl Block {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

/// A whole section before pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

/// The part of a section that landed on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionFragment {
    pub kind: SectionKind,
    /// Present on the fragment that starts the section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// True when an earlier page already holds part of this section.
    pub continued: bool,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub fragments: Vec<SectionFragment>,
    /// Estimated content height in points.
    pub used_height_pt: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub page_format: PageFormat,
    pub pages: Vec<Page>,
}

impl RenderedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every text run, in document order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.pages
            .iter()
            .flat_map(|p| &p.fragments)
            .flat_map(|f| &f.blocks)
            .flat_map(|b| &b.nodes)
            .flat_map(Node::runs)
    }

    /// Section kinds in the order they first appear.
    pub fn section_order(&self) -> Vec<SectionKind> {
        let mut order = Vec::new();
        for fragment in self.pages.iter().flat_map(|p| &p.fragments) {
            if order.last() != Some(&fragment.kind) {
                order.push(fragment.kind);
            }
        }
        order
    }

    /// Deterministic plain-text rendering, one page after another.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            out.push_str(&format!("=== Page {} ===\n", page.number));
            for fragment in &page.fragments {
                if let Some(heading) = &fragment.heading {
                    out.push('\n');
                    out.push_str(&heading.to_uppercase());
                    out.push('\n');
                    out.push_str(&"-".repeat(heading.chars().count()));
                    out.push('\n');
                }
                for node in fragment.blocks.iter().flat_map(|b| &b.nodes) {
                    out.push_str(&node.display_line());
                    out.push('\n');
                }
            }
        }
        out
    }
}
