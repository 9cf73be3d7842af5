//! Page layout tree.
//!
//! The composed page is described as plain data so that the HTML assembly
//! and the JSON endpoints share one structure.

use serde::{Deserialize, Serialize};

use crate::chart::ChartSpec;

/// A content block inside the two-column row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Markdown text with an optional inline style.
    Markdown {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    /// An image referenced by URL.
    Image { src: String },
}

/// Two-column row: left block, fixed divider, right block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub left: Block,
    pub right: Block,
    /// Relative width of the left column.
    pub left_weight: u8,
    /// Divider width in pixels.
    pub divider_px: u16,
    /// Relative width of the right column.
    pub right_weight: u8,
}

impl Row {
    /// Creates a row with the default 6 : 3 split and a 20px divider.
    pub fn new(left: Block, right: Block) -> Self {
        Self {
            left,
            right,
            left_weight: 6,
            divider_px: 20,
            right_weight: 3,
        }
    }

    /// CSS grid template for the row. The left column never shrinks below
    /// 60% of the row.
    pub fn grid_template(&self) -> String {
        format!(
            "minmax(60%, {}fr) {}px {}fr",
            self.left_weight, self.divider_px, self.right_weight
        )
    }
}

/// A text entry displayed as a block quote.
///
/// Holds the raw entry text; [`QuotedBlock::to_markdown`] produces the
/// quoted markdown form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotedBlock(String);

impl QuotedBlock {
    /// Wraps entry text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw entry text.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Markdown block quote. Every line is prefixed so multi-line entries
    /// stay inside one quote.
    pub fn to_markdown(&self) -> String {
        if self.0.is_empty() {
            return ">".to_string();
        }
        self.0
            .lines()
            .map(|line| format!("> {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PartialEq<str> for QuotedBlock {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for QuotedBlock {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One tab in a tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Tab label.
    pub title: String,
    /// Quoted text blocks, in source order.
    pub entries: Vec<QuotedBlock>,
}

impl Panel {
    /// Raw entry texts, in order.
    pub fn entry_texts(&self) -> Vec<&str> {
        self.entries.iter().map(QuotedBlock::text).collect()
    }
}

/// A headed group of panels rendered as one tab strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub panels: Vec<Panel>,
}

/// The composed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Browser window title.
    pub session_title: String,
    /// Top-level page heading.
    pub title: String,
    pub row: Row,
    pub chart: ChartSpec,
    pub sections: Vec<Section>,
}

impl PageLayout {
    /// Total number of tabs across all sections.
    pub fn tab_count(&self) -> usize {
        self.sections.iter().map(|s| s.panels.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_grid_template() {
        let row = Row::new(
            Block::Markdown {
                text: "hello".into(),
                style: None,
            },
            Block::Image {
                src: "https://example.com/a.jpg".into(),
            },
        );

        assert_eq!(row.grid_template(), "minmax(60%, 6fr) 20px 3fr");
    }

    #[test]
    fn test_quoted_block_markdown() {
        assert_eq!(QuotedBlock::new("hello").to_markdown(), "> hello");
        assert_eq!(
            QuotedBlock::new("line one\nline two").to_markdown(),
            "> line one\n> line two"
        );
        assert_eq!(QuotedBlock::new("").to_markdown(), ">");
        assert_eq!(QuotedBlock::new("x"), "x");
    }

    #[test]
    fn test_panel_serializes_plain_entries() {
        let panel = Panel {
            title: "A".into(),
            entries: vec![QuotedBlock::new("x"), QuotedBlock::new("y")],
        };
        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json, serde_json::json!({"title": "A", "entries": ["x", "y"]}));
        assert_eq!(panel.entry_texts(), vec!["x", "y"]);
    }

    #[test]
    fn test_block_serialization() {
        let block = Block::Image {
            src: "pic.png".into(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["kind"], "image");
        assert_eq!(json["src"], "pic.png");

        let md = Block::Markdown {
            text: "# Hi".into(),
            style: None,
        };
        let json = serde_json::to_value(&md).unwrap();
        assert_eq!(json["kind"], "markdown");
        assert!(json.get("style").is_none());
    }
}
