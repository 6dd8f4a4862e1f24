//! Composed page payload returned for a routed view.

use serde::Serialize;

use crate::domain::chart::ChartSpec;
use crate::domain::view::ViewId;

/// Heading shown on the welcome page.
pub const WELCOME_HEADING: &str = "Welcome to the ecommerce dashboard.";

/// Hint shown under the welcome heading.
pub const WELCOME_MESSAGE: &str = "Select one of the options in the navigation to view the charts.";

/// A display node of a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageNode {
    Heading { text: String },
    Paragraph { text: String },
    Graph { id: String, chart: ChartSpec },
}

/// A fully resolved page: the routed view and its display nodes in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub view: ViewId,
    pub nodes: Vec<PageNode>,
}

impl Page {
    pub fn new(view: ViewId, nodes: Vec<PageNode>) -> Self {
        Self { view, nodes }
    }

    /// The page served for [`ViewId::Home`] and every unrecognized path.
    pub fn welcome() -> Self {
        Self::new(
            ViewId::Home,
            vec![
                PageNode::Heading {
                    text: WELCOME_HEADING.to_string(),
                },
                PageNode::Paragraph {
                    text: WELCOME_MESSAGE.to_string(),
                },
            ],
        )
    }

    /// Text of the first heading node, if any.
    pub fn heading(&self) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            PageNode::Heading { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn charts(&self) -> impl Iterator<Item = (&str, &ChartSpec)> {
        self.nodes.iter().filter_map(|node| match node {
            PageNode::Graph { id, chart } => Some((id.as_str(), chart)),
            _ => None,
        })
    }
}
