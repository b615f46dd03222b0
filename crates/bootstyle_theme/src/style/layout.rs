//! Element layout trees

use serde::Serialize;

/// Packing side of a layout node
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// One element in a widget's layout tree
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutNode {
    pub element: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    pub sticky: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub expand: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            side: None,
            sticky: String::new(),
            expand: false,
            border: None,
            children: Vec::new(),
        }
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn sticky(mut self, sticky: &str) -> Self {
        self.sticky = sticky.to_string();
        self
    }

    pub fn expand(mut self) -> Self {
        self.expand = true;
        self
    }

    pub fn border(mut self, width: u32) -> Self {
        self.border = Some(width);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = LayoutNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search for the node naming `element`
    pub fn find(&self, element: &str) -> Option<&LayoutNode> {
        if self.element == element {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(element))
    }

    /// Every element name in the tree, depth-first
    pub fn elements(&self) -> Vec<&str> {
        let mut out = vec![self.element.as_str()];
        for child in &self.children {
            out.extend(child.elements());
        }
        out
    }
}
