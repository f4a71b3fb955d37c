//! Framework-independent description of what a component displays.
//!
//! A `ViewTree` is plain data: the terminal renderer walks it to draw cells,
//! tests walk it to find nodes, and `--snapshot` serializes it as JSON.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Container,
    Heading,
    Button,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewNode {
    /// Stable identifier for tooling that needs to locate this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<&'static str>,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn container(test_id: &'static str, children: Vec<ViewNode>) -> Self {
        Self {
            test_id: Some(test_id),
            kind: NodeKind::Container,
            text: None,
            children,
        }
    }

    pub fn heading(test_id: &'static str, text: impl Into<String>) -> Self {
        Self {
            test_id: Some(test_id),
            kind: NodeKind::Heading,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn button(test_id: &'static str, label: impl Into<String>) -> Self {
        Self {
            test_id: Some(test_id),
            kind: NodeKind::Button,
            text: Some(label.into()),
            children: Vec::new(),
        }
    }

    /// Own text followed by all descendant text, depth first.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    fn collect_by_test_id<'a>(&'a self, id: &str, out: &mut Vec<&'a ViewNode>) {
        if self.test_id == Some(id) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_by_test_id(id, out);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTree {
    root: ViewNode,
}

impl ViewTree {
    pub fn new(root: ViewNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    /// Every node carrying `id`, in depth-first order.
    pub fn find_by_test_id(&self, id: &str) -> Vec<&ViewNode> {
        let mut out = Vec::new();
        self.root.collect_by_test_id(id, &mut out);
        out
    }

    /// The single node carrying `id`, or `None` when absent or ambiguous.
    pub fn find_one(&self, id: &str) -> Option<&ViewNode> {
        match self.find_by_test_id(id).as_slice() {
            [node] => Some(*node),
            _ => None,
        }
    }
}
