// Generic syntax tree node
//
// This is the parser-independent shape written to every artifact:
// { "type": string, "value"?: string, "children"?: [ <Node>, ... ] }

use serde::{Deserialize, Serialize};

/// One node of the reduced tree
///
/// `value` is `None` for opaque container kinds and for nodes whose sanitized text
/// is empty, so the JSON form never carries `"value": ""`. `children` holds named
/// children only, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Set the value, storing an empty string as no value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.value = if value.is_empty() { None } else { Some(value) };
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child of the given kind
    pub fn child_of_kind(&self, kind: &str) -> Option<&SyntaxNode> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SyntaxNode::node_count).sum::<usize>()
    }

    /// Pretty-printed JSON with 2-space indentation
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Decode an artifact written by [`SyntaxNode::to_pretty_json`]
    ///
    /// Every tree level takes two JSON levels (the object and its `children`
    /// array), so serde_json's default nesting limit of 128 would reject trees
    /// deeper than 64 nodes. The limit is lifted here and the stack grows on
    /// demand instead.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let node = {
            let stacked = serde_stacker::Deserializer::new(&mut deserializer);
            SyntaxNode::deserialize(stacked)?
        };
        deserializer.end()?;
        Ok(node)
    }
}
