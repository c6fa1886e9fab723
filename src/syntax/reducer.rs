//! Tree reducer
//!
//! Walks a tree-sitter concrete syntax tree and builds the generic [`SyntaxNode`]
//! tree. Anonymous tokens are dropped, leaf-like nodes get their sanitized text as
//! a value, and dotted-name nodes whose children merely re-spell the node's own
//! text are collapsed into a single valued leaf.

use std::borrow::Cow;
use tracing::warn;
use tree_sitter::Node;

use super::node::SyntaxNode;
use super::sanitize::sanitize_value;
use crate::language::LanguageProfile;

/// Default cap on reduction depth
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Reduces one source's concrete tree according to a grammar profile
pub struct TreeReducer<'a> {
    profile: &'a LanguageProfile,
    source: &'a [u8],
    max_depth: usize,
    truncated: usize,
}

impl<'a> TreeReducer<'a> {
    pub fn new(profile: &'a LanguageProfile, source: &'a [u8]) -> Self {
        Self {
            profile,
            source,
            max_depth: DEFAULT_MAX_DEPTH,
            truncated: 0,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Number of nodes whose children were dropped by the depth cap
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    pub fn reduce(&mut self, node: Node) -> SyntaxNode {
        self.reduce_at(node, 0)
    }

    fn reduce_at(&mut self, node: Node, depth: usize) -> SyntaxNode {
        let kind = node.kind();
        let mut reduced = SyntaxNode::new(kind);

        if !self.profile.is_opaque(kind) {
            let raw = self.node_text(&node);
            reduced = reduced.with_value(sanitize_value(raw.trim()));
        }

        if reduced.value.is_some() && self.children_are_redundant(&node) {
            return reduced;
        }

        if depth >= self.max_depth {
            if node.named_child_count() > 0 {
                self.truncated += 1;
                warn!(
                    "Depth cap {} reached at {} (line {}), children dropped",
                    self.max_depth,
                    kind,
                    node.start_position().row + 1
                );
            }
            return reduced;
        }

        let children: Vec<Node> = node.named_children(&mut node.walk()).collect();
        reduced.children = children
            .into_iter()
            .map(|child| self.reduce_at(child, depth + 1))
            .collect();

        reduced
    }

    /// True when `node` is a dotted-name kind whose text equals its named
    /// children's trimmed text joined with the kind's separator
    fn children_are_redundant(&self, node: &Node) -> bool {
        let Some(separator) = self.profile.separator_for(node.kind()) else {
            return false;
        };

        let parts: Vec<String> = node
            .named_children(&mut node.walk())
            .map(|child| self.node_text(&child).trim().to_string())
            .collect();
        let composite = parts.join(separator);

        self.node_text(node).trim() == composite
    }

    /// Get text from a tree-sitter node, lossily decoded
    fn node_text(&self, node: &Node) -> Cow<'a, str> {
        let source: &'a [u8] = self.source;
        match source.get(node.byte_range()) {
            Some(bytes) => String::from_utf8_lossy(bytes),
            None => Cow::Borrowed(""),
        }
    }
}
