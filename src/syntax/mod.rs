// Generic syntax tree construction
//
// - node.rs: SyntaxNode, the serialized tree shape
// - sanitize.rs: value normalization
// - reducer.rs: concrete tree -> SyntaxNode
// - locator.rs: artifact name lookup

pub mod locator;
pub mod node;
pub mod reducer;
pub mod sanitize;

pub use locator::{locate_all, locate_declaration};
pub use node::SyntaxNode;
pub use reducer::{TreeReducer, DEFAULT_MAX_DEPTH};
pub use sanitize::sanitize_value;

use tracing::warn;
use tree_sitter::{Node, Parser};

use crate::error::ParseFailure;
use crate::language::LanguageProfile;

/// Options shared by every source parsed in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_depth: usize,
    /// Reduce trees that contain ERROR or MISSING nodes instead of rejecting them
    pub allow_syntax_errors: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_syntax_errors: false,
        }
    }
}

/// Parse and reduce one source with a fresh parser
pub fn parse_source(
    source: &[u8],
    profile: &LanguageProfile,
    options: &ParseOptions,
) -> Result<SyntaxNode, ParseFailure> {
    let mut parser = profile.parser()?;
    parse_with(&mut parser, source, profile, options)
}

/// Parse and reduce one source with a parser already set to `profile`'s grammar
pub fn parse_with(
    parser: &mut Parser,
    source: &[u8],
    profile: &LanguageProfile,
    options: &ParseOptions,
) -> Result<SyntaxNode, ParseFailure> {
    let tree = parser.parse(source, None).ok_or(ParseFailure::NoTree)?;
    let root = tree.root_node();

    if !options.allow_syntax_errors {
        if let Some(error) = first_error(root) {
            let position = error.start_position();
            return Err(ParseFailure::Syntax {
                line: position.row + 1,
                column: position.column + 1,
            });
        }
    }

    let mut reducer = TreeReducer::new(profile, source).with_max_depth(options.max_depth);
    let reduced = reducer.reduce(root);
    if reducer.truncated() > 0 {
        warn!(
            "⚠️  {} subtrees cut at depth {}",
            reducer.truncated(),
            options.max_depth
        );
    }

    Ok(reduced)
}

/// First ERROR or MISSING node in document order
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let children: Vec<Node> = node.children(&mut node.walk()).collect();
    children.into_iter().find_map(first_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::JAVA;

    #[test]
    fn test_parse_source_reduces_valid_code() {
        let tree = parse_source(
            b"public interface Shape { double area(); }",
            &JAVA,
            &ParseOptions::default(),
        )
        .unwrap();

        assert_eq!(locate_declaration(&tree, &JAVA), Some("Shape"));
    }

    #[test]
    fn test_syntax_errors_are_rejected_by_default() {
        let err = parse_source(b"public class { int x = ; ", &JAVA, &ParseOptions::default())
            .unwrap_err();
        assert!(
            matches!(err, ParseFailure::Syntax { line: 1, .. }),
            "Expected a syntax error on line 1, got {:?}",
            err
        );
    }

    #[test]
    fn test_syntax_errors_can_be_tolerated() {
        let options = ParseOptions {
            allow_syntax_errors: true,
            ..ParseOptions::default()
        };
        let tree = parse_source(b"class Broken { int x = ; }", &JAVA, &options).unwrap();
        assert_eq!(tree.kind, "program");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let source = b"class Caf\xE9 {}";
        let options = ParseOptions {
            allow_syntax_errors: true,
            ..ParseOptions::default()
        };
        let tree = parse_source(source, &JAVA, &options).unwrap();
        let value = tree.value().unwrap();
        assert!(value.starts_with("class Caf"));
    }

    #[test]
    fn test_long_expression_artifact_decodes() {
        let terms: Vec<String> = (0..80).map(|i| format!("a{}", i)).collect();
        let source = format!("class A {{ int x = {}; }}", terms.join(" + "));
        let tree = parse_source(source.as_bytes(), &JAVA, &ParseOptions::default()).unwrap();

        let text = tree.to_pretty_json().unwrap();
        let decoded = SyntaxNode::from_json(&text).unwrap();
        assert_eq!(decoded, tree);
    }
}
