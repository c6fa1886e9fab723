//! Declaration locator
//!
//! Finds the name an artifact is saved under. Only the root's immediate children
//! are considered declarations, and only a declaration's immediate children are
//! searched for its name.

use super::node::SyntaxNode;
use crate::language::LanguageProfile;

/// Name of the first top-level declaration that has a name child
///
/// Additional top-level declarations stay in the tree but do not name anything.
pub fn locate_declaration<'t>(tree: &'t SyntaxNode, profile: &LanguageProfile) -> Option<&'t str> {
    tree.children
        .iter()
        .filter(|child| profile.is_declaration(&child.kind))
        .find_map(|declaration| declaration_name(declaration, profile))
}

/// Names of every top-level declaration, in source order
pub fn locate_all<'t>(tree: &'t SyntaxNode, profile: &LanguageProfile) -> Vec<&'t str> {
    tree.children
        .iter()
        .filter(|child| profile.is_declaration(&child.kind))
        .filter_map(|declaration| declaration_name(declaration, profile))
        .collect()
}

fn declaration_name<'t>(declaration: &'t SyntaxNode, profile: &LanguageProfile) -> Option<&'t str> {
    declaration
        .children
        .iter()
        .find(|child| profile.is_name(&child.kind))
        .and_then(SyntaxNode::value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{JAVA, PYTHON, RUST};

    fn identifier(name: &str) -> SyntaxNode {
        SyntaxNode::new("identifier").with_value(name)
    }

    fn program(children: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode::new("program").with_children(children)
    }

    #[test]
    fn test_finds_class_name() {
        let tree = program(vec![
            SyntaxNode::new("package_declaration").with_value("package a;"),
            SyntaxNode::new("class_declaration").with_children(vec![
                SyntaxNode::new("modifiers").with_value("public"),
                identifier("Foo"),
            ]),
        ]);

        assert_eq!(locate_declaration(&tree, &JAVA), Some("Foo"));
    }

    #[test]
    fn test_first_declaration_wins() {
        let tree = program(vec![
            SyntaxNode::new("interface_declaration")
                .with_value("interface First {}")
                .with_children(vec![identifier("First")]),
            SyntaxNode::new("class_declaration").with_children(vec![identifier("Second")]),
        ]);

        assert_eq!(locate_declaration(&tree, &JAVA), Some("First"));
        assert_eq!(locate_all(&tree, &JAVA), vec!["First", "Second"]);
    }

    #[test]
    fn test_package_only_file_has_no_declaration() {
        let tree = program(vec![SyntaxNode::new("package_declaration")
            .with_value("package a.b;")
            .with_children(vec![SyntaxNode::new("scoped_identifier").with_value("a.b")])]);

        assert_eq!(locate_declaration(&tree, &JAVA), None);
    }

    #[test]
    fn test_search_is_shallow() {
        // A class nested under a non-declaration node is not found
        let tree = program(vec![SyntaxNode::new("block").with_children(vec![
            SyntaxNode::new("class_declaration").with_children(vec![identifier("Hidden")]),
        ])]);
        assert_eq!(locate_declaration(&tree, &JAVA), None);

        // Nor is an identifier nested below the declaration's direct children
        let tree = program(vec![SyntaxNode::new("class_declaration").with_children(vec![
            SyntaxNode::new("class_body").with_children(vec![identifier("Inner")]),
        ])]);
        assert_eq!(locate_declaration(&tree, &JAVA), None);
    }

    #[test]
    fn test_skips_declarations_without_a_name() {
        let tree = program(vec![
            SyntaxNode::new("class_declaration"),
            SyntaxNode::new("class_declaration").with_children(vec![identifier("Named")]),
        ]);
        assert_eq!(locate_declaration(&tree, &JAVA), Some("Named"));
    }

    #[test]
    fn test_uses_profile_categories() {
        let tree = SyntaxNode::new("source_file").with_children(vec![SyntaxNode::new(
            "struct_item",
        )
        .with_children(vec![
            SyntaxNode::new("visibility_modifier").with_value("pub"),
            SyntaxNode::new("type_identifier").with_value("Config"),
        ])]);

        assert_eq!(locate_declaration(&tree, &RUST), Some("Config"));
        assert_eq!(locate_declaration(&tree, &JAVA), None);
        assert_eq!(locate_declaration(&tree, &PYTHON), None);
    }
}
