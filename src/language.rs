//! Language Support - Shared tree-sitter grammar configuration
//!
//! This module is the single source of truth for which grammars Nexus can export
//! and how each grammar's node kinds are treated by the reducer and the locator.
//! Node-kind decisions are table data on [`LanguageProfile`]; adding grammar
//! coverage means adding a profile or extending a table, never a new branch in
//! `syntax`.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;
use tree_sitter::{Language, Parser};

/// Language used when the caller does not pick one
pub const DEFAULT_LANGUAGE: &str = "java";

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("Unsupported language: '{0}'. Supported languages: java, python, rust, typescript")]
    Unsupported(String),

    #[error("Failed to load tree-sitter grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}

/// Per-grammar node category tables
///
/// All kinds are tree-sitter node kinds as reported by `Node::kind()`.
#[derive(Debug)]
pub struct LanguageProfile {
    pub name: &'static str,
    /// File extensions (without the dot) handled by this grammar
    pub extensions: &'static [&'static str],
    /// Kinds whose text is a full re-serialization of their children; they get no value
    pub opaque_kinds: &'static [&'static str],
    /// Kinds built purely by joining their named children with a separator
    pub dotted_kinds: &'static [(&'static str, &'static str)],
    /// Class-like and interface-like kinds that name an output artifact
    pub declaration_kinds: &'static [&'static str],
    /// Identifier kinds read by the locator inside a declaration
    pub name_kinds: &'static [&'static str],
    grammar: fn() -> Language,
}

impl LanguageProfile {
    pub fn grammar(&self) -> Language {
        (self.grammar)()
    }

    /// Build a parser already configured for this grammar
    pub fn parser(&self) -> Result<Parser, LanguageError> {
        let mut parser = Parser::new();
        parser.set_language(&self.grammar())?;
        Ok(parser)
    }

    pub fn is_opaque(&self, kind: &str) -> bool {
        self.opaque_kinds.contains(&kind)
    }

    /// Join separator when `kind` is a dotted-name kind
    pub fn separator_for(&self, kind: &str) -> Option<&'static str> {
        self.dotted_kinds
            .iter()
            .find(|(dotted, _)| *dotted == kind)
            .map(|(_, separator)| *separator)
    }

    pub fn is_declaration(&self, kind: &str) -> bool {
        self.declaration_kinds.contains(&kind)
    }

    pub fn is_name(&self, kind: &str) -> bool {
        self.name_kinds.contains(&kind)
    }

    pub fn handles_extension(&self, extension: &str) -> bool {
        self.extensions.contains(&extension)
    }
}

fn java_grammar() -> Language {
    tree_sitter_java::LANGUAGE.into()
}

fn python_grammar() -> Language {
    tree_sitter_python::LANGUAGE.into()
}

fn rust_grammar() -> Language {
    tree_sitter_rust::LANGUAGE.into()
}

fn typescript_grammar() -> Language {
    tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
}

pub static JAVA: LanguageProfile = LanguageProfile {
    name: "java",
    extensions: &["java"],
    opaque_kinds: &[
        "class_declaration",
        "interface_declaration",
        "enum_declaration",
        "record_declaration",
    ],
    dotted_kinds: &[("scoped_identifier", "."), ("scoped_type_identifier", ".")],
    declaration_kinds: &[
        "class_declaration",
        "interface_declaration",
        "enum_declaration",
        "record_declaration",
    ],
    name_kinds: &["identifier"],
    grammar: java_grammar,
};

pub static PYTHON: LanguageProfile = LanguageProfile {
    name: "python",
    extensions: &["py", "pyi"],
    opaque_kinds: &["class_definition"],
    dotted_kinds: &[("dotted_name", ".")],
    declaration_kinds: &["class_definition"],
    name_kinds: &["identifier"],
    grammar: python_grammar,
};

pub static RUST: LanguageProfile = LanguageProfile {
    name: "rust",
    extensions: &["rs"],
    opaque_kinds: &["struct_item", "enum_item", "trait_item", "union_item"],
    dotted_kinds: &[("scoped_identifier", "::"), ("scoped_type_identifier", "::")],
    declaration_kinds: &["struct_item", "enum_item", "trait_item", "union_item"],
    name_kinds: &["type_identifier"],
    grammar: rust_grammar,
};

pub static TYPESCRIPT: LanguageProfile = LanguageProfile {
    name: "typescript",
    extensions: &["ts", "mts", "cts"],
    opaque_kinds: &[
        "class_declaration",
        "abstract_class_declaration",
        "interface_declaration",
    ],
    dotted_kinds: &[("nested_identifier", "."), ("nested_type_identifier", ".")],
    declaration_kinds: &[
        "class_declaration",
        "abstract_class_declaration",
        "interface_declaration",
    ],
    name_kinds: &["type_identifier"],
    grammar: typescript_grammar,
};

static PROFILES: &[&LanguageProfile] = &[&JAVA, &PYTHON, &RUST, &TYPESCRIPT];

static BY_EXTENSION: Lazy<HashMap<&'static str, &'static LanguageProfile>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for profile in PROFILES {
        for extension in profile.extensions {
            map.insert(*extension, *profile);
        }
    }
    map
});

/// Look up a profile by language name
pub fn profile(language: &str) -> Result<&'static LanguageProfile, LanguageError> {
    PROFILES
        .iter()
        .copied()
        .find(|profile| profile.name == language)
        .ok_or_else(|| LanguageError::Unsupported(language.to_string()))
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to [`profile`].
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    BY_EXTENSION.get(extension).map(|profile| profile.name)
}

pub fn supported_languages() -> Vec<&'static str> {
    PROFILES.iter().map(|profile| profile.name).collect()
}
