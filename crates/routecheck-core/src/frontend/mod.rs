//! Rust source frontend: parses a file with `syn` and lowers every method
//! that has a body into a [`MethodUnit`].
//!
//! Visited: free functions, inherent and trait `impl` methods, and trait
//! methods with a default body, including those inside inline `mod` blocks.
//! Functions nested in other function bodies are not visited.

mod lower;

use syn::{ImplItem, Item, TraitItem};

use crate::error::ScanError;
use crate::syntax::{Block, Location, MethodUnit, SourceTree};

use lower::{lower_annotations, lower_block};

/// One source file, already read.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the scan root, forward-slash normalized.
    pub rel_path: String,
    pub content: String,
}

/// Parse `file` and return its methods in source order.
pub fn parse_methods(file: &SourceFile) -> Result<Vec<MethodUnit>, ScanError> {
    let parsed = syn::parse_file(&file.content).map_err(|e| {
        let start = e.span().start();
        ScanError::Parse {
            path: file.rel_path.clone(),
            line: start.line,
            message: e.to_string(),
        }
    })?;

    let tree = SourceTree::new(&file.rel_path);
    let mut methods = Vec::new();
    collect_items(&parsed.items, &tree, &mut methods);
    Ok(methods)
}

fn collect_items(items: &[Item], tree: &SourceTree, out: &mut Vec<MethodUnit>) {
    for item in items {
        match item {
            Item::Fn(f) => out.push(method_unit(&f.attrs, &f.sig.ident, &f.block, tree)),
            Item::Impl(i) => {
                for impl_item in &i.items {
                    if let ImplItem::Fn(f) = impl_item {
                        out.push(method_unit(&f.attrs, &f.sig.ident, &f.block, tree));
                    }
                }
            }
            Item::Trait(t) => {
                for trait_item in &t.items {
                    if let TraitItem::Fn(f) = trait_item {
                        if let Some(block) = &f.default {
                            out.push(method_unit(&f.attrs, &f.sig.ident, block, tree));
                        }
                    }
                }
            }
            Item::Mod(m) => {
                if let Some((_, nested)) = &m.content {
                    collect_items(nested, tree, out);
                }
            }
            _ => {}
        }
    }
}

fn method_unit(
    attrs: &[syn::Attribute],
    ident: &syn::Ident,
    block: &syn::Block,
    tree: &SourceTree,
) -> MethodUnit {
    MethodUnit {
        name: ident.to_string(),
        annotations: lower_annotations(attrs),
        body: Block {
            tree: tree.clone(),
            statements: lower_block(block),
        },
        locations: vec![ident_location(ident, tree)],
    }
}

/// 1-based line and column of `ident`.
fn ident_location(ident: &syn::Ident, tree: &SourceTree) -> Location {
    let start = ident.span().start();
    Location {
        tree: tree.clone(),
        line: start.line,
        column: start.column + 1,
    }
}
