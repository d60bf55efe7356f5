//! Lowering from `syn` nodes to the host-neutral syntax model.

use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{Lit, Meta, Pat, Token};

use crate::syntax::{Annotation, Binding, Expr, Literal, LiteralKind, LocalDeclaration, Stmt};

pub(super) fn lower_annotations(attrs: &[syn::Attribute]) -> Vec<Annotation> {
    attrs.iter().map(lower_attribute).collect()
}

fn lower_attribute(attr: &syn::Attribute) -> Annotation {
    let arguments = match &attr.meta {
        Meta::List(_) => attr
            .parse_args_with(Punctuated::<syn::Expr, Token![,]>::parse_terminated)
            .map(|args| args.iter().map(lower_expr).collect())
            .unwrap_or_default(),
        Meta::NameValue(nv) => vec![lower_expr(&nv.value)],
        Meta::Path(_) => Vec::new(),
    };
    Annotation {
        name: path_text(attr.path()),
        arguments,
    }
}

/// Top-level statements only; nested blocks stay opaque.
pub(super) fn lower_block(block: &syn::Block) -> Vec<Stmt> {
    block.stmts.iter().map(lower_stmt).collect()
}

fn lower_stmt(stmt: &syn::Stmt) -> Stmt {
    match stmt {
        syn::Stmt::Local(local) => {
            let initializer = local.init.as_ref().map(|init| lower_expr(&init.expr));
            let mut bindings = Vec::new();
            bind_pattern(&local.pat, initializer, &mut bindings);
            Stmt::Local(LocalDeclaration { bindings })
        }
        syn::Stmt::Expr(expr, _) => Stmt::Expression(lower_expr(expr)),
        syn::Stmt::Item(_) | syn::Stmt::Macro(_) => Stmt::Other,
    }
}

/// `let name = init` and `let name: T = init` bind `name` to the initializer.
/// Destructuring patterns bind their identifiers without one.
fn bind_pattern(pat: &Pat, initializer: Option<Expr>, out: &mut Vec<Binding>) {
    match pat {
        Pat::Ident(p) => out.push(Binding::new(p.ident.to_string(), initializer)),
        Pat::Type(p) => bind_pattern(&p.pat, initializer, out),
        Pat::Tuple(t) => {
            for elem in &t.elems {
                bind_pattern(elem, None, out);
            }
        }
        Pat::TupleStruct(t) => {
            for elem in &t.elems {
                bind_pattern(elem, None, out);
            }
        }
        Pat::Struct(s) => {
            for field in &s.fields {
                bind_pattern(&field.pat, None, out);
            }
        }
        Pat::Slice(s) => {
            for elem in &s.elems {
                bind_pattern(elem, None, out);
            }
        }
        Pat::Reference(r) => bind_pattern(&r.pat, None, out),
        _ => {}
    }
}

pub(super) fn lower_expr(expr: &syn::Expr) -> Expr {
    match expr {
        syn::Expr::Lit(e) => Expr::Literal(lower_lit(&e.lit)),
        syn::Expr::MethodCall(call) => Expr::Invocation {
            target: Box::new(Expr::MemberAccess {
                receiver: Box::new(lower_expr(&call.receiver)),
                member: call.method.to_string(),
            }),
            arguments: call.args.iter().map(lower_expr).collect(),
        },
        syn::Expr::Call(call) => Expr::Invocation {
            target: Box::new(lower_expr(&call.func)),
            arguments: call.args.iter().map(lower_expr).collect(),
        },
        syn::Expr::Field(field) => Expr::MemberAccess {
            receiver: Box::new(lower_expr(&field.base)),
            member: field.member.to_token_stream().to_string(),
        },
        syn::Expr::Path(p) => Expr::Identifier(path_text(&p.path)),
        _ => Expr::Other,
    }
}

/// Literal kind plus its token text exactly as written.
fn lower_lit(lit: &Lit) -> Literal {
    let (kind, text) = match lit {
        Lit::Str(s) => (LiteralKind::String, s.token().to_string()),
        Lit::Int(i) => (LiteralKind::Numeric, i.token().to_string()),
        Lit::Float(f) => (LiteralKind::Numeric, f.token().to_string()),
        Lit::Char(c) => (LiteralKind::Char, c.token().to_string()),
        Lit::Bool(b) => (LiteralKind::Bool, b.value.to_string()),
        other => (LiteralKind::Other, other.to_token_stream().to_string()),
    };
    Literal { kind, text }
}

/// `a::b::c` for a path; a single segment is just its identifier.
fn path_text(path: &syn::Path) -> String {
    let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
    let joined = segments.join("::");
    if path.leading_colon.is_some() {
        format!("::{joined}")
    } else {
        joined
    }
}
