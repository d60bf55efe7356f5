//! Host-neutral syntax model consumed by the rule engine.
//!
//! A host (the Rust frontend in [`crate::frontend`], or any other parser)
//! lowers each method it visits into a [`MethodUnit`]. The engine only ever
//! matches on these enums; it never sees the host's own tree.

mod location;

pub use location::{Location, SourceTree};

/// A single analyzable method, materialized once per visit.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodUnit {
    /// Declared identifier of the method.
    pub name: String,
    /// Metadata annotations in the order they are written.
    pub annotations: Vec<Annotation>,
    pub body: Block,
    /// Identifier location of every declaration of this method. Partial
    /// declarations may live in different source trees.
    pub locations: Vec<Location>,
}

impl MethodUnit {
    /// The identifier location that belongs to the same tree as the body.
    pub fn location_in_body_tree(&self) -> Option<&Location> {
        self.locations.iter().find(|l| l.tree == self.body.tree)
    }
}

/// Method body: top-level statements plus the tree they were parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub tree: SourceTree,
    pub statements: Vec<Stmt>,
}

/// Metadata tag attached to a method (`#[endpoint("...")]`, `[Endpoint("...")]`).
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Name as written. Qualified names keep their separators.
    pub name: String,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Local(LocalDeclaration),
    Expression(Expr),
    /// Anything the engine never inspects (items, macros, ...).
    Other,
}

/// A local variable declaration statement. Some languages declare several
/// variables in one statement, so bindings are a list.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalDeclaration {
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub initializer: Option<Expr>,
}

impl Binding {
    pub fn new(name: impl Into<String>, initializer: Option<Expr>) -> Self {
        Self {
            name: name.into(),
            initializer,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(String),
    /// `receiver.member`
    MemberAccess { receiver: Box<Expr>, member: String },
    /// `target(arguments...)`; a method call has a `MemberAccess` target.
    Invocation { target: Box<Expr>, arguments: Vec<Expr> },
    Other,
}

impl Expr {
    pub fn string(text: impl Into<String>) -> Self {
        Expr::Literal(Literal {
            kind: LiteralKind::String,
            text: text.into(),
        })
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    /// `receiver.method(arguments...)`
    pub fn method_call(receiver: Expr, method: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Expr::Invocation {
            target: Box::new(Expr::MemberAccess {
                receiver: Box::new(receiver),
                member: method.into(),
            }),
            arguments,
        }
    }

    /// The literal, if this expression is a string literal.
    pub fn as_string_literal(&self) -> Option<&Literal> {
        match self {
            Expr::Literal(lit) if lit.kind == LiteralKind::String => Some(lit),
            _ => None,
        }
    }
}

/// A literal token. `text` is the token exactly as written in the source,
/// quote characters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Numeric,
    Char,
    Bool,
    Other,
}
