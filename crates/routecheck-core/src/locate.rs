//! Finds the two strings the rule compares: the template declared on the
//! method and the path literal the body actually formats.
//!
//! Both lookups are pure and never fail; anything that does not have the
//! expected shape is reported as `None`.

use crate::syntax::{Expr, MethodUnit, Stmt};

/// Local binding name that holds the request path in conforming methods.
pub const URI_BINDING: &str = "uri";

/// Raw text (quotes included) of the first argument of the first annotation
/// named `marker`, if that argument is a string literal.
pub fn declared_template<'m>(method: &'m MethodUnit, marker: &str) -> Option<&'m str> {
    let annotation = method.annotations.iter().find(|a| a.name == marker)?;
    let first = annotation.arguments.first()?;
    first.as_string_literal().map(|lit| lit.text.as_str())
}

/// Raw text (quotes included) of the string receiver in the first top-level
/// `uri = "...".format(...)` declaration of the body.
///
/// Only the first `uri` binding of each declaration is looked at. One
/// initialized any other way does not qualify and the scan moves on to the
/// next declaration. Literals passed inline to a call without a `uri`
/// binding are not searched for.
pub fn actual_url_literal(method: &MethodUnit) -> Option<&str> {
    method
        .body
        .statements
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::Local(decl) => Some(decl),
            _ => None,
        })
        .filter_map(|decl| decl.bindings.iter().find(|b| b.name == URI_BINDING))
        .find_map(|binding| formatted_receiver(binding.initializer.as_ref()?))
}

/// For `"literal".member(...)`, the literal's text.
fn formatted_receiver(init: &Expr) -> Option<&str> {
    let Expr::Invocation { target, .. } = init else {
        return None;
    };
    let Expr::MemberAccess { receiver, .. } = target.as_ref() else {
        return None;
    };
    receiver.as_string_literal().map(|lit| lit.text.as_str())
}
