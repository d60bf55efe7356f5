//! Message rendering helpers.

/// Substitute positional `{n}` markers in `format` with `args[n]`.
///
/// Single pass: argument text is copied verbatim, so an argument that itself
/// contains `{0}` (an actual path literal, say) is not expanded again.
/// Markers with no matching argument are left as written.
pub fn format_message(format: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Literal token text without its quote characters, for display.
///
/// Handles `"..."`, raw `r"..."` / `r#"..."#` and verbatim `@"..."` forms;
/// anything else is returned unchanged.
pub fn strip_quotes(literal: &str) -> &str {
    let body = literal
        .strip_prefix('@')
        .or_else(|| literal.strip_prefix('r'))
        .unwrap_or(literal);
    let hashes = body.len() - body.trim_start_matches('#').len();
    let body = &body[hashes..];
    let trimmed = body.trim_end_matches('#');
    if body.len() - trimmed.len() != hashes {
        return literal;
    }
    let body = trimmed;

    match body.strip_prefix('"').and_then(|b| b.strip_suffix('"')) {
        Some(inner) => inner,
        None => literal,
    }
}
