//! `routecheck normalize` – show how a template is compared.

use routecheck_core::template;

pub fn run_normalize(input: &str) {
    print!("{}", render(input));
}

/// Normalized template, then how many placeholders were rewritten.
fn render(input: &str) -> String {
    format!(
        "{}\n{} placeholder(s)\n",
        template::normalize(input),
        template::placeholder_count(input)
    )
}
