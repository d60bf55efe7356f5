//! CLI command handlers, one file per command.

mod check;
mod completions;
mod normalize;
mod rules;

pub use check::{run_check, CheckArgs};
pub use completions::run_completions;
pub use normalize::run_normalize;
pub use rules::run_rules;
