//! Markdown rendering of grouped methods.

use std::fmt::Write as _;

use crate::grouping::MethodGroup;

/// Render groups as markdown documentation.
///
/// Example lines are only written for methods that carry examples.
#[must_use]
pub fn render(groups: &[MethodGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "## {}", group.name);
        let _ = writeln!(out, "{}\n", group.header);

        for method in &group.methods {
            let _ = writeln!(out, "### {}", method.name);
            let _ = writeln!(out, "{}\n", method.comment);

            if let Some(inputs) = &method.input_example {
                let _ = writeln!(out, "Inputs: `{inputs}`\n");
            }
            if let Some(response) = &method.response_example {
                let _ = writeln!(out, "Response: `{response}`\n");
            }
        }
    }
    out
}
