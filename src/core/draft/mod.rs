//! Localized draft reply generation
//!
//! Drafts are rendered from the paragraph tables in [`templates`]. Adding a
//! language means adding a [`Lang`] variant and a table entry.

mod lang;
mod templates;

pub use lang::Lang;
pub use templates::{DraftTemplate, TEMPLATES};

/// Separator placed between rendered paragraphs
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Produce the reply text for a run request
pub fn generate_draft(name: &str, reason: &str, action: &str, lang: Lang) -> String {
    let template = DraftTemplate::for_lang(lang);
    template
        .paragraphs
        .iter()
        .map(|paragraph| render(paragraph, name, reason, action))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

/// Substitute `{name}`, `{reason}` and `{action}` in one left-to-right pass.
///
/// Substituted text is never scanned again, so user input containing braces
/// is emitted verbatim.
fn render(template: &str, name: &str, reason: &str, action: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + reason.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];
        let value = ["name", "reason", "action"]
            .into_iter()
            .zip([name, reason, action])
            .find(|(key, _)| {
                after
                    .strip_prefix('{')
                    .and_then(|s| s.strip_prefix(key))
                    .is_some_and(|s| s.starts_with('}'))
            });

        match value {
            Some((key, value)) => {
                out.push_str(value);
                rest = &after[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
