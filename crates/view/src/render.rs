//! Plain-text rendering, used by the one-shot mode and scenario tests.

use crate::page::PageState;
use crate::projection::{EmployeeView, PAGE_TITLE};

/// Renders the page to plain text.
///
/// The loading screen renders as long as no record has resolved, which
/// includes the state after a failed fetch.
pub fn render_text(state: &PageState) -> String {
    match state {
        PageState::Loading => "Loading employee details...\n".to_owned(),
        PageState::Loaded(view) => render_view(view),
    }
}

fn render_view(view: &EmployeeView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{PAGE_TITLE} [{}]\n\n", view.role));
    for (label, value, _) in view.grid() {
        out.push_str(&format!("  {label:<15}  {value}\n"));
    }
    out.push_str(&format!("\n  {:<15}  {}\n", "Address", view.address));
    out.push_str("\nAttachments\n");
    for attachment in &view.attachments {
        out.push_str(&format!(
            "  {:<22}  {}  {}\n",
            attachment.label, attachment.size, attachment.reference,
        ));
    }
    out
}
