//! Link classifier.
//!
//! Every markup link becomes either an external link (destination kept
//! verbatim) or an internal link carrying an unresolved target name. Name
//! priority: a `doc://` destination wins, then the authored title, then the
//! link's own plain-text content, then empty. An empty name is left for the
//! consuming stage to warn about.

use crate::model::{InlineNode, Link, Resolution};

/// Destination scheme marking a reference to a documented entity.
pub const INTERNAL_SCHEME: &str = "doc://";

pub fn classify(destination: &str, title: &str, content: Vec<InlineNode>) -> Link {
    if let Some(rest) = destination.strip_prefix(INTERNAL_SCHEME) {
        return Link::Internal {
            title: non_empty(title),
            content,
            resolution: Resolution::Unresolved(rest.trim_end_matches('/').to_string()),
        };
    }

    if destination.is_empty() {
        let name = if title.is_empty() {
            plain_text(&content)
        } else {
            // The title slot held the target name, it is not a display title.
            title.to_string()
        };
        return Link::Internal {
            title: None,
            content,
            resolution: Resolution::Unresolved(name),
        };
    }

    Link::External {
        url: destination.to_string(),
        title: non_empty(title),
        content,
    }
}

fn non_empty(title: &str) -> Option<String> {
    (!title.is_empty()).then(|| title.to_string())
}

/// The concatenated text of a link body, or empty if the body holds anything
/// other than plain text.
fn plain_text(content: &[InlineNode]) -> String {
    let mut text = String::new();
    for node in content {
        match node {
            InlineNode::Text(t) => text.push_str(t),
            _ => return String::new(),
        }
    }
    text
}
