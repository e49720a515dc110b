//! Run element (w:r) - a contiguous run of text with uniform formatting

use crate::document::{text_tokens, NodeKind};
use crate::xml::XmlElement;

/// Tokens from every text leaf (w:t) directly inside a run.
///
/// Formatting, tabs, breaks and anything else in the run are ignored.
pub fn run_tokens(run: &XmlElement) -> Vec<String> {
    run.elements()
        .filter(|child| child.kind() == NodeKind::Text)
        .flat_map(text_tokens)
        .collect()
}
