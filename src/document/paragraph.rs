//! Paragraph element (w:p) and the inline containers it holds

use crate::document::{run_tokens, NodeKind};
use crate::xml::XmlElement;

/// Tokens from the runs of a hyperlink (w:hyperlink).
///
/// The link target is dropped, only the visible text is kept.
pub fn hyperlink_tokens(link: &XmlElement) -> Vec<String> {
    link.elements()
        .filter(|child| child.kind() == NodeKind::Run)
        .flat_map(run_tokens)
        .collect()
}

/// Tokens from a smart tag (w:smartTag) and any smart tags nested in it.
pub fn smart_tag_tokens(tag: &XmlElement) -> Vec<String> {
    let mut tokens = Vec::new();
    // Walked with an explicit stack; nesting depth is unbounded
    let mut stack = vec![tag.elements()];

    while let Some(children) = stack.last_mut() {
        let Some(child) = children.next() else {
            stack.pop();
            continue;
        };
        match child.kind() {
            NodeKind::Run => tokens.extend(run_tokens(child)),
            NodeKind::SmartTag => stack.push(child.elements()),
            _ => {}
        }
    }

    tokens
}

/// All tokens of a paragraph, in document order
pub fn paragraph_tokens(paragraph: &XmlElement) -> Vec<String> {
    let mut tokens = Vec::new();
    for child in paragraph.elements() {
        match child.kind() {
            NodeKind::Run => tokens.extend(run_tokens(child)),
            NodeKind::Hyperlink => tokens.extend(hyperlink_tokens(child)),
            NodeKind::SmartTag => tokens.extend(smart_tag_tokens(child)),
            _ => log::trace!("skipping <{}> in paragraph", child.name),
        }
    }
    tokens
}

/// Lay a paragraph out into lines no wider than `width`.
///
/// The first line is always an empty placeholder, so every paragraph shows
/// up in the output even when it has no text.
pub fn format_paragraph(paragraph: &XmlElement, width: usize) -> Vec<String> {
    let mut wrapper = LineWrapper::new(width);
    for token in paragraph_tokens(paragraph) {
        wrapper.push(&token);
    }
    wrapper.finish()
}

/// Greedy line packer.
///
/// Every token is followed by one space. A token that would push the line
/// past `width` (not counting its trailing space) starts a new line; a token
/// wider than `width` on its own is kept whole.
#[derive(Debug)]
pub struct LineWrapper {
    width: usize,
    lines: Vec<String>,
    line: String,
    line_len: usize,
}

impl LineWrapper {
    /// Create a wrapper holding only the leading placeholder line
    pub fn new(width: usize) -> Self {
        Self {
            width,
            lines: vec![String::new()],
            line: String::new(),
            line_len: 0,
        }
    }

    /// Append one token
    pub fn push(&mut self, token: &str) {
        let token_len = token.chars().count();
        if self.line_len + token_len > self.width {
            // Flushes even when the line is still empty
            self.lines.push(std::mem::take(&mut self.line));
            self.line_len = 0;
        }
        self.line.push_str(token);
        self.line.push(' ');
        self.line_len += token_len + 1;
    }

    /// Flush the pending line and return all lines
    pub fn finish(mut self) -> Vec<String> {
        if !self.line.is_empty() {
            self.lines.push(self.line);
        }
        self.lines
    }
}
