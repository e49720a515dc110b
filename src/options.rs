//! Formatting options configuration.

/// Column width used when none is given.
pub const DEFAULT_WIDTH: usize = 80;

/// Options controlling how document text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line width in characters before wrapping
    pub width: usize,
}

impl FormatOptions {
    /// Create options with the default width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}
