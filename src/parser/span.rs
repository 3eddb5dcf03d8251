//! Source positions for definition-file diagnostics.

use std::fmt;

/// A position in a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Byte offset from start of file
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters)
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }

    /// Locate a byte offset in `source`.
    pub fn at(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];

        let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() as u32 + 1;

        Self { offset, line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    /// Span between two byte offsets of the whole file.
    pub fn from_offsets(source: &str, start: usize, end: usize) -> Self {
        Self {
            start: Location::at(source, start),
            end: Location::at(source, end),
        }
    }

    /// Number of lines the span starts after the top of the file.
    pub fn line_offset(&self) -> u32 {
        self.start.line.saturating_sub(1)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(f, "{}:{}-{}", self.start.line, self.start.column, self.end.column)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A value with the span it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_at() {
        let source = "name\nbody";

        assert_eq!(Location::at(source, 0), Location::new(0, 1, 1));
        assert_eq!(Location::at(source, 4), Location::new(4, 1, 5));
        assert_eq!(Location::at(source, 5), Location::new(5, 2, 1));
        assert_eq!(Location::at(source, 99), Location::new(9, 2, 5));
    }

    #[test]
    fn test_span_display() {
        let source = "join:\n  - color: [1, 2, 3]";
        assert_eq!(Span::from_offsets(source, 0, 4).to_string(), "1:1-5");
        assert_eq!(Span::from_offsets(source, 0, 10).to_string(), "1:1-2:5");
        assert_eq!(Span::from_offsets(source, 6, 10).line_offset(), 1);
    }
}
