//! Document splitting and parsing.
//!
//! A file can hold several definitions. Each one starts with a `---` line
//! directly followed by a `name:` line.

use crate::error::{Result, SandbrushError};

use super::body::extract_body;
use super::frontmatter::extract_frontmatter;
use super::span::{Location, Span, Spanned};
use super::types::RawDocument;

/// Parse a file containing one or more document definitions.
pub fn parse_documents(source: &str) -> Result<Vec<RawDocument>> {
    let documents = split_documents(source)
        .into_iter()
        .map(|(start, end)| parse_single_document(source, start, end))
        .collect::<Result<Vec<_>>>()?;

    if documents.is_empty() {
        return Err(SandbrushError::Parse {
            message: "No documents found in file".to_string(),
            help: Some("Add a document with ---\\nname: my-texture\\n---".to_string()),
        });
    }

    Ok(documents)
}

/// Split source into `(start, end)` byte ranges, one per document.
fn split_documents(source: &str) -> Vec<(usize, usize)> {
    let mut sections = Vec::new();
    let mut current_start = 0;
    let mut in_code_block = false;
    let mut offset = 0;

    let mut lines = source.split_inclusive('\n').peekable();
    while let Some(line) = lines.next() {
        if line.trim_start().starts_with("```") {
            in_code_block = !in_code_block;
        }

        let starts_document = !in_code_block
            && offset > 0
            && line.trim() == "---"
            && lines
                .peek()
                .is_some_and(|next| next.trim_start().starts_with("name:"));

        if starts_document {
            if !source[current_start..offset].trim().is_empty() {
                sections.push((current_start, offset));
            }
            current_start = offset;
        }

        offset += line.len();
    }

    if !source[current_start..].trim().is_empty() {
        sections.push((current_start, source.len()));
    }

    sections
}

/// Parse the document occupying `source[start..end]`.
fn parse_single_document(source: &str, start: usize, end: usize) -> Result<RawDocument> {
    let section = &source[start..end];
    let frontmatter = extract_frontmatter(section)?;

    let name = frontmatter
        .get_str("name")
        .map(|s| s.to_string())
        .ok_or_else(|| SandbrushError::Parse {
            message: format!(
                "Document at line {} is missing required 'name' field",
                Location::at(source, start + frontmatter.start).line
            ),
            help: Some("Add name: my-texture to frontmatter".to_string()),
        })?;
    let (name_start, name_end) = name_line(section, frontmatter.start, frontmatter.end)
        .unwrap_or((frontmatter.start, frontmatter.end));
    let name_span = Span::from_offsets(source, start + name_start, start + name_end);

    let body = extract_body(&section[frontmatter.content_start..]).map(|body| {
        let body_start = start + frontmatter.content_start + body.start;
        Spanned::new(
            body.content.to_string(),
            Span::from_offsets(source, body_start, body_start + body.content.len()),
        )
    });

    Ok(RawDocument {
        name: Spanned::new(name, name_span),
        frontmatter,
        body,
        span: Span::from_offsets(source, start, end),
    })
}

/// Byte range of the `name:` line inside `section[from..to]`, without its newline.
fn name_line(section: &str, from: usize, to: usize) -> Option<(usize, usize)> {
    let mut offset = from;
    for line in section[from..to].split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        if line.trim_start().starts_with("name:") {
            return Some((offset + indent, offset + line.trim_end().len()));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_document() {
        let source = r#"---
name: plain-wall
---

```px
color: [45, 45, 45]
tag: wall
```
"#;

        let docs = parse_documents(source).unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name.value, "plain-wall");
        let body = docs[0].body.as_ref().unwrap();
        assert_eq!(body.value, "color: [45, 45, 45]\ntag: wall");
        assert_eq!(body.span.start.line, 6);
    }

    #[test]
    fn test_parse_multiple_documents() {
        let source = r#"---
name: first
---

```px
builtin: wall
```

---
name: second
width: 16
---

```px
builtin: rock
```
"#;

        let docs = parse_documents(source).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name.value, "first");
        assert_eq!(docs[1].name.value, "second");
        assert_eq!(docs[1].frontmatter.get_u32("width").unwrap(), Some(16));
        // Spans are absolute within the file
        assert_eq!(docs[1].span.start.line, 9);
        assert_eq!(docs[1].body.as_ref().unwrap().span.start.line, 15);
    }

    #[test]
    fn test_name_span_covers_name_line() {
        let source = "---\nwidth: 4\nname: grit\n---\n\n```px\nbuiltin: wall\n```\n";
        let docs = parse_documents(source).unwrap();
        let span = docs[0].name.span;
        assert_eq!(span.start.line, 3);
        assert_eq!(span.end.line, 3);
        assert_eq!((span.start.column, span.end.column), (1, 11));
    }

    #[test]
    fn test_separator_inside_fence_does_not_split() {
        let source = "---\nname: a\n---\n```px\n---\nname: b\n```\n";
        let docs = parse_documents(source).unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_parse_document_without_body() {
        let docs = parse_documents("---\nname: empty\n---\n").unwrap();
        assert!(docs[0].body.is_none());
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse_documents("").is_err());
        assert!(parse_documents("  \n\n").is_err());
    }

    #[test]
    fn test_parse_missing_name() {
        let source = "---\nwidth: 4\n---\n\n```px\nbuiltin: wall\n```\n";
        assert!(parse_documents(source).is_err());
    }
}
