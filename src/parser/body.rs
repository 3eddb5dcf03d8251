//! Fenced body extraction.

/// Body of a document: the text inside its ```` ```px ```` fence.
///
/// Offsets are local to the text passed to [`extract_body`].
#[derive(Debug, PartialEq, Eq)]
pub struct Body<'a> {
    pub content: &'a str,
    /// Offset of the first content byte
    pub start: usize,
}

/// Find the first ```` ```px ```` fence and return its content.
///
/// Returns `None` when there is no fence or it is never closed.
pub fn extract_body(source: &str) -> Option<Body<'_>> {
    let mut offset = 0;
    let mut content_start = None;

    for line in source.split_inclusive('\n') {
        let trimmed = line.trim();
        match content_start {
            None if trimmed.starts_with("```px") || trimmed.starts_with("``` px") => {
                content_start = Some(offset + line.len());
            }
            Some(start) if trimmed == "```" => {
                let content = &source[start..offset];
                return Some(Body {
                    content: content.strip_suffix('\n').unwrap_or(content),
                    start,
                });
            }
            _ => {}
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_body() {
        let body = extract_body("```px\ncolor: [1, 2, 3]\ntag: wall\n```\n").unwrap();
        assert_eq!(body.content, "color: [1, 2, 3]\ntag: wall");
        assert_eq!(body.start, 6);
    }

    #[test]
    fn test_extract_body_with_prefix() {
        let source = "Notes about the texture.\n\n```px\nbuiltin: rock\n```\nafter";
        let body = extract_body(source).unwrap();
        assert_eq!(body.content, "builtin: rock");
        assert_eq!(&source[body.start..body.start + 7], "builtin");
    }

    #[test]
    fn test_other_fences_ignored() {
        let source = "```yaml\nnot: this\n```\n\n```px\nbuiltin: wall\n```";
        assert_eq!(extract_body(source).unwrap().content, "builtin: wall");
    }

    #[test]
    fn test_extract_body_no_fence() {
        assert!(extract_body("no code fence here").is_none());
    }

    #[test]
    fn test_extract_body_unclosed() {
        assert!(extract_body("```px\njoin:\n  - builtin: wall").is_none());
    }
}
