//! YAML frontmatter extraction.

use std::collections::HashMap;

use crate::error::{Result, SandbrushError};

/// Frontmatter of one document section.
///
/// Offsets are local to the section passed to [`extract_frontmatter`].
#[derive(Debug)]
pub struct Frontmatter {
    /// Parsed top-level keys
    pub values: HashMap<String, serde_yaml::Value>,
    /// Offset of the opening `---`
    pub start: usize,
    /// Offset just past the closing `---`
    pub end: usize,
    /// Offset where the content after the frontmatter begins
    pub content_start: usize,
}

impl Frontmatter {
    /// String value for `key`, if present.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }

    /// Non-negative integer value for `key`.
    ///
    /// A present key with a non-integer value is a parse error.
    pub fn get_u32(&self, key: &str) -> Result<Option<u32>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| SandbrushError::Parse {
                    message: format!("Frontmatter '{}' must be a positive integer", key),
                    help: None,
                }),
        }
    }
}

/// Extract YAML frontmatter delimited by `---` lines from the start of a section.
pub fn extract_frontmatter(source: &str) -> Result<Frontmatter> {
    let start = source.len() - source.trim_start().len();
    let trimmed = &source[start..];

    if !trimmed.starts_with("---") {
        return Err(SandbrushError::Parse {
            message: "Document must start with ---".to_string(),
            help: Some("Add YAML frontmatter: ---\\nname: my-texture\\n---".to_string()),
        });
    }

    let yaml_start = match trimmed.find('\n') {
        Some(i) => start + i + 1,
        None => source.len(),
    };
    let yaml_section = &source[yaml_start..];

    let closing = find_closing_delimiter(yaml_section).ok_or_else(|| SandbrushError::Parse {
        message: "Unclosed frontmatter: missing closing ---".to_string(),
        help: Some("Add --- after the YAML content".to_string()),
    })?;

    let values = parse_mapping(&yaml_section[..closing])?;

    let end = yaml_start + closing + 3;
    let content_start = source[end..]
        .find('\n')
        .map(|i| end + i + 1)
        .unwrap_or(source.len());

    Ok(Frontmatter {
        values,
        start,
        end,
        content_start,
    })
}

fn parse_mapping(yaml: &str) -> Result<HashMap<String, serde_yaml::Value>> {
    let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| SandbrushError::Parse {
        message: format!("Invalid YAML in frontmatter: {}", e),
        help: None,
    })?;

    match parsed {
        serde_yaml::Value::Mapping(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| key.as_str().map(|k| (k.to_string(), value)))
            .collect()),
        serde_yaml::Value::Null => Ok(HashMap::new()),
        _ => Err(SandbrushError::Parse {
            message: "Frontmatter must be a YAML mapping".to_string(),
            help: Some("Use key: value format".to_string()),
        }),
    }
}

/// Offset of the first line that is exactly `---`.
fn find_closing_delimiter(s: &str) -> Option<usize> {
    let mut offset = 0;
    for line in s.split_inclusive('\n') {
        if line.trim() == "---" {
            return Some(offset + (line.len() - line.trim_start().len()));
        }
        offset += line.len();
    }
    None
}
