//! JSON sidecar describing a rendered texture.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SandbrushError};

use super::Canvas;

/// Summary of one rendered texture, written next to its PNG.
#[derive(Debug, Clone, Serialize)]
pub struct TextureMeta {
    pub name: String,
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub origin: (i64, i64),
    /// Painted cells per material tag name.
    pub tags: BTreeMap<String, usize>,
    /// Cells no brush contributed to.
    pub unset: usize,
}

impl TextureMeta {
    pub fn from_canvas(name: impl Into<String>, image: impl Into<String>, canvas: &Canvas) -> Self {
        let tags = canvas
            .tag_histogram()
            .into_iter()
            .map(|(tag, count)| (tag.name().to_string(), count))
            .collect();
        let total = canvas.width() as usize * canvas.height() as usize;

        Self {
            name: name.into(),
            image: image.into(),
            width: canvas.width(),
            height: canvas.height(),
            origin: canvas.origin(),
            tags,
            unset: total - canvas.painted(),
        }
    }
}

/// Write texture metadata as pretty JSON.
pub fn write_meta_json(meta: &TextureMeta, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(meta).map_err(|e| SandbrushError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to serialize texture metadata: {}", e),
    })?;
    fs::write(path, json).map_err(|e| SandbrushError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write texture metadata: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brushes, MaterialTag};
    use tempfile::tempdir;

    #[test]
    fn test_meta_counts() {
        let mut canvas = Canvas::new(3, 2);
        canvas.fill(&Brushes::color(1, 2, 3, MaterialTag::Sand).unwrap());

        let meta = TextureMeta::from_canvas("dune", "dune.png", &canvas);
        assert_eq!(meta.tags.get("sand"), Some(&6));
        assert_eq!(meta.unset, 0);
    }

    #[test]
    fn test_write_meta_json() {
        let canvas = Canvas::new(2, 2);
        let meta = TextureMeta::from_canvas("blank", "blank.png", &canvas);

        let dir = tempdir().unwrap();
        let path = dir.path().join("blank.json");
        write_meta_json(&meta, &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["name"], "blank");
        assert_eq!(value["unset"], 4);
        assert_eq!(value["origin"], serde_json::json!([0, 0]));
    }
}
