//! Locating texture files on disk.
//!
//! Explicit file arguments are taken as-is; directories are walked
//! recursively for `.texture.md` files.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Result, SandbrushError};
use crate::parser::{parse_texture_file, Texture};

/// File suffix of texture definition files.
pub const TEXTURE_SUFFIX: &str = ".texture.md";

/// Whether `path` names a texture definition file.
pub fn is_texture_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(TEXTURE_SUFFIX))
}

/// Expand files and directories into a sorted list of texture files.
pub fn collect_texture_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_texture_file(e.path()))
                .map(|e| e.into_path());
            let before = files.len();
            files.extend(found);
            debug!("{}: {} texture file(s)", path.display(), files.len() - before);
        } else if path.exists() {
            files.push(path.clone());
        } else {
            return Err(SandbrushError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Read and parse every texture in a file.
pub fn load_textures(path: &Path) -> Result<Vec<Texture>> {
    let source = fs::read_to_string(path).map_err(|e| SandbrushError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read texture file: {}", e),
    })?;
    parse_texture_file(&source).map_err(|e| match e {
        SandbrushError::Parse { message, help } => SandbrushError::Parse {
            message: format!("{}: {}", path.display(), message),
            help,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const WALL: &str = "---\nname: wall\n---\n\n```px\nbuiltin: wall\n```\n";

    #[test]
    fn test_is_texture_file() {
        assert!(is_texture_file(Path::new("a/walls.texture.md")));
        assert!(!is_texture_file(Path::new("a/walls.md")));
        assert!(!is_texture_file(Path::new("a/texture.md.bak")));
    }

    #[test]
    fn test_collect_walks_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("metals");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("walls.texture.md"), WALL).unwrap();
        fs::write(nested.join("iron.texture.md"), WALL).unwrap();
        fs::write(dir.path().join("notes.md"), "not a texture").unwrap();

        let files = collect_texture_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_texture_file(f)));
    }

    #[test]
    fn test_collect_missing_path() {
        let dir = tempdir().unwrap();
        assert!(collect_texture_files(&[dir.path().join("nope.texture.md")]).is_err());
    }

    #[test]
    fn test_load_textures() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("walls.texture.md");
        fs::write(&path, WALL).unwrap();

        let textures = load_textures(&path).unwrap();
        assert_eq!(textures[0].name, "wall");
    }
}
