use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{HeaderCompareError, Result};
use crate::utils::has_allowed_extension;

/// Qualifying files directly inside one directory, keyed by filename.
#[derive(Debug)]
pub struct FileIndex {
    pub files: HashMap<String, PathBuf>, // name -> abs
    pub root: PathBuf,
}

impl FileIndex {
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.files.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_ignored(name: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pat| pat.matches(name))
}

pub fn index_dir(root: &Path, patterns: &[Pattern]) -> Result<FileIndex> {
    if !root.is_dir() {
        return Err(HeaderCompareError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = HashMap::new();

    // Direct children only; symlinks are reported as such and never followed.
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !has_allowed_extension(path) {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        if is_ignored(name, patterns) {
            debug!(file = name, "ignored by pattern");
            continue;
        }

        files.insert(name.to_string(), path.to_path_buf());
    }

    let index = FileIndex {
        files,
        root: root.to_path_buf(),
    };
    debug!(root = %root.display(), files = index.len(), "indexed directory");

    Ok(index)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
