//! Bounded, sorted directory traversal.
//!
//! Unreadable entries are logged and skipped instead of aborting the walk.
//! Symlinks are not followed unless asked for, and when they are, `walkdir`
//! reports loops as errors which are skipped like any other unreadable entry.

use crate::utils::error::Result;
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// Path relative to the walk root.
    pub relative: PathBuf,
    pub kind: EntryKind,
}

impl WalkEntry {
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Relative path with `/` separators on every platform.
    pub fn relative_slash(&self) -> String {
        to_slash(&self.relative)
    }
}

#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub min_depth: usize,
    pub max_depth: usize,
    pub follow_links: bool,
    pub pattern: Option<GlobMatcher>,
    pub exclude_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            min_depth: 1,
            max_depth: 8,
            follow_links: false,
            pattern: None,
            exclude_dirs: Vec::new(),
        }
    }
}

impl WalkOptions {
    /// Only the direct children of the root.
    pub fn children() -> Self {
        Self {
            max_depth: 1,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(self.min_depth);
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = Some(compile_pattern(pattern)?);
        Ok(self)
    }

    pub fn with_excluded_dirs(mut self, dirs: &[String]) -> Self {
        self.exclude_dirs = dirs.to_vec();
        self
    }
}

/// `*` stays within one path segment; `**` crosses segments.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern).literal_separator(true).build()?;
    Ok(glob.compile_matcher())
}

pub struct DirectoryWalker {
    root: PathBuf,
    options: WalkOptions,
}

impl DirectoryWalker {
    pub fn new(root: impl AsRef<Path>, options: WalkOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Lazily yields matching entries in file-name order.
    pub fn entries(&self) -> impl Iterator<Item = WalkEntry> + '_ {
        WalkDir::new(&self.root)
            .min_depth(self.options.min_depth)
            .max_depth(self.options.max_depth)
            .follow_links(self.options.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.is_excluded(entry))
            .filter_map(move |result| match result {
                Ok(entry) => Some(entry),
                Err(err) => {
                    let location = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    tracing::warn!("⚠️ Skipping unreadable entry {}: {}", location, err);
                    None
                }
            })
            .filter_map(move |entry| self.to_walk_entry(entry))
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.options.exclude_dirs.iter().any(|d| d == name))
    }

    fn to_walk_entry(&self, entry: DirEntry) -> Option<WalkEntry> {
        let relative = entry.path().strip_prefix(&self.root).ok()?.to_path_buf();

        if let Some(pattern) = &self.options.pattern {
            if !pattern.is_match(to_slash(&relative)) {
                return None;
            }
        }

        let file_type = entry.file_type();
        let kind = if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        };

        Some(WalkEntry {
            path: entry.into_path(),
            relative,
            kind,
        })
    }
}

pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
