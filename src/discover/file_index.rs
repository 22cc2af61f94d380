//! Flat inventory of the C/C++ files in a project tree.
//!
//! The index is built by a single recursive walk and is read-only afterwards.
//! Lookups are by *string suffix*: `resolve("util/helper.h")` returns the
//! first indexed path whose text ends with `util/helper.h`.
//!
//! ## Ambiguous matches
//!
//! Suffix matching is deliberately loose. A query of `utils.h` matches both
//! `a/utils.h` and `b/utils.h` (and `myutils.h`, since the match is on raw
//! text rather than path components). The index is kept sorted by path, and
//! the first match in that order wins, so the choice is reproducible but not
//! necessarily the file the author meant. Callers that need exact identity
//! should compare [`FileRecord::path`] themselves.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::discover::errors::DiscoverError;

/// Every file suffix the index recognizes.
pub const SOURCE_SUFFIXES: &[&str] = &[
    ".cpp", ".c", ".cp", ".c++", ".cc", ".h", ".hh", ".hp", ".hpp", ".h++",
];

/// Implementation suffixes, in companion lookup priority order.
pub const IMPL_SUFFIXES: &[&str] = &[".cpp", ".c", ".cp", ".c++"];

/// Header suffixes that may have a companion implementation file.
pub const HEADER_SUFFIXES: &[&str] = &[".h", ".hh", ".hp", ".hpp", ".h++"];

/// Returns the recognized suffix of a file name, if any.
pub fn source_suffix(name: &str) -> Option<&'static str> {
    SOURCE_SUFFIXES.iter().copied().find(|s| name.ends_with(s))
}

/// Render a path with `/` separators regardless of platform.
pub fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// A project file found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Full path as produced by the walk (root joined with the file)
    path: PathBuf,

    /// Path relative to the index root
    relative: PathBuf,

    /// `path` with `/` separators, used for suffix matching
    key: String,

    /// Recognized suffix
    suffix: &'static str,
}

impl FileRecord {
    fn new(root: &Path, path: PathBuf, suffix: &'static str) -> Self {
        let relative = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        let key = slash_path(&path);

        FileRecord {
            path,
            relative,
            key,
            suffix,
        }
    }

    /// Full path, usable for opening the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the index root.
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// The recognized suffix (e.g. `.hpp`).
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Whether the file is a header.
    pub fn is_header(&self) -> bool {
        HEADER_SUFFIXES.contains(&self.suffix)
    }

    /// `path` with `/` separators.
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    fn matches(&self, suffixed_name: &str) -> bool {
        self.key.ends_with(suffixed_name)
    }
}

/// Sorted, de-duplicated set of project files.
#[derive(Debug, Clone)]
pub struct FileIndex {
    root: PathBuf,
    records: Vec<FileRecord>,
}

impl FileIndex {
    /// Walk `root` recursively and index every recognized file.
    ///
    /// Entries that cannot be read (permission errors, broken links) are
    /// skipped with a warning; only a missing or non-directory root fails.
    /// Symlinks to files are indexed under the link's own path. Symlinked
    /// directories are not descended into.
    pub fn build(root: &Path) -> Result<Self, DiscoverError> {
        if !root.is_dir() {
            return Err(DiscoverError::RootNotDirectory {
                path: root.to_path_buf(),
            });
        }

        let mut records = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if let Some(suffix) = source_suffix(&name) {
                records.push(FileRecord::new(root, entry.path().to_path_buf(), suffix));
            }
        }

        records.sort_by(|a, b| a.path.cmp(&b.path));
        records.dedup_by(|a, b| a.path == b.path);

        tracing::debug!(
            "indexed {} source files under {}",
            records.len(),
            root.display()
        );

        Ok(FileIndex {
            root: root.to_path_buf(),
            records,
        })
    }

    /// Return the first indexed file whose path ends with `suffixed_name`.
    ///
    /// Backslashes in the query are treated as `/`. See the module docs for
    /// the first-match policy on ambiguous names.
    pub fn resolve(&self, suffixed_name: &str) -> Option<&FileRecord> {
        let query = suffixed_name.replace('\\', "/");
        self.records.iter().find(|r| r.matches(&query))
    }

    /// All indexed files matching `suffixed_name`, in tie-break order.
    pub fn candidates<'a>(&'a self, suffixed_name: &str) -> impl Iterator<Item = &'a FileRecord> {
        let query = suffixed_name.replace('\\', "/");
        self.records.iter().filter(move |r| r.matches(&query))
    }

    /// The directory the index was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_build_indexes_only_source_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/main.cpp");
        touch(tmp.path(), "src/util.c");
        touch(tmp.path(), "include/util.hpp");
        touch(tmp.path(), "include/legacy.h++");
        touch(tmp.path(), "README.md");
        touch(tmp.path(), "build/app.o");

        let index = FileIndex::build(tmp.path()).unwrap();

        let relative: Vec<String> = index
            .records
            .iter()
            .map(|r| slash_path(r.relative()))
            .collect();
        assert_eq!(
            relative,
            vec![
                "include/legacy.h++",
                "include/util.hpp",
                "src/main.cpp",
                "src/util.c"
            ]
        );
    }

    #[test]
    fn test_build_fails_on_missing_root() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let err = FileIndex::build(&missing).unwrap_err();
        assert!(matches!(err, DiscoverError::RootNotDirectory { ref path } if *path == missing));
    }

    #[test]
    fn test_resolve_by_suffix() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "util/helper.h");

        let index = FileIndex::build(tmp.path()).unwrap();

        let record = index.resolve("util/helper.h").unwrap();
        assert_eq!(record.relative(), Path::new("util/helper.h"));
        assert!(index.resolve("helper.h").is_some());
        assert!(index.resolve("other.h").is_none());
    }

    #[test]
    fn test_resolve_accepts_backslashes() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "util/helper.h");

        let index = FileIndex::build(tmp.path()).unwrap();
        assert!(index.resolve("util\\helper.h").is_some());
    }

    #[test]
    fn test_resolve_ambiguous_picks_first_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "b/utils.h");
        touch(tmp.path(), "a/utils.h");
        touch(tmp.path(), "c/myutils.h");

        let index = FileIndex::build(tmp.path()).unwrap();

        let record = index.resolve("utils.h").unwrap();
        assert_eq!(record.relative(), Path::new("a/utils.h"));

        // Raw text suffix, so `myutils.h` is a candidate too
        let all: Vec<_> = index
            .candidates("utils.h")
            .map(|r| slash_path(r.relative()))
            .collect();
        assert_eq!(all, vec!["a/utils.h", "b/utils.h", "c/myutils.h"]);
    }

    #[test]
    fn test_record_suffix_and_kind() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "foo.hpp");
        touch(tmp.path(), "foo.cpp");

        let index = FileIndex::build(tmp.path()).unwrap();

        let header = index.resolve("foo.hpp").unwrap();
        assert_eq!(header.suffix(), ".hpp");
        assert!(header.is_header());

        let source = index.resolve("foo.cpp").unwrap();
        assert_eq!(source.suffix(), ".cpp");
        assert!(!source.is_header());
    }

    #[test]
    fn test_suffix_helpers() {
        assert_eq!(source_suffix("main.cc"), Some(".cc"));
        assert_eq!(source_suffix("notes.txt"), None);
        assert_eq!(source_suffix("b.hh"), Some(".hh"));
        assert_eq!(source_suffix("b.hpp"), Some(".hpp"));
    }

    #[cfg(unix)]
    #[test]
    fn test_build_indexes_symlinked_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "vendor/real.h");
        fs::create_dir_all(tmp.path().join("inc")).unwrap();
        std::os::unix::fs::symlink(
            tmp.path().join("vendor/real.h"),
            tmp.path().join("inc/link.h"),
        )
        .unwrap();
        std::os::unix::fs::symlink(tmp.path().join("vendor"), tmp.path().join("alias")).unwrap();

        let index = FileIndex::build(tmp.path()).unwrap();

        let link = index.resolve("inc/link.h").unwrap();
        assert_eq!(link.relative(), Path::new("inc/link.h"));

        // The symlinked directory is not walked, so real.h is indexed once
        let real: Vec<_> = index
            .candidates("real.h")
            .map(|r| slash_path(r.relative()))
            .collect();
        assert_eq!(real, vec!["vendor/real.h"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_build_skips_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "locked/secret.h");
        touch(tmp.path(), "open/visible.h");
        touch(tmp.path(), "main.c");

        let locked = tmp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still list the directory
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = FileIndex::build(tmp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let index = result.unwrap();
        assert!(index.resolve("open/visible.h").is_some());
        assert!(index.resolve("main.c").is_some());
        assert!(index.resolve("secret.h").is_none());
    }
}
