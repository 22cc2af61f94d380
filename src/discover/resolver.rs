//! Transitive include resolution.
//!
//! Starting from an entry point, every quoted include that resolves against
//! the [`FileIndex`] is visited once. For each newly visited header the
//! resolver looks for a companion implementation file (`foo.hpp` →
//! `foo.cpp`), records it, and scans it before scanning the header itself.
//!
//! The traversal is depth-first and uses an explicit stack instead of call
//! recursion. A header is marked visited *before* anything it leads to is
//! scanned, which is what terminates include cycles.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::vec;

use crate::discover::errors::DiscoverError;
use crate::discover::file_index::{slash_path, FileIndex, FileRecord, IMPL_SUFFIXES};
use crate::discover::include::include_targets;

/// Headers and implementation files reached from one entry point.
///
/// Both lists only grow while a resolution runs and are kept in discovery
/// order. Paths are relative to the index root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    headers: Vec<PathBuf>,
    header_set: HashSet<PathBuf>,
    impl_files: Vec<PathBuf>,
    impl_set: HashSet<PathBuf>,
}

impl Resolution {
    /// Mark a header visited. Returns `false` if it already was.
    fn visit_header(&mut self, header: &Path) -> bool {
        if !self.header_set.insert(header.to_path_buf()) {
            return false;
        }
        self.headers.push(header.to_path_buf());
        true
    }

    /// Record an implementation file. Returns `false` if already known.
    fn add_impl_file(&mut self, file: &Path) -> bool {
        if !self.impl_set.insert(file.to_path_buf()) {
            return false;
        }
        self.impl_files.push(file.to_path_buf());
        true
    }

    /// Visited headers in discovery order.
    pub fn visited_headers(&self) -> &[PathBuf] {
        &self.headers
    }

    /// Discovered implementation files in discovery order.
    pub fn discovered_impl_files(&self) -> &[PathBuf] {
        &self.impl_files
    }

    /// Distinct header directories, most recently discovered first.
    ///
    /// A header at the project root reports `.`.
    pub fn header_dirs(&self) -> Vec<String> {
        let mut dirs: Vec<String> = Vec::new();
        for header in self.headers.iter().rev() {
            let dir = match header.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => slash_path(parent),
                _ => ".".to_string(),
            };
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        dirs
    }

    /// Implementation files, most recently discovered first.
    pub fn impl_files(&self) -> Vec<String> {
        self.impl_files.iter().rev().map(|p| slash_path(p)).collect()
    }
}

/// Pending traversal work.
enum Step<'a> {
    /// Read a file and queue its resolved includes.
    Scan(PathBuf),
    /// Remaining resolved includes of a file already read.
    Includes(vec::IntoIter<&'a FileRecord>),
}

/// Follows quoted includes through a shared, read-only [`FileIndex`].
///
/// The resolver holds no state between calls; every [`resolve`] starts
/// from an empty [`Resolution`], so one index can serve many entry points.
///
/// [`resolve`]: IncludeResolver::resolve
#[derive(Debug, Clone, Copy)]
pub struct IncludeResolver<'a> {
    index: &'a FileIndex,
}

impl<'a> IncludeResolver<'a> {
    pub fn new(index: &'a FileIndex) -> Self {
        IncludeResolver { index }
    }

    /// Trace every header and companion implementation file reachable from
    /// `entry_point`.
    ///
    /// Fails if the entry point or any reached file cannot be read; nothing
    /// accumulated up to that point is returned.
    pub fn resolve(&self, entry_point: &Path) -> Result<Resolution, DiscoverError> {
        let mut resolution = Resolution::default();
        let mut stack = vec![Step::Scan(entry_point.to_path_buf())];

        while let Some(step) = stack.pop() {
            match step {
                Step::Scan(path) => {
                    let includes = self.scan(&path)?;
                    stack.push(Step::Includes(includes.into_iter()));
                }
                Step::Includes(mut rest) => {
                    let Some(header) = rest.next() else {
                        continue;
                    };
                    stack.push(Step::Includes(rest));

                    if !resolution.visit_header(header.relative()) {
                        continue;
                    }

                    // Popped in reverse: companion first, then the header
                    stack.push(Step::Scan(header.path().to_path_buf()));

                    if let Some(companion) = self.companion_of(header) {
                        if resolution.add_impl_file(companion.relative()) {
                            tracing::debug!(
                                "{} pairs with {}",
                                header.relative().display(),
                                companion.relative().display()
                            );
                            stack.push(Step::Scan(companion.path().to_path_buf()));
                        }
                    }
                }
            }
        }

        Ok(resolution)
    }

    /// Find the implementation file paired with a header.
    ///
    /// Each of `.cpp`, `.c`, `.cp`, `.c++` is tried in that order in place of
    /// the header suffix. Non-header files have no companion.
    pub fn companion_of(&self, header: &FileRecord) -> Option<&'a FileRecord> {
        if !header.is_header() {
            return None;
        }
        let key = header.key();
        let stem = &key[..key.len() - header.suffix().len()];

        IMPL_SUFFIXES
            .iter()
            .find_map(|impl_suffix| self.index.resolve(&format!("{}{}", stem, impl_suffix)))
    }

    /// Read a file and resolve its include targets against the index.
    fn scan(&self, path: &Path) -> Result<Vec<&'a FileRecord>, DiscoverError> {
        let bytes = fs::read(path).map_err(|source| DiscoverError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = String::from_utf8_lossy(&bytes);

        tracing::trace!("scanning {}", path.display());

        let mut resolved = Vec::new();
        for target in include_targets(&contents) {
            match self.index.resolve(target) {
                Some(record) => resolved.push(record),
                None => tracing::debug!(
                    "`{}` included from {} is not in the project, skipping",
                    target,
                    path.display()
                ),
            }
        }

        Ok(resolved)
    }
}
