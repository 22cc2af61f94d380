//! Test fixtures for common test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::util::GlobalContext;

/// A project tree in a temporary directory.
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    /// Create an empty project.
    pub fn new() -> Self {
        ProjectFixture {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// The small `src/main.cpp` + `util/helper.{h,cpp}` project.
    pub fn helper_project() -> Self {
        ProjectFixture::new()
            .with_file(
                "src/main.cpp",
                "#include <iostream>\n#include \"util/helper.h\"\n\nint main() { return helper(); }\n",
            )
            .with_file(
                "util/helper.h",
                "#pragma once\n#include \"util/helper.h\"\n\nint helper();\n",
            )
            .with_file(
                "util/helper.cpp",
                "#include \"util/helper.h\"\n\nint helper() { return 0; }\n",
            )
    }

    /// Add a file with the given content.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        self.write(rel, content);
        self
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture directory");
        }
        fs::write(path, content).expect("failed to write fixture file");
    }

    /// Read a file from the project.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("failed to read fixture file")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Context rooted at the project.
    pub fn ctx(&self) -> GlobalContext {
        GlobalContext::with_cwd(self.dir.path())
    }
}

/// Install a stand-in compiler script in the project.
///
/// The script records its arguments (one per line) in `compiler-args.txt`,
/// writes an executable to the `-o` target that records *its* arguments in
/// `run-args.txt`, then exits with `exit_code`.
#[cfg(unix)]
pub fn fake_compiler(project: &ProjectFixture, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r#"#!/bin/sh
printf '%s\n' "$@" > compiler-args.txt
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-o" ]; then out="$a"; fi
  prev="$a"
done
if [ -n "$out" ]; then
  printf '#!/bin/sh\necho "$@" > run-args.txt\n' > "$out"
  chmod +x "$out"
fi
exit {exit_code}
"#
    );

    let path = project.path("fakecc");
    fs::write(&path, script).expect("failed to write fake compiler");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("failed to mark fake compiler executable");
    path
}
