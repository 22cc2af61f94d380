//! `pmk.toml` project configuration.
//!
//! The configuration is a flat TOML document describing one compiler
//! invocation plus optional shell hooks:
//!
//! ```toml
//! compiler = "g++"
//! name = "demo"
//! output = "demo"
//! flags = ["std=c++17"]
//! files = ["src/main.cpp", "util/helper.cpp"]
//! includes = ["util"]
//!
//! [shell]
//! before = ["echo building"]
//! ```
//!
//! Every key is optional. New files are written from a commented template
//! so that unused sections still document themselves.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{Array, DocumentMut, Item};

use crate::util::fs;

/// Default configuration file name.
pub const MANIFEST_NAME: &str = "pmk.toml";

/// Project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Compiler executable (e.g. `gcc`, `clang++`, `emcc`)
    pub compiler: String,

    /// Project name, used in status messages
    pub name: String,

    /// Output file passed to `-o`
    pub output: String,

    /// Compiler flags; a leading `-` is added when missing
    pub flags: Vec<String>,

    /// Source files in compile order; glob patterns allowed
    pub files: Vec<String>,

    /// Header directories (`-I`)
    pub includes: Vec<String>,

    /// Library search paths (`-L`)
    pub libs: Vec<String>,

    /// Libraries to link (`-l`)
    pub libraries: Vec<String>,

    /// Shell commands run around the build
    pub shell: ShellHooks,
}

/// Shell commands attached to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellHooks {
    /// Run before building
    pub before: Vec<String>,

    /// Run after building
    pub after: Vec<String>,

    /// Only run on request
    pub misc: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest {
            compiler: "gcc".to_string(),
            name: "App name".to_string(),
            output: "app.exe".to_string(),
            flags: Vec::new(),
            files: Vec::new(),
            includes: Vec::new(),
            libs: Vec::new(),
            libraries: Vec::new(),
            shell: ShellHooks::default(),
        }
    }
}

/// Check that a path names a TOML file.
fn check_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(()),
        _ => bail!("config file must be a .toml file: {}", path.display()),
    }
}

impl Manifest {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        check_extension(path)?;

        if !path.exists() {
            bail!(
                "config file `{}` does not exist\n\
                 \n\
                 help: Run `pmk init` to create one",
                path.display()
            );
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Parse configuration content.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Write the configuration through the commented template.
    pub fn save(&self, path: &Path) -> Result<()> {
        check_extension(path)?;
        fs::write_string(path, &self.render())
    }

    /// Whether there is anything to compile.
    pub fn has_sources(&self) -> bool {
        !self.files.is_empty()
    }

    /// Render the configuration as a commented TOML document.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("# This handles building the project\n\n");
        out.push_str(&format!(
            "compiler = {} # Change to whatever compiles your C/C++ code. Even emcc works!\n",
            quote(&self.compiler)
        ));
        out.push_str(&format!(
            "name = {} # The name of the project, used in build messages.\n",
            quote(&self.name)
        ));
        out.push_str(&format!(
            "output = {} # The output file.\n",
            quote(&self.output)
        ));

        render_list(
            &mut out,
            "\n# Flags passed to the compiler, such as std=c++17\n",
            "flags",
            &self.flags,
            "std=c++17",
        );
        render_list(
            &mut out,
            "\n# The C/C++ files that will be compiled, in order. Globs are allowed.\n",
            "files",
            &self.files,
            "main.cpp",
        );
        render_list(
            &mut out,
            "\n# Where are the header files located?\n",
            "includes",
            &self.includes,
            "includes/",
        );
        render_list(
            &mut out,
            "\n# Not to be confused with libraries, these are the paths to the libraries.\n",
            "libs",
            &self.libs,
            "path/to/lib",
        );
        render_list(
            &mut out,
            "\n# Libraries linked into the project. Their path must be listed in libs.\n",
            "libraries",
            &self.libraries,
            "libname",
        );

        out.push_str("\n# Shell commands to run before or after building.\n[shell]\n");
        render_list(&mut out, "", "before", &self.shell.before, "echo hello world");
        render_list(&mut out, "", "after", &self.shell.after, "echo bye world");
        render_list(&mut out, "", "misc", &self.shell.misc, "echo misc call");

        out
    }
}

fn quote(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

fn render_list(out: &mut String, comment: &str, key: &str, values: &[String], example: &str) {
    out.push_str(comment);
    if values.is_empty() {
        out.push_str(&format!("# {} = [{}]\n", key, quote(example)));
        return;
    }

    out.push_str(&format!("{} = [\n", key));
    for value in values {
        out.push_str(&format!("    {},\n", quote(value)));
    }
    out.push_str("]\n");
}

/// Replace top-level string lists in a configuration document, keeping
/// every other key, comment and layout intact.
///
/// A key that is missing but has a commented placeholder from the template
/// (`# includes = [...]`) takes the placeholder's place.
pub fn replace_lists(content: &str, lists: &[(&str, &[String])]) -> Result<String> {
    let parsed: DocumentMut = content
        .parse()
        .with_context(|| "failed to parse config for editing")?;

    let missing: Vec<&str> = lists
        .iter()
        .map(|(key, _)| *key)
        .filter(|key| !parsed.contains_key(key))
        .collect();
    let content = fill_placeholders(content, &missing);

    let mut doc: DocumentMut = content
        .parse()
        .with_context(|| "failed to parse config for editing")?;

    for (key, values) in lists {
        let mut array = Array::new();
        for value in values.iter() {
            array.push(value.as_str());
        }
        if array.len() > 1 {
            for item in array.iter_mut() {
                item.decor_mut().set_prefix("\n    ");
            }
            array.set_trailing("\n");
            array.set_trailing_comma(true);
        }

        match doc.get_mut(key) {
            Some(item) => {
                // Keep the key's position and any trailing comment
                if let Some(existing) = item.as_array_mut() {
                    let suffix = existing.decor().suffix().cloned();
                    *existing = array;
                    if let Some(suffix) = suffix {
                        existing.decor_mut().set_suffix(suffix);
                    }
                } else {
                    *item = toml_edit::value(array);
                }
            }
            None => {
                doc.insert(key, Item::Value(array.into()));
            }
        }
    }

    Ok(doc.to_string())
}

/// Turn the first `# key = ...` line above any table header into `key = []`
/// for each of `keys`.
fn fill_placeholders(content: &str, keys: &[&str]) -> String {
    let mut pending: Vec<&str> = keys.to_vec();
    let mut in_table = false;
    let mut out = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start();
        in_table |= trimmed.starts_with('[');

        let placeholder = if in_table {
            None
        } else {
            trimmed
                .strip_prefix('#')
                .map(str::trim_start)
                .and_then(|rest| {
                    pending.iter().position(|key| {
                        rest.strip_prefix(key)
                            .is_some_and(|after| after.trim_start().starts_with('='))
                    })
                })
        };

        match placeholder {
            Some(pos) => {
                let key = pending.remove(pos);
                out.push_str(key);
                out.push_str(" = []\n");
            }
            None => out.push_str(line),
        }
    }

    out
}
