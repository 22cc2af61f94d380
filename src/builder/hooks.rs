//! Shell hooks declared under `[shell]`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;

use crate::core::manifest::ShellHooks;
use crate::util::process::ProcessBuilder;

/// Which hook lists to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookSet {
    /// `before`, `after`, then `misc`
    #[default]
    All,
    Before,
    After,
    /// `before` then `after`
    Seq,
    Misc,
}

impl HookSet {
    pub const VARIANTS: &'static [&'static str] = &["all", "before", "after", "seq", "misc"];

    /// Commands selected from `hooks`, in execution order.
    pub fn select<'a>(&self, hooks: &'a ShellHooks) -> Vec<&'a str> {
        let lists: Vec<&Vec<String>> = match self {
            HookSet::All => vec![&hooks.before, &hooks.after, &hooks.misc],
            HookSet::Before => vec![&hooks.before],
            HookSet::After => vec![&hooks.after],
            HookSet::Seq => vec![&hooks.before, &hooks.after],
            HookSet::Misc => vec![&hooks.misc],
        };

        lists
            .into_iter()
            .flat_map(|list| list.iter().map(String::as_str))
            .collect()
    }
}

impl FromStr for HookSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(HookSet::All),
            "before" => Ok(HookSet::Before),
            "after" => Ok(HookSet::After),
            "seq" => Ok(HookSet::Seq),
            "misc" => Ok(HookSet::Misc),
            _ => Err(format!(
                "invalid hook set '{}'; expected one of: {}",
                s,
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

impl fmt::Display for HookSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HookSet::All => "all",
            HookSet::Before => "before",
            HookSet::After => "after",
            HookSet::Seq => "seq",
            HookSet::Misc => "misc",
        };
        f.write_str(name)
    }
}

/// Run shell commands in order from `cwd`.
///
/// A command exiting non-zero is reported and the remaining commands still
/// run; failing to start the shell at all is an error. Returns the number of
/// commands that failed.
pub fn run_hooks<'a>(commands: impl IntoIterator<Item = &'a str>, cwd: &Path) -> Result<usize> {
    let mut failed = 0;

    for command in commands {
        tracing::info!("$ {}", command);

        let status = ProcessBuilder::shell(command).cwd(cwd).status()?;
        if !status.success() {
            tracing::warn!("`{}` exited with {}", command, status);
            failed += 1;
        }
    }

    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hooks() -> ShellHooks {
        ShellHooks {
            before: vec!["b1".to_string(), "b2".to_string()],
            after: vec!["a1".to_string()],
            misc: vec!["m1".to_string()],
        }
    }

    #[test]
    fn test_select_order() {
        let hooks = hooks();

        assert_eq!(HookSet::All.select(&hooks), vec!["b1", "b2", "a1", "m1"]);
        assert_eq!(HookSet::Seq.select(&hooks), vec!["b1", "b2", "a1"]);
        assert_eq!(HookSet::Before.select(&hooks), vec!["b1", "b2"]);
        assert_eq!(HookSet::After.select(&hooks), vec!["a1"]);
        assert_eq!(HookSet::Misc.select(&hooks), vec!["m1"]);
    }

    #[test]
    fn test_parse_hook_set() {
        assert_eq!("seq".parse::<HookSet>().unwrap(), HookSet::Seq);
        assert_eq!("MISC".parse::<HookSet>().unwrap(), HookSet::Misc);

        let err = "later".parse::<HookSet>().unwrap_err();
        assert!(err.contains("expected one of"));
    }

    #[test]
    fn test_display_round_trips() {
        for name in HookSet::VARIANTS {
            let set: HookSet = name.parse().unwrap();
            assert_eq!(set.to_string(), *name);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_hooks_continues_after_failure() {
        let tmp = tempfile::TempDir::new().unwrap();

        let failed = run_hooks(["false", "touch after-failure"], tmp.path()).unwrap();

        assert_eq!(failed, 1);
        assert!(tmp.path().join("after-failure").exists());
    }
}
