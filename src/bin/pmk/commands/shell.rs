//! `pmk shell` command

use anyhow::Result;

use super::load_manifest;
use crate::cli::ShellArgs;
use pmk::ops::pmk_shell::run_shell;
use pmk::util::GlobalContext;

pub fn execute(args: ShellArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (_, manifest) = load_manifest(&ctx, &args.config)?;

    let failed = run_shell(&ctx, &manifest, args.which)?;
    if failed > 0 {
        eprintln!("warning: {} shell command(s) failed", failed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::ShellArgs;
    use clap::Parser;
    use pmk::builder::HookSet;

    fn try_parse_shell_args(args: &[&str]) -> Result<ShellArgs, clap::Error> {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            shell: ShellArgs,
        }
        TestCli::try_parse_from(args).map(|cli| cli.shell)
    }

    #[test]
    fn test_shell_defaults_to_all() {
        let args = try_parse_shell_args(&["test"]).unwrap();
        assert_eq!(args.which, HookSet::All);
    }

    #[test]
    fn test_shell_which() {
        let args = try_parse_shell_args(&["test", "seq"]).unwrap();
        assert_eq!(args.which, HookSet::Seq);
    }

    #[test]
    fn test_shell_rejects_unknown() {
        assert!(try_parse_shell_args(&["test", "later"]).is_err());
    }
}
