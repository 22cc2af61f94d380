//! `pmk init` command

use anyhow::Result;

use crate::cli::InitArgs;
use pmk::ops::pmk_init::{init_config, InitOptions};
use pmk::util::GlobalContext;

pub fn execute(args: InitArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let path = ctx.config_path(args.config.config.as_deref());

    let opts = InitOptions {
        name: args.name,
        compiler: args.compiler,
    };

    let manifest = init_config(&path, &opts)?;

    eprintln!(
        "     Created config for `{}` at {}",
        manifest.name,
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::InitArgs;
    use clap::Parser;
    use std::path::PathBuf;

    /// Helper to parse InitArgs from command-line strings.
    fn parse_init_args(args: &[&str]) -> InitArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            init: InitArgs,
        }
        let cli = TestCli::parse_from(args);
        cli.init
    }

    #[test]
    fn test_init_args_defaults() {
        let args = parse_init_args(&["test"]);

        assert!(args.name.is_none());
        assert!(args.compiler.is_none());
    }

    #[test]
    fn test_init_args_all_options() {
        let args = parse_init_args(&[
            "test",
            "--name",
            "engine",
            "--compiler",
            "clang++",
            "-c",
            "conf/pmk.toml",
        ]);

        assert_eq!(args.name, Some("engine".to_string()));
        assert_eq!(args.compiler, Some("clang++".to_string()));
        assert_eq!(args.config.config, Some(PathBuf::from("conf/pmk.toml")));
    }
}
