//! `pmk generate` command

use anyhow::Result;

use crate::cli::GenerateArgs;
use pmk::ops::pmk_generate::{discover, generate, GenerateOptions};
use pmk::util::GlobalContext;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    if args.json {
        let discovery = discover(ctx.cwd(), &args.entry)?;
        println!("{}", serde_json::to_string_pretty(&discovery)?);
        return Ok(());
    }

    let config_path = ctx.config_path(args.config.config.as_deref());
    let opts = GenerateOptions {
        entry: args.entry,
        output: args.output,
    };

    let (discovery, written) = generate(&ctx, &config_path, &opts)?;

    eprintln!(
        "     Updated {} ({} include dirs, {} files)",
        written.display(),
        discovery.includes.len(),
        discovery.files.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::GenerateArgs;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse_generate_args(args: &[&str]) -> GenerateArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            generate: GenerateArgs,
        }
        TestCli::parse_from(args).generate
    }

    #[test]
    fn test_generate_args() {
        let args = parse_generate_args(&["test", "src/main.cpp", "-o", "out.toml", "--json"]);

        assert_eq!(args.entry, PathBuf::from("src/main.cpp"));
        assert_eq!(args.output, Some(PathBuf::from("out.toml")));
        assert!(args.json);
        assert!(args.config.config.is_none());
    }
}
