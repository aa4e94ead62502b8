//! Inspect the domain package rooted at the working directory.
//!
//! Prints the requested view as JSON on stdout: the domain name, the fixed
//! list of component types, the domain config, one component mapping, or a
//! full snapshot. Skipped component files are reported on stderr and never
//! change the exit status.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use vnext_domain::logging::{LevelFilter, init_logging};
use vnext_domain::{ComponentType, DomainPackage, resolve_root};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse(env::args_os().skip(1))?;
    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    init_logging(level)?;

    let root = resolve_root(args.root.as_deref())?;
    let package = DomainPackage::at(root);

    match args.command {
        Command::Name => emit(&package.domain_name()?, args.pretty),
        Command::Types => emit(&package.available_types(), args.pretty),
        Command::Config => emit(&package.domain_config(), args.pretty),
        Command::Component(kind) => emit(&package.components(kind)?, args.pretty),
        Command::All => emit(&package.snapshot()?, args.pretty),
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Name,
    Types,
    Config,
    Component(ComponentType),
    All,
}

#[derive(Debug)]
struct CliArgs {
    root: Option<PathBuf>,
    command: Command,
    pretty: bool,
    verbose: bool,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = OsString>) -> Result<Self> {
        let mut root: Option<PathBuf> = None;
        let mut command: Option<Command> = None;
        let mut pretty = false;
        let mut verbose = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            let next_command = match arg.as_str() {
                "--root" => {
                    root = Some(PathBuf::from(next_value(&mut args, "--root")?));
                    continue;
                }
                "--pretty" => {
                    pretty = true;
                    continue;
                }
                "--verbose" | "-v" => {
                    verbose = true;
                    continue;
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                "--name" => Command::Name,
                "--types" => Command::Types,
                "--config" => Command::Config,
                "--all" => Command::All,
                "--component" => {
                    let raw = next_value(&mut args, "--component")?;
                    Command::Component(ComponentType::parse(&raw)?)
                }
                other => bail!("unknown flag: {other}\n\n{}", usage()),
            };
            if command.is_some() {
                bail!("only one of --name/--types/--config/--component/--all may be given");
            }
            command = Some(next_command);
        }

        let command = command
            .with_context(|| format!("no command given\n\n{}", usage()))?;

        Ok(CliArgs {
            root,
            command,
            pretty,
            verbose,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: vnext-domain [--root PATH] [--pretty] [--verbose] (--name | --types | --config | --component TYPE | --all)\n\
Reads the domain package under PATH (default: $VNEXT_DOMAIN_ROOT, then the current directory) and prints JSON.\n\
TYPE is one of schemas|workflows|tasks|views|functions|extensions.\n"
}
