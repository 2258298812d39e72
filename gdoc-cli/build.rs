use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command line from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const OUTPUT_MODES: &[&str] = &["print", "email"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("gdoc2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export documents to indented HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_MODES)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_hint(ValueHint::EmailAddress),
                )
                .arg(Arg::new("indent").long("indent")),
        )
        .subcommand(
            Command::new("inspect").arg(
                Arg::new("path")
                    .required(true)
                    .index(1)
                    .value_hint(ValueHint::FilePath),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "gdoc2html", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "gdoc2html", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "gdoc2html", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
