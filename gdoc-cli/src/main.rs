// Command-line interface for gdoc2html
//
// This binary exports a document body, given as JSON, to indented HTML.
//
// Converting:
//
// The export either prints the markup or composes an email carrying it. Mode, recipient and
// indentation come from the layered configuration (see gdoc-config) and can be overridden per
// run with flags.
// Usage:
//  gdoc2html <input.json> [--mode print|email] [-o FILE] [--out-dir DIR] [--to ADDRESS]   - Export (default)
//  gdoc2html convert <input.json> ...                                                    - Same as above (explicit)
//  gdoc2html inspect <input.json>                                                        - Show the rebuilt list structure
//
// Email mode does not send anything: the message is materialized into a directory, see outbox.rs.

mod error;
mod outbox;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use error::CliError;
use gdoc_babel::dispatch::print_markup;
use gdoc_babel::tree::treeviz::forest_to_treeviz;
use gdoc_babel::{build_forest, export_document, Dispatch, RenderOptions, SourceDocument};
use gdoc_config::{GdocConfig, Loader, LOCAL_CONFIG_FILE};
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("gdoc2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export documents to indented HTML")
        .long_about(
            "gdoc2html rebuilds the nested lists of a flat document body and exports it as\n\
            indented HTML, either printed or composed into an email with the images inlined.\n\n\
            Commands:\n  \
            - convert: Export a document (default command)\n  \
            - inspect: Show the list structure rebuilt from the flat body\n\n\
            Examples:\n  \
            gdoc2html notes.json                          # Print markup to stdout\n  \
            gdoc2html notes.json -o notes.html            # Write markup to a file\n  \
            gdoc2html notes.json --mode email --to me@x   # Compose an email into ./<title>-export\n  \
            gdoc2html inspect notes.json                  # Tree visualization",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a gdoc.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Export a document to HTML (default command)")
                .long_about(
                    "Export a JSON document to indented HTML.\n\n\
                    In print mode the markup goes to stdout, or to the file given with -o.\n\
                    In email mode a message is composed with every image attached inline\n\
                    and the markup attached as <title>.html. The message is written to\n\
                    --out-dir (default ./<title>-export) together with message.json.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input document (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .help("Output mode (overrides output.mode)")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "print", "email",
                        ])),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Markup output file in print mode (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .value_name("DIR")
                        .help("Directory for the composed email in email mode")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_name("ADDRESS")
                        .help("Email recipient (overrides email.recipient)")
                        .value_hint(ValueHint::EmailAddress),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .value_name("STRING")
                        .help("Indentation unit (overrides render.indent_string)"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the list structure rebuilt from a document")
                .arg(
                    Arg::new("path")
                        .help("Input document (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

/// Number of leading arguments that are global flags (and their values).
fn leading_global_args(args: &[String]) -> usize {
    let mut index = 0;
    while let Some(arg) = args.get(index) {
        let is_verbose = arg == "--verbose"
            || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'));
        if arg == "--config" {
            index += 2;
        } else if is_verbose || arg.starts_with("--config=") {
            index += 1;
        } else {
            break;
        }
    }
    index
}

/// Arguments with `convert` injected when the first one after any global flags looks like a path.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let split = 1 + leading_global_args(args.get(1..)?);
    let first = args.get(split)?;
    if first.starts_with('-') || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }
    let mut injected = args[..split].to_vec();
    injected.push("convert".to_string());
    injected.extend_from_slice(&args[split..]);
    Some(injected)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Try normal parsing first. If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&args) {
            Some(injected) => match cli.try_get_matches_from(&injected) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    let result = match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            init_logging(sub_matches.get_count("verbose"));
            handle_convert_command(sub_matches)
        }
        Some(("inspect", sub_matches)) => {
            init_logging(sub_matches.get_count("verbose"));
            handle_inspect_command(sub_matches)
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// `-v` flags pick the level; `RUST_LOG` wins when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn required_arg<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a String, CliError> {
    matches
        .get_one::<String>(id)
        .ok_or_else(|| CliError::MissingArgument(id.to_string()))
}

fn load_document(path: &str) -> Result<SourceDocument, CliError> {
    SourceDocument::from_path(path).map_err(|source| CliError::Source {
        path: PathBuf::from(path),
        source,
    })
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) -> Result<(), CliError> {
    let input = required_arg(matches, "input")?;
    let config = load_cli_config(matches)?;
    let options = RenderOptions::from(&config.render);

    let document = load_document(input)?;
    let exported = export_document(&document, &options)?;
    let title = exported.title.clone();

    let mode = config.output.mode;
    let unused_flag = if mode.retains_assets() { "output" } else { "out-dir" };
    if matches.get_one::<String>(unused_flag).is_some() {
        log::warn!("--{unused_flag} is ignored in {mode:?} mode");
    }

    match Dispatch::prepare(exported, mode, &config.email.recipient) {
        Dispatch::Print(markup) => match matches.get_one::<String>("output") {
            Some(path) => write_markup_file(Path::new(path), &markup),
            None => print_markup(&mut io::stdout().lock(), &markup).map_err(CliError::Stdout),
        },
        Dispatch::Email(message) => {
            let out_dir = matches
                .get_one::<String>("out-dir")
                .map(PathBuf::from)
                .unwrap_or_else(|| outbox::default_out_dir(&title));
            let manifest = outbox::write_message(&out_dir, &message)?;
            log::info!(
                "composed email to '{}' with {} attachments in {}",
                message.to,
                message.attachments.len(),
                out_dir.display()
            );
            println!("{}", manifest.display());
            Ok(())
        }
    }
}

fn write_markup_file(path: &Path, markup: &str) -> Result<(), CliError> {
    let to_write_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_write_error)?;
    print_markup(&mut BufWriter::new(file), markup).map_err(to_write_error)
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) -> Result<(), CliError> {
    let path = required_arg(matches, "path")?;
    let document = load_document(path)?;
    let forest = build_forest(document.body);
    print!("{}", forest_to_treeviz(&forest));
    Ok(())
}

/// Defaults, then `gdoc.toml` if present, then `--config`, then flags.
fn load_cli_config(matches: &ArgMatches) -> Result<GdocConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let overrides = [
        ("mode", "output.mode"),
        ("to", "email.recipient"),
        ("indent", "render.indent_string"),
    ];
    for (arg, key) in overrides {
        if let Ok(Some(value)) = matches.try_get_one::<String>(arg) {
            loader = loader.set_override(key, value.as_str())?;
        }
    }

    Ok(loader.build()?)
}
