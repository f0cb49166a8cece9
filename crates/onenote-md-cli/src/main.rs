// Command-line interface for onenote-md
//
// Converts one OneNote page export (the XML returned by the OneNote page
// content API) to Markdown. File handling lives here; the conversion itself
// is in the onenote-md library.
//
// Usage:
//  onenote-md convert <input> [<output>]   - Page export to Markdown
//  onenote-md math <input> [<output>]      - Rewrite embedded MathML as LaTeX
//
// An input of `-` reads stdin. Without an output path the result goes to stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::{info, LevelFilter};
use onenote_md::math::mathml_to_latex;
use onenote_md::{ConvertError, ConvertOptions, ConverterService, ONENOTE_NAMESPACE};
use onenote_md_core::Options;

#[derive(Parser)]
#[command(name = "onenote-md", version, about = "Convert OneNote page exports to Markdown")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a page export (XML) to Markdown
    Convert(ConvertArgs),
    /// Rewrite MathML embedded in a text file as LaTeX math
    Math(IoArgs),
}

#[derive(Args)]
struct IoArgs {
    /// Input file, `-` for stdin
    input: PathBuf,

    /// Output file, stdout when omitted
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ConvertArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Treat heading quick styles as plain paragraphs
    #[arg(long)]
    plain_headings: bool,

    /// Namespace URI of the export's elements
    #[arg(long, value_name = "URI", default_value = ONENOTE_NAMESPACE)]
    namespace: String,

    /// Match elements by local name in any namespace
    #[arg(long, conflicts_with = "namespace")]
    any_namespace: bool,

    /// Bullet list marker
    #[arg(long, value_name = "CHAR", default_value_t = '-')]
    bullet: char,
}

impl From<&ConvertArgs> for ConvertOptions {
    fn from(args: &ConvertArgs) -> Self {
        ConvertOptions {
            namespace: (!args.any_namespace).then(|| args.namespace.clone()),
            style_headings: !args.plain_headings,
            markdown: Options {
                bullet_list_marker: args.bullet,
            },
            ..Default::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("onenote-md: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: &Command) -> Result<(), CliError> {
    match command {
        Command::Convert(args) => {
            let xml = read_input(&args.io.input)?;
            let service = ConverterService::with_options(ConvertOptions::from(args));
            let markdown = service.convert(&xml)?;
            write_output(args.io.output.as_deref(), &markdown)
        }
        Command::Math(args) => {
            let text = read_input(&args.input)?;
            write_output(args.output.as_deref(), &mathml_to_latex(&text))
        }
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let read_error = |source| CliError::Read {
        path: path.display().to_string(),
        source,
    };

    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        return Ok(buf);
    }

    info!("reading {}", path.display());
    fs::read_to_string(path).map_err(read_error)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            info!("writing {}", path.display());
            fs::write(path, content).map_err(|source| CliError::Write {
                path: path.display().to_string(),
                source,
            })
        }
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|source| CliError::Write {
                path: "stdout".to_string(),
                source,
            }),
    }
}
