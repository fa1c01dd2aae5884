//! docblock: print a documentation-comment skeleton for one declaration line.
//!
//! - **argument mode**: `docblock -g php 'function load($path) {'`
//! - **stdin mode**: `head -n1 file.js | docblock`

use anyhow::{Context, Result};
use clap::Parser;
use docblock::align::AlignMode;
use docblock::config::Config;
use docblock::grammar::create_grammar;
use docblock::{generate, Request};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "docblock",
    about = "Generate a documentation-comment skeleton with snippet placeholders"
)]
struct Cli {
    /// Declaration line to document. If omitted, the first line of stdin is used.
    line: Option<String>,

    /// Source grammar: javascript (default), php, coffee, actionscript
    #[arg(short = 'g', long, default_value = "javascript")]
    grammar: String,

    /// Line after the insertion point, checked for an already open comment
    #[arg(long)]
    next_line: Option<String>,

    /// Emit a single-line comment fragment
    #[arg(long)]
    inline: bool,

    /// JSON settings file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Tag alignment: none, shallow, deep. Overrides the settings file.
    #[arg(long)]
    align: Option<AlignMode>,

    /// Spaces after the ` *` prefix. Overrides the settings file.
    #[arg(long)]
    indent: Option<usize>,

    /// Extra line placed after the description. Can be specified multiple times.
    #[arg(long = "extra-tag")]
    extra_tags: Vec<String>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let grammar = create_grammar(&cli.grammar)?;
    let config = load_config(&cli)?;

    let stdin_line = match cli.line {
        Some(_) => None,
        None => read_first_line()?,
    };
    let line = cli.line.as_deref().or(stdin_line.as_deref());
    debug!(grammar = grammar.settings().name, ?line, "generating");

    let request = Request {
        line,
        next_line: cli.next_line.as_deref(),
        inline: cli.inline,
    };
    print!("{}", generate(grammar.as_ref(), &config, &request));
    Ok(())
}

/// Log to stderr so stdout carries only the snippet. `RUST_LOG` overrides.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docblock=warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Settings file (or defaults) with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(mode) = cli.align {
        config.align_tags = mode;
    }
    if let Some(spaces) = cli.indent {
        config.indentation_spaces = spaces;
    }
    config.extra_tags.extend(cli.extra_tags.iter().cloned());
    Ok(config)
}

fn read_first_line() -> Result<Option<String>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input.lines().next().map(str::to_string))
}
