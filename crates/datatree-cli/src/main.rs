//! `datatree` CLI -- render a JSON value as a collapsible tree.
//!
//! ## Usage
//!
//! ```sh
//! # Render from stdin with everything collapsed
//! echo '{"a":1,"b":2,"c":3,"d":4}' | datatree render
//!
//! # Open specific positions
//! datatree render -i value.json --open root --open root/items
//!
//! # Open everything, emit the render tree as JSON
//! datatree render -i value.json --expand-all --format json
//!
//! # List the disclosure actions available in the current state
//! datatree actions -i value.json --open root
//!
//! # Custom collapse thresholds
//! datatree render -i value.json --config datatree.toml
//! ```

mod logging;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use datatree_core::{DisclosureState, RenderOptions, Renderer};
use serde_json::Value;

#[derive(Parser)]
#[command(
    name = "datatree",
    version,
    about = "Render JSON values as collapsible inspection trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON value
    Render {
        #[command(flatten)]
        view: ViewArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the disclosure actions of the rendered tree
    Actions {
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Args)]
struct ViewArgs {
    /// Input JSON file (reads from stdin if omitted or `-`)
    #[arg(short, long)]
    input: Option<String>,
    /// Identity of the root position
    #[arg(long, default_value = "root")]
    root: String,
    /// Identity to open (repeatable)
    #[arg(long = "open", value_name = "ID")]
    open: Vec<String>,
    /// Open every collapsible position
    #[arg(long)]
    expand_all: bool,
    /// Suppress the top-level type label when it equals this value
    #[arg(long)]
    hide_type: Option<String>,
    /// TOML file with render options
    #[arg(long)]
    config: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            view,
            output,
            format,
        } => {
            let tree = view.render()?;
            let rendered = match format {
                Format::Text => tree.to_string(),
                Format::Json => serde_json::to_string_pretty(&tree)?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Actions { view } => {
            let tree = view.render()?;
            for action in tree.actions() {
                println!("{}\t{}\t{}", action.op, action.target, action.label);
            }
        }
    }

    Ok(())
}

impl ViewArgs {
    fn render(&self) -> Result<datatree_core::RenderTree> {
        let options = load_options(self.config.as_deref())?;
        let renderer = Renderer::new(options);

        let value = read_value(self.input.as_deref())?;

        let mut disclosure: DisclosureState = self.open.iter().cloned().collect();
        if self.expand_all {
            let opened = renderer.expand_all(&value, &self.root, &mut disclosure);
            tracing::debug!(opened, "expanded all positions");
        }

        Ok(renderer.render(&value, &self.root, &disclosure, self.hide_type.as_deref()))
    }
}

fn load_options(path: Option<&str>) -> Result<RenderOptions> {
    let Some(path) = path else {
        return Ok(RenderOptions::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    let options: RenderOptions =
        toml::from_str(&raw).with_context(|| format!("Failed to parse config file: {}", path))?;
    options
        .validate()
        .with_context(|| format!("Invalid config file: {}", path))?;
    Ok(options)
}

/// Parse the input value from `path`, or from stdin when it is absent or `-`.
fn read_value(path: Option<&str>) -> Result<Value> {
    match path.filter(|p| *p != "-") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to read file: {}", path))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Input is not valid JSON: {}", path))
        }
        None => serde_json::from_reader(io::stdin().lock())
            .context("Input is not valid JSON: <stdin>"),
    }
}

/// Write `content` plus a trailing newline to `path`, or to stdout.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    let (mut sink, target): (Box<dyn Write>, &str) = match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to write file: {}", path))?;
            (Box::new(BufWriter::new(file)), path)
        }
        None => (Box::new(io::stdout().lock()), "<stdout>"),
    };
    writeln!(sink, "{}", content)
        .and_then(|()| sink.flush())
        .with_context(|| format!("Failed to write output: {}", target))
}
