//! relayout CLI - page layout reconstruction from positioned text tokens

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use relayout::engine::{collect_document, reconstruct_streaming};
use relayout::{
    pages_from_file, render, CancellationToken, Document, EngineOptions, JsonFormat, LayoutConfig,
    PageSelection,
};

#[derive(Parser)]
#[command(name = "relayout")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Reconstruct page layout from positioned PDF text tokens", long_about = None)]
struct Cli {
    /// Input JSON file (one page object or an array of pages)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct pages and write layout JSON
    Layout {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Reconstruct pages and write plain text
    Text {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print the default layout configuration as JSON
    Config,

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct LayoutArgs {
    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Layout configuration JSON file
    #[arg(long, value_name = "FILE", env = "RELAYOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Absolute column gap threshold in points
    #[arg(long)]
    gap_threshold: Option<f32>,

    /// Column gap as a multiple of the average glyph width
    #[arg(long)]
    gap_multiplier: Option<f32>,

    /// Points-to-output-units multiplier for paragraph indentation
    #[arg(long)]
    indent_scale: Option<f32>,

    /// Size grid cells by column span instead of equally
    #[arg(long)]
    proportional: bool,

    /// Number of worker threads
    #[arg(long)]
    threads: Option<usize>,

    /// Process pages one at a time
    #[arg(long)]
    sequential: bool,
}

impl LayoutArgs {
    fn engine_options(&self) -> Result<EngineOptions, Box<dyn std::error::Error>> {
        let mut layout = match &self.config {
            Some(path) => {
                let file = fs::File::open(path)?;
                serde_json::from_reader::<_, LayoutConfig>(file)
                    .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?
            }
            None => LayoutConfig::default(),
        };

        if let Some(points) = self.gap_threshold {
            layout = layout.with_column_gap_threshold(points);
        }
        if let Some(multiplier) = self.gap_multiplier {
            layout = layout.with_column_gap_multiplier(multiplier);
        }
        if let Some(scale) = self.indent_scale {
            layout = layout.with_indent_scale(scale);
        }
        if self.proportional {
            layout = layout.proportional();
        }
        layout.validate()?;

        let pages = match self.pages.as_deref() {
            Some(p) => PageSelection::parse(p)?,
            None => PageSelection::All,
        };

        Ok(EngineOptions::new()
            .with_layout(layout)
            .with_parallel(!self.sequential)
            .with_max_threads(self.threads)
            .with_pages(pages))
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Layout {
            input,
            output,
            compact,
            layout,
        }) => cmd_layout(&input, output.as_deref(), compact, &layout),
        Some(Commands::Text {
            input,
            output,
            layout,
        }) => cmd_text(&input, output.as_deref(), &layout),
        Some(Commands::Config) => cmd_config(),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: layout JSON to stdout if input is provided
            if let Some(input) = cli.input {
                cmd_layout(&input, None, false, &default_layout_args())
            } else {
                println!("{}", "Usage: relayout <FILE>".yellow());
                println!("       relayout --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn default_layout_args() -> LayoutArgs {
    LayoutArgs {
        pages: None,
        config: None,
        gap_threshold: None,
        gap_multiplier: None,
        indent_scale: None,
        proportional: false,
        threads: None,
        sequential: false,
    }
}

/// Read the input and reconstruct it, showing progress when writing to a file.
fn reconstruct(
    input: &Path,
    args: &LayoutArgs,
    show_progress: bool,
) -> Result<Document, Box<dyn std::error::Error>> {
    let options = args.engine_options()?;
    let pages = pages_from_file(input)?;
    let selected = (0..pages.len())
        .filter(|i| options.pages.includes_index(*i))
        .count();
    log::info!("{}: {} pages, {} selected", input.display(), pages.len(), selected);

    let pb = if show_progress {
        let pb = ProgressBar::new(selected as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let rx = reconstruct_streaming(pages, &options, &CancellationToken::new())?;
    let doc = collect_document(rx, |_| pb.inc(1))?;
    pb.finish_and_clear();

    Ok(doc)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_layout(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    args: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reconstruct(input, args, output.is_some())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&doc, format)?;

    write_output(output, &json)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    args: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reconstruct(input, args, output.is_some())?;
    write_output(output, &render::to_text(&doc))
}

fn cmd_config() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&LayoutConfig::default())?;
    println!("{}", json);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "relayout".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page layout reconstruction from positioned PDF text tokens");
}
