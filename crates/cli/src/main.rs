//! crumbtrail CLI
//!
//! Renders the breadcrumb trail of a request described by a site snapshot.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crumbtrail_core::{
    format_output, BuildOutcome, ContentId, OutputFormat, PageContext, QueryState, SiteSnapshot,
    TrailBuilder, TrailConfig,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Breadcrumb trails for content-managed web pages
#[derive(Parser)]
#[command(name = "crumbtrail")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Breadcrumb trails with schema.org microdata from site snapshots")]
#[command(long_about = r#"
crumbtrail: Breadcrumb Trails for Content-Managed Pages

Builds the breadcrumb trail (home → section → ancestors → current item) for
one request described by a site snapshot, and renders it as a schema.org
BreadcrumbList.

Snapshots are JSON or YAML files holding the site's content types, items,
terms and the request being rendered.

Output formats:
  - HTML (default) - schema.org microdata list
  - JSON / YAML    - Structured trail for programmatic use
  - ANSI           - Colorful terminal output
  - Summary        - Plain "Home > Section > Title" path

Examples:
  crumbtrail render site.yaml                    # Render the snapshot's request
  crumbtrail render site.yaml --content-id 42    # Trail for item 42
  crumbtrail render site.json --format ansi      # Colorful terminal output
  crumbtrail classify site.yaml                  # Show the page context
"#)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Separator emitted after linked crumbs
    #[arg(long, global = true)]
    pub separator: Option<String>,

    /// Label of the homepage crumb
    #[arg(long, global = true)]
    pub home_text: Option<String>,

    /// Render an empty list container when the trail is empty
    #[arg(long, global = true)]
    pub empty_container: bool,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the trail for a snapshot
    Render {
        /// Path to the snapshot (.json, .yaml, .yml)
        snapshot: PathBuf,

        /// Build the trail for this content item instead of the active one
        #[arg(short, long)]
        content_id: Option<ContentId>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Html)]
        format: OutputFormatArg,
    },

    /// Print the page context a snapshot's request classifies as
    Classify {
        /// Path to the snapshot (.json, .yaml, .yml)
        snapshot: PathBuf,
    },
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Html,
    Json,
    Yaml,
    Ansi,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Html => OutputFormat::Html,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    match &args.command {
        Commands::Render {
            snapshot,
            content_id,
            format,
        } => run_render(snapshot, *content_id, format.clone().into(), &args),
        Commands::Classify { snapshot } => run_classify(snapshot, &args),
    }
}

/// Initialize tracing based on CLI flags
fn init_tracing(args: &Args) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match args.verbose {
        0 => "warn",
        1 => "crumbtrail=debug,crumbtrail_core=debug",
        _ => "crumbtrail=trace,crumbtrail_core=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match args.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Build trail configuration from args
fn build_config(args: &Args) -> TrailConfig {
    let mut config = TrailConfig::new().with_empty_container(args.empty_container);

    if let Some(separator) = &args.separator {
        config = config.with_separator(separator.clone());
    }

    if let Some(text) = &args.home_text {
        config = config.with_homepage_text(text.clone());
    }

    config
}

fn load_snapshot(path: &Path) -> Result<SiteSnapshot> {
    let site = SiteSnapshot::from_path(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
    info!(
        path = %path.display(),
        items = site.items.len(),
        terms = site.terms.len(),
        "loaded snapshot"
    );
    Ok(site)
}

fn run_render(
    path: &Path,
    content_id: Option<ContentId>,
    format: OutputFormat,
    args: &Args,
) -> Result<()> {
    let site = load_snapshot(path)?;
    let builder = TrailBuilder::new(build_config(args));

    let output = match builder.build(&site, content_id) {
        BuildOutcome::Override(output) => output,
        BuildOutcome::Trail(trail) => format_output(&trail, format, builder.config())
            .context("Failed to format trail")?,
    };

    write_output(&output, args.output.as_ref())
}

fn run_classify(path: &Path, args: &Args) -> Result<()> {
    let site = load_snapshot(path)?;
    let context = PageContext::classify(&site.conditionals());

    write_output(context.label(), args.output.as_ref())
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
    } else {
        println!("{}", output);
    }
    Ok(())
}
