use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::SiteConfig;
use markdown_sitegen_engine::{
    copy_static, extract_title, generate_pages_recursive, markdown_to_html,
};
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from Markdown pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and render every page into the public directory
    Build(BuildArgs),
    /// Convert one Markdown file to an HTML fragment
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the level-1 heading of a Markdown file
    Title {
        /// Input Markdown file
        input: PathBuf,
    },
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Config file (defaults to ./markdown-sitegen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    public: Option<PathBuf>,

    /// Page template
    #[arg(long)]
    template: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
struct BuildSummary {
    static_files: usize,
    pages: usize,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build(args) => {
            let config = resolve_config(args)?;
            let summary = build_site(&config)?;
            log::info!(
                "Built {} page(s) and copied {} static file(s) into {}",
                summary.pages,
                summary.static_files,
                config.public_path.display()
            );
        }
        Command::Render { input, output } => {
            let html = render_file(&input)?;
            match output {
                Some(path) => fs::write(&path, html)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{html}"),
            }
        }
        Command::Title { input } => {
            let markdown = read_markdown(&input)?;
            let title = extract_title(&markdown)
                .with_context(|| format!("No title in {}", input.display()))?;
            println!("{title}");
        }
    }
    Ok(())
}

/// Config file values overlaid with command-line overrides
fn resolve_config(args: BuildArgs) -> Result<SiteConfig> {
    let loaded = match &args.config {
        Some(path) => Some(
            SiteConfig::load_from_path(path)?
                .with_context(|| format!("Config file {} not found", path.display()))?,
        ),
        None => SiteConfig::load()?,
    };

    let mut config = match loaded {
        Some(config) => config,
        None => {
            log::info!("No config file found, using defaults");
            SiteConfig::default()
        }
    };

    if let Some(content) = args.content {
        config.content_path = content;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_path = static_dir;
    }
    if let Some(public) = args.public {
        config.public_path = public;
    }
    if let Some(template) = args.template {
        config.template_path = template;
    }
    Ok(config)
}

fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let static_files = if config.static_path.is_dir() {
        copy_static(&config.static_path, &config.public_path)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping asset copy",
            config.static_path.display()
        );
        0
    };

    let pages = generate_pages_recursive(
        &config.content_path,
        &config.template_path,
        &config.public_path,
    )?;

    Ok(BuildSummary {
        static_files,
        pages: pages.len(),
    })
}

fn read_markdown(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn render_file(path: &Path) -> Result<String> {
    let markdown = read_markdown(path)?;
    Ok(markdown_to_html(&markdown)?)
}
