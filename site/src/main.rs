//! laswg-site: prerender the LAS-WG landing page to static HTML.
//!
//! Writes `<out_dir>/index.html`, and `tailwind.config.js` on request, then
//! prints each written path on stdout. Logs go to stderr.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use laswg_landing::render_page;
use laswg_landing::theme::TailwindConfig;
use tracing::{debug, info};

use crate::config::SiteConfig;

#[derive(Parser, Debug)]
#[command(name = "laswg-site", version, about = "Prerender the LAS-WG landing page")]
struct Args {
    /// Config file [default: site.toml, skipped when absent]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory, overrides `out_dir`
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Copyright year, overrides `copyright_year`
    #[arg(long)]
    year: Option<i32>,

    /// Also write tailwind.config.js into the output directory
    #[arg(long)]
    emit_tailwind_config: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    run(args)
}

fn run(args: Args) -> Result<()> {
    let mut config = SiteConfig::load(args.config.as_deref())?;
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }
    if let Some(year) = args.year {
        config.copyright_year = Some(year);
    }
    debug!(?config, "resolved config");

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed to create {}", config.out_dir.display()))?;

    let html = render_page(&config.render_options());
    let index = config.out_dir.join("index.html");
    write_output(&index, &html)?;

    if args.emit_tailwind_config {
        let path = config.out_dir.join("tailwind.config.js");
        write_output(&path, &TailwindConfig::default().to_js())?;
    }

    info!(
        "Prerendered landing page (laswg-site v{}) into {}",
        env!("CARGO_PKG_VERSION"),
        config.out_dir.display()
    );
    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    println!("{}", path.display());
    Ok(())
}
