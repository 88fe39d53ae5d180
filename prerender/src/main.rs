//! Renders both language trees to `index.html` / `en/index.html` so the page
//! can be served from any static host without the wasm bundle.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ui::export::write_site;
use ui::site::{parse_base_url, SiteMetadata};

#[derive(Debug, Parser)]
#[command(
    name = "portfolio-prerender",
    about = "Write the portfolio page as static HTML",
    version
)]
struct Args {
    /// Output directory.
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// Absolute base URL for canonical and social preview links.
    /// Defaults to the `SITE_URL` baked in at build time.
    #[arg(long = "base-url", value_parser = parse_base_url)]
    base_url: Option<String>,

    /// Log every rendered document.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn metadata(&self) -> SiteMetadata {
        match &self.base_url {
            Some(url) => SiteMetadata::with_base_url(url.as_str()),
            None => SiteMetadata::from_env(),
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let metadata = args.metadata();
    info!(out = %args.out.display(), base_url = %metadata.base_url, "prerendering");

    match write_site(&args.out, &metadata) {
        Ok(written) => {
            info!(documents = written.len(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "prerender failed");
            ExitCode::FAILURE
        }
    }
}
