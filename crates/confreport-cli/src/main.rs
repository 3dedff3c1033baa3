use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use confreport_core::DocketSource;
use confreport_render::RenderConfig;
use confreport_sync::{DirSource, HttpSource};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "confreport", version, about = "Render the conference docket report")]
struct Cli {
    /// Site root serving `data/confdates.json` and `data/conf/*.json`.
    #[arg(long, env = "CONFREPORT_BASE_URL", conflicts_with = "data_dir")]
    base_url: Option<String>,

    /// Local copy of the site root.
    #[arg(long, env = "CONFREPORT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// JSON file overriding render settings (title, glyphs, asset URLs).
    #[arg(long, env = "CONFREPORT_RENDER_CONFIG")]
    render_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List terms and their conferences.
    Terms,
    /// Render one conference page.
    Render {
        /// Conference key (YYYYMMDD); defaults to the newest conference.
        #[arg(long)]
        date: Option<String>,
        /// Output file; stdout when omitted.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Write a page for every conference, plus term and index pages.
    Build {
        #[arg(long, short, env = "CONFREPORT_OUT")]
        out: PathBuf,
        /// Build every term instead of only the newest.
        #[arg(long)]
        all_terms: bool,
    },
    /// Fetch a case's detail or question-presented document.
    Case {
        #[arg(long)]
        term: i32,
        case_number: String,
        /// Fetch the question presented instead of the case detail.
        #[arg(long)]
        qp: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("confreport v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = load_render_config(cli.render_config.as_deref())?;

    match cli.command {
        Command::Case {
            term,
            case_number,
            qp,
        } => {
            let base_url = cli
                .base_url
                .context("`case` needs --base-url (or CONFREPORT_BASE_URL)")?;
            commands::case(&HttpSource::new(base_url), term, &case_number, qp).await
        }
        Command::Terms => {
            let source = open_source(cli.base_url, cli.data_dir)?;
            commands::terms(source, config).await
        }
        Command::Render { date, out } => {
            let source = open_source(cli.base_url, cli.data_dir)?;
            commands::render(source, config, date.as_deref(), out.as_deref()).await
        }
        Command::Build { out, all_terms } => {
            let source = open_source(cli.base_url, cli.data_dir)?;
            commands::build(source, config, &out, all_terms).await
        }
    }
}

fn open_source(
    base_url: Option<String>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<Arc<dyn DocketSource>> {
    match (base_url, data_dir) {
        (Some(url), _) => Ok(Arc::new(HttpSource::new(url))),
        (None, Some(dir)) => Ok(Arc::new(DirSource::new(dir))),
        (None, None) => anyhow::bail!(
            "no data source: pass --base-url or --data-dir (or set CONFREPORT_BASE_URL / CONFREPORT_DATA_DIR)"
        ),
    }
}

fn load_render_config(path: Option<&std::path::Path>) -> anyhow::Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading render config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing render config {}", path.display()))
}
