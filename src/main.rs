use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use learngraph::document::load_document;
use learngraph::graph::{collect_with, normalize, LocalId, MetadataMap};
use learngraph::layout::build_layout;
use learngraph::status::{classify, concepts_with_status, ready_concepts};
use learngraph::Config;

#[derive(Parser, Debug)]
#[command(name = "learngraph")]
#[command(about = "Lay out a JSON-LD learning path as a layered prerequisite graph")]
struct Args {
    /// Config file (defaults to $LEARNGRAPH_CONFIG, then ./learngraph.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print positioned nodes and edges
    Layout {
        /// Flattened JSON-LD document
        document: PathBuf,

        /// Known concepts (identifiers or local ids), comma separated
        #[arg(short, long, value_delimiter = ',')]
        known: Option<Vec<String>>,
    },
    /// Print every concept and goal with its status
    Status {
        document: PathBuf,

        #[arg(short, long, value_delimiter = ',', default_value = "")]
        known: Vec<String>,
    },
    /// Print only the concepts ready to be learned
    Ready {
        document: PathBuf,

        #[arg(short, long, value_delimiter = ',', default_value = "")]
        known: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", &config.logging.level)
    ).init();

    let output = match &args.command {
        Command::Layout { document, known } => {
            let metadata = load_metadata(document, &config)?;
            let mut layout = build_layout(&metadata, &config.layout);
            if let Some(known) = known {
                layout.annotate(&classify(&metadata, &known_set(known)));
            }
            log::info!("Laid out {} nodes and {} edges", layout.nodes.len(), layout.edges.len());
            serde_json::to_string_pretty(&layout)?
        }
        Command::Status { document, known } => {
            let metadata = load_metadata(document, &config)?;
            let concepts = concepts_with_status(&metadata, &known_set(known));
            log::info!("Classified {} concepts", concepts.len());
            serde_json::to_string_pretty(&concepts)?
        }
        Command::Ready { document, known } => {
            let metadata = load_metadata(document, &config)?;
            let concepts = ready_concepts(&metadata, &known_set(known));
            log::info!("{} concepts ready", concepts.len());
            serde_json::to_string_pretty(&concepts)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_metadata(path: &Path, config: &Config) -> Result<MetadataMap> {
    log::info!("Loading {}", path.display());
    let items = load_document(path)
        .with_context(|| format!("Failed to load document: {}", path.display()))?;
    let metadata = collect_with(&items, &config.vocabulary);
    log::info!("Collected {} nodes from {} items", metadata.len(), items.len());
    Ok(metadata)
}

/// Known concepts may be given as full identifiers or local ids.
fn known_set(known: &[String]) -> HashSet<LocalId> {
    known
        .iter()
        .map(|id| normalize(id.trim()))
        .filter(|id| !id.is_empty())
        .collect()
}
