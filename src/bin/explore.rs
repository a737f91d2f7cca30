// Hanzi-Decomp Explorer CLI
// Command-line interface for component and decomposition queries

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hanzi_decomp::{Explorer, ExplorerConfig, IdcFilter, QueryFilters, StrokeCount};

/// Character Decomposition Explorer - find characters built from a component
#[derive(Parser, Debug)]
#[command(name = "hanzi-explore")]
#[command(about = "Explore character decompositions and component containment", long_about = None)]
#[command(version)]
struct Args {
    /// Dataset file (JSON lines or a JSON array); defaults to the built-in sample
    #[arg(short, long, global = true, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// TOML config file; flags override its values
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Max decomposition depth (0-5)
    #[arg(short = 'L', long, global = true)]
    depth: Option<usize>,

    /// Show detailed information
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Characters containing a component
    Contains {
        /// Component to search for (e.g. 木)
        component: String,

        /// Minimum stroke count
        #[arg(long)]
        min_strokes: Option<u32>,

        /// Maximum stroke count
        #[arg(long)]
        max_strokes: Option<u32>,

        /// Structure marker the character must start with (⿰, ⿱, ... or "any")
        #[arg(long, default_value = "any")]
        idc: IdcFilter,

        /// Only characters with a compound of exactly this many characters
        #[arg(long)]
        compound_length: Option<usize>,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Components of a character
    Decompose {
        character: String,
    },

    /// Record details and compounds of a character
    Info {
        character: String,

        /// Only compounds of this length
        #[arg(long)]
        compound_length: Option<usize>,
    },

    /// List selectable components within a stroke range
    Components {
        #[arg(long)]
        min_strokes: Option<u32>,

        #[arg(long)]
        max_strokes: Option<u32>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };
    if args.dataset.is_some() {
        config.dataset = args.dataset.clone();
    }
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }

    let explorer = Explorer::from_config(&config)?;
    let depth = config.depth();

    if args.verbose {
        let stats = explorer.stats(depth);
        println!(
            "Dataset loaded: {} characters ({} skipped), {} components at level {}\n",
            stats.records, stats.skipped, stats.components, depth
        );
    }

    match args.command {
        Command::Contains {
            component,
            min_strokes,
            max_strokes,
            idc,
            compound_length,
            limit,
        } => {
            apply_strokes(&mut config, min_strokes, max_strokes);
            let mut filters = QueryFilters::new()
                .with_strokes(config.stroke_range())
                .with_idc(idc);
            if let Some(len) = compound_length {
                filters = filters.with_compound_length(len);
            }

            let component = component.trim();
            println!(
                "Component: {}   Level: {}   Strokes: {}   Structure: {}",
                component,
                depth,
                filters.strokes,
                filters.idc
            );

            let results = explorer.characters_containing(component, depth, &filters);
            println!("Characters with {}: {} result(s)\n", component, results.len());

            for c in results.iter().take(limit) {
                print_line(&explorer, c);
            }
            if results.len() > limit {
                println!("  ... and {} more", results.len() - limit);
            }
        }
        Command::Decompose { character } => {
            let parts = explorer.decomposition(character.trim(), depth);
            if parts.is_empty() {
                println!("{} has no further components.", character.trim());
                return Ok(());
            }
            println!("Components of {} (level {}):\n", character.trim(), depth);
            for part in &parts {
                print_line(&explorer, part);
            }
        }
        Command::Info {
            character,
            compound_length,
        } => {
            let character = character.trim();
            let Some(summary) = explorer.describe(character) else {
                println!("{} is not in the dataset.", character);
                return Ok(());
            };
            println!("{} — {} — {}", summary.character, summary.pinyin, summary.definition);
            println!("  Strokes: {}", format_strokes(summary.strokes));
            if let Some(radical) = &summary.radical {
                println!("  Radical: {}", radical);
            }
            if let Some(record) = explorer.record_of(character) {
                if !record.decomposition.is_empty() {
                    println!("  Decomposition: {}", record.decomposition);
                }
            }
            if let Some(hint) = &summary.etymology_hint {
                println!("  Etymology: {}", hint);
            }
            let compounds = explorer.compounds(character, compound_length);
            if !compounds.is_empty() {
                println!("  Compounds: {}", compounds.join(", "));
            }
        }
        Command::Components {
            min_strokes,
            max_strokes,
        } => {
            apply_strokes(&mut config, min_strokes, max_strokes);
            let listed = explorer.components(depth, config.stroke_range());
            println!("{} component(s) in {} strokes:\n", listed.len(), config.stroke_range());
            for c in &listed {
                println!("  {} ({} strokes)", c, format_strokes(explorer.stroke_count(c)));
            }
        }
    }

    Ok(())
}

fn apply_strokes(config: &mut ExplorerConfig, min: Option<u32>, max: Option<u32>) {
    if let Some(min) = min {
        config.min_strokes = min;
    }
    if max.is_some() {
        config.max_strokes = max;
    }
}

fn print_line(explorer: &Explorer, symbol: &str) {
    match explorer.describe(symbol) {
        Some(summary) => println!(
            "  {} — {} — {} ({} strokes)",
            symbol,
            summary.pinyin,
            summary.definition,
            format_strokes(summary.strokes)
        ),
        None => println!("  {}", symbol),
    }
}

/// Render a stroke count, "?" when unknown
fn format_strokes(strokes: StrokeCount) -> String {
    strokes.to_string()
}
