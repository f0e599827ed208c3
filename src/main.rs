//! facilitymap CLI - inspect and edit the stored facility map draft.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use facilitymap::editor::{templates, ImportRow};
use facilitymap::{editor_options, init_logging, Config, EditorState, FileBlobStore, FloorId};

#[derive(Parser)]
#[command(name = "facilitymap")]
#[command(about = "Facility floor-plan editor", long_about = None)]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Directory holding the draft and published blobs
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Configuration file (.toml or .json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the draft
    Show,
    /// Append a floor to the draft
    AddFloor {
        /// Name of the new floor
        name: String,
    },
    /// Import asset pins from an `asset_id,x,y` CSV file
    ImportCsv {
        /// CSV file to read
        file: PathBuf,
        /// Target floor (default: first floor)
        #[arg(short, long)]
        floor: Option<String>,
    },
    /// List the starter layout templates
    Templates,
    /// Replace a floor's layout with a starter template
    ApplyTemplate {
        /// Template id, see `templates`
        id: String,
        /// Target floor (default: first floor)
        #[arg(short, long)]
        floor: Option<String>,
        /// Replace existing zones, walls, flows and labels without asking
        #[arg(long)]
        force: bool,
    },
    /// Publish the draft for read-only viewers
    Publish,
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let store = FileBlobStore::new(cli.store.unwrap_or_else(|| config.storage.directory.clone()));
    let mut session = EditorState::load_from_store(&store, editor_options(&config));

    match cli.command {
        Commands::Show => show(&session, &store),
        Commands::AddFloor { name } => {
            session.add_floor(name.clone());
            session.save(&store)?;
            println!("Added floor '{}'", name);
        }
        Commands::ImportCsv { file, floor } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let floor_id = resolve_floor(&session, floor.as_deref())?;
            let import = session.import_pins(floor_id, &text)?;
            for row in import.invalid_rows() {
                if let ImportRow::Invalid { line, raw, reason } = row {
                    eprintln!("line {}: {} ({})", line, reason, raw);
                }
            }
            if import.valid_count() > 0 {
                session.save(&store)?;
            }
            println!(
                "Imported {} pins, skipped {} rows",
                import.valid_count(),
                import.invalid_count()
            );
        }
        Commands::Templates => {
            for template in templates() {
                println!(
                    "{:<16} {:<16} {} zones  {}",
                    template.id,
                    template.name,
                    template.zones.len(),
                    template.description
                );
            }
        }
        Commands::ApplyTemplate { id, floor, force } => {
            let floor_id = resolve_floor(&session, floor.as_deref())?;
            session.set_active_floor(floor_id)?;
            if session.active_floor_has_layout_content() && !force {
                bail!(
                    "floor '{}' already has a layout; pass --force to replace it",
                    session.active_floor().name
                );
            }
            session.apply_template(&id)?;
            session.save(&store)?;
            println!("Applied '{}' to '{}'", id, session.active_floor().name);
        }
        Commands::Publish => {
            let receipt = session.publish(&store)?;
            println!(
                "Published {} floor(s) at {}",
                receipt.floor_count,
                receipt.published_at.to_rfc3339()
            );
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };
    Config::load_or_default(&path).with_context(|| format!("loading {}", path.display()))
}

fn resolve_floor(session: &EditorState, name: Option<&str>) -> Result<FloorId> {
    match name {
        None => Ok(session.document().first_floor().id),
        Some(name) => match session.floor_by_name(name) {
            Some(floor) => Ok(floor.id),
            None => bail!("no floor named '{}'", name),
        },
    }
}

fn show(session: &EditorState, store: &FileBlobStore) {
    println!("Store: {}", store.directory().display());
    for (index, floor) in session.document().floors().iter().enumerate() {
        println!(
            "{}. {}  zones={} walls={} flows={} labels={} pins={} equipment={}",
            index + 1,
            floor.name,
            floor.zones.len(),
            floor.walls.len(),
            floor.flows.len(),
            floor.labels.len(),
            floor.pins.len(),
            floor.equipment.len()
        );
        if let Some(image) = &floor.background_image {
            println!("   background: {}", image);
        }
    }
    match facilitymap::PublishedViewer::open(store) {
        Some(viewer) => println!("Published: {} floor(s)", viewer.floors().len()),
        None => println!("Published: never"),
    }
}
