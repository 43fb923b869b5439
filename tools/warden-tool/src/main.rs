//! warden-tool: asset validation and headless patrol runs.
//!
//! Usage:
//!   warden-tool validate --dir assets/items
//!   warden-tool new-item --dir assets/items --name "Iron Sword" --description "Sharp"
//!   warden-tool simulate --route assets/routes/gate.json --ticks 600

use std::path::{Path, PathBuf};
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;
use warden_assets::{AssetError, AssetStore, DataAsset, GenericAsset, ItemData, PatrolRouteData};
use warden_sim::core::state::WorldSnapshot;
use warden_sim::{SimConfig, SimError, SimulationEngine};

/// Exit code when `validate` had to skip unreadable files.
const EXIT_SKIPPED: i32 = 2;

#[derive(Debug, thiserror::Error)]
enum ToolError {
    #[error("{0}")]
    Usage(String),

    #[error("asset '{stem}' already exists in {}", dir.display())]
    AlreadyExists { stem: String, dir: PathBuf },

    #[error("failed to read config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("route '{route}' cannot be patrolled: {source}")]
    Route { route: String, source: SimError },

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "validate" => cmd_validate(&args[2..]),
        "new-item" => cmd_new_item(&args[2..]),
        "simulate" => cmd_simulate(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(0)
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    match result {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// `RUST_LOG` directives when present and valid, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn print_usage() {
    eprintln!(
        "warden-tool: WARDEN asset and simulation tool\n\
         \n\
         Commands:\n\
         \n\
         validate  Assign ids to every asset in a directory that lacks one\n\
         \n\
           --dir <path>          Asset directory\n\
         \n\
         new-item  Create an item asset\n\
         \n\
           --dir <path>          Asset directory\n\
           --name <name>         Display name (also used for the file name)\n\
           --description <text>  Description (optional)\n\
         \n\
         simulate  Run one patroller along a route asset and print the final snapshot\n\
         \n\
           --route <path>        Patrol route asset (.json)\n\
           --ticks <N>           Ticks to run (default: 300, 0 = initial state)\n\
           --config <path>       Simulation config (.json, optional)\n"
    );
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_ticks(args: &[String], default: u64) -> Result<u64, ToolError> {
    match parse_flag(args, "--ticks") {
        Some(raw) => raw.parse().map_err(|_| {
            ToolError::Usage(format!("--ticks expects a non-negative integer, got '{raw}'"))
        }),
        None => Ok(default),
    }
}

fn required(args: &[String], flag: &str) -> Result<String, ToolError> {
    parse_flag(args, flag).ok_or_else(|| ToolError::Usage(format!("{flag} is required")))
}

/// File stem for a display name: lowercase, runs of other characters become `_`.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

// --- Validate command ---

/// Outcome of a validation pass over one directory.
#[derive(Debug)]
struct ValidateReport {
    /// `(id, name)` of every loaded asset, in id order.
    assets: Vec<(String, String)>,
    newly_assigned: usize,
    skipped: Vec<String>,
}

fn validate(dir: &Path) -> Result<ValidateReport, ToolError> {
    let catalog = AssetStore::new(dir).load_all::<GenericAsset>()?;
    Ok(ValidateReport {
        assets: catalog
            .iter()
            .map(|(id, asset)| (id.to_string(), asset.info.name().to_string()))
            .collect(),
        newly_assigned: catalog.newly_assigned(),
        skipped: catalog.skipped().to_vec(),
    })
}

fn cmd_validate(args: &[String]) -> Result<i32, ToolError> {
    let dir = PathBuf::from(required(args, "--dir")?);
    let report = validate(&dir)?;

    for (id, name) in &report.assets {
        eprintln!("  {id}  {name}");
    }
    for stem in &report.skipped {
        eprintln!("  skipped: {stem}.json");
    }
    eprintln!(
        "Validated {} asset(s) in {}: {} new id(s), {} skipped",
        report.assets.len(),
        dir.display(),
        report.newly_assigned,
        report.skipped.len(),
    );
    Ok(if report.skipped.is_empty() { 0 } else { EXIT_SKIPPED })
}

// --- New item command ---

/// Create `<slug(name)>.json` in `dir`. Never touches an existing file.
fn new_item(dir: &Path, name: &str, description: &str) -> Result<String, ToolError> {
    let stem = slug(name);
    if stem.is_empty() {
        return Err(ToolError::Usage(
            "--name must contain at least one letter or digit".to_string(),
        ));
    }

    let store = AssetStore::new(dir);
    if store.exists(&stem) {
        return Err(ToolError::AlreadyExists {
            stem,
            dir: dir.to_path_buf(),
        });
    }

    let mut item = ItemData::new(name, description);
    store.save(&stem, &mut item)?;
    info!(stem = %stem, id = item.unique_id(), "created item asset");
    Ok(item.unique_id().to_string())
}

fn cmd_new_item(args: &[String]) -> Result<i32, ToolError> {
    let dir = PathBuf::from(required(args, "--dir")?);
    let name = required(args, "--name")?;
    let description = parse_flag(args, "--description").unwrap_or_default();

    println!("{}", new_item(&dir, &name, &description)?);
    Ok(0)
}

// --- Simulate command ---

/// Run one patroller along the route asset for `ticks` ticks.
/// With zero ticks the snapshot shows the freshly spawned state.
fn simulate(route_path: &Path, ticks: u64, config: SimConfig) -> Result<WorldSnapshot, ToolError> {
    let (dir, stem) = match (route_path.parent(), route_path.file_stem().and_then(|s| s.to_str())) {
        (Some(dir), Some(stem)) => (dir.to_path_buf(), stem.to_string()),
        _ => return Err(ToolError::Usage("--route must name a .json file".to_string())),
    };

    let route: PatrolRouteData = AssetStore::new(dir).load(&stem)?;

    info!(route = route.info.name(), waypoints = route.waypoints.len(), ticks, "simulating patrol");
    let mut engine = SimulationEngine::new(config);
    engine
        .spawn_patroller(route.info.name(), route.to_blackboard())
        .map_err(|source| ToolError::Route {
            route: route.info.name().to_string(),
            source,
        })?;

    if ticks == 0 {
        return Ok(engine.snapshot());
    }
    let mut snapshot = engine.tick();
    for _ in 1..ticks {
        snapshot = engine.tick();
    }
    Ok(snapshot)
}

fn cmd_simulate(args: &[String]) -> Result<i32, ToolError> {
    let route_path = PathBuf::from(required(args, "--route")?);
    let ticks = parse_ticks(args, 300)?;
    let config = match parse_flag(args, "--config") {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig::default(),
    };

    let snapshot = simulate(&route_path, ticks, config)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(0)
}

fn load_config(path: &Path) -> Result<SimConfig, ToolError> {
    let config_error = |reason: String| ToolError::Config {
        path: path.to_path_buf(),
        reason,
    };
    let json = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| config_error(e.to_string()))
}
