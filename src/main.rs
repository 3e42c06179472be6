use std::{
    io,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use log::{LevelFilter, warn};

use farming_advisor::{
    Dataset, DatasetLoader, FarmingAdvisor, FileTrackedSetStorage, GatePolicy, PlannerError,
    StatTaxonomy, TrackedSet, TrackedSetStorage,
    config::AppConfig,
    evaluator,
    inventory::{self, WeaponFilter},
    report::{self, ReportOptions},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Dataset document to use instead of the configured one
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Tracked weapons file to use instead of the configured one
    #[arg(short, long, global = true)]
    tracked: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend dungeons and farming schemes for the tracked weapons
    Advise {
        /// Advise for these weapons instead of the tracked list
        #[arg(short, long, value_delimiter = ',')]
        weapons: Vec<String>,

        /// Require every advanced target to drop, not just the first of each tier
        #[arg(long)]
        strict_gate: bool,

        /// Also export the recommendations as JSON lines
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the weapon catalog
    Weapons {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long)]
        rarity: Vec<u32>,

        #[arg(short = 'c', long = "type")]
        category: Vec<String>,

        #[arg(long)]
        tracked_only: bool,
    },
    /// Edit the tracked weapon list
    Track {
        #[command(subcommand)]
        action: TrackAction,
    },
    /// Score a rolled drop against a weapon
    Evaluate {
        #[arg(short, long)]
        weapon: String,

        stats: Vec<String>,
    },
    /// Inspect or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum TrackAction {
    Add { names: Vec<String> },
    Remove { names: Vec<String> },
    Toggle { names: Vec<String> },
    Clear,
    List,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    Show,
    SetDataset { path: PathBuf },
    SetGate { policy: GateArg },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GateArg {
    First,
    All,
}

impl From<GateArg> for GatePolicy {
    fn from(value: GateArg) -> Self {
        match value {
            GateArg::First => GatePolicy::FirstOccurrence,
            GateArg::All => GatePolicy::AllAdvanced,
        }
    }
}

/// Config plus the per-invocation overrides from the command line.
struct Context {
    config: AppConfig,
    dataset: Option<PathBuf>,
    tracked: Option<PathBuf>,
}

impl Context {
    fn load_dataset(&self) -> Result<Dataset, PlannerError> {
        let path = self
            .dataset
            .as_ref()
            .or(self.config.dataset_path.as_ref())
            .ok_or_else(|| PlannerError::InvalidUserInput {
                field: "dataset".to_string(),
                reason: "no dataset configured, pass --dataset or run `config set-dataset`"
                    .to_string(),
            })?;
        DatasetLoader::load(path)
    }

    fn storage(&self) -> Result<FileTrackedSetStorage, PlannerError> {
        match self.tracked.as_ref().or(self.config.tracked_path.as_ref()) {
            Some(path) => Ok(FileTrackedSetStorage::new(path.clone())),
            None => FileTrackedSetStorage::new_default(),
        }
    }
}

fn ensure_known(dataset: &Dataset, name: &str) -> Result<(), PlannerError> {
    match dataset.weapon(name) {
        Some(_) => Ok(()),
        None => Err(PlannerError::UnknownWeapon {
            name: name.to_string(),
        }),
    }
}

fn advise(
    ctx: &Context,
    weapons: &[String],
    strict_gate: bool,
    output: Option<&Path>,
) -> Result<(), PlannerError> {
    let dataset = ctx.load_dataset()?;
    let tracked: TrackedSet = if weapons.is_empty() {
        ctx.storage()?.load()?
    } else {
        weapons.iter().cloned().collect()
    };

    let policy = if strict_gate {
        GatePolicy::AllAdvanced
    } else {
        ctx.config.gate_policy
    };
    let recommendations = FarmingAdvisor::new(&dataset)?
        .with_policy(policy)
        .recommend(&tracked)?;

    let options = ReportOptions {
        show_empty_schemes: ctx.config.show_empty_schemes,
    };
    report::render_text(&mut io::stdout().lock(), &recommendations, options)?;

    if let Some(path) = output {
        report::write_json_lines(path, &recommendations)?;
    }
    Ok(())
}

fn list_weapons(ctx: &Context, filter: WeaponFilter, tracked_only: bool) -> Result<(), PlannerError> {
    let dataset = ctx.load_dataset()?;
    let tracked = ctx.storage()?.load()?;

    println!(
        "Types: {} | Rarities: {}",
        inventory::weapon_categories(&dataset.weapons).join(", "),
        inventory::rarity_tiers(&dataset.weapons)
            .iter()
            .map(|r| format!("{}★", r))
            .join(" ")
    );

    for weapon in filter
        .apply(&dataset.weapons)
        .into_iter()
        .filter(|w| !tracked_only || tracked.contains(&w.name))
    {
        let marker = if tracked.contains(&weapon.name) { "*" } else { " " };
        println!(
            "{} {:<28} {:<14} {}★  {}",
            marker,
            weapon.name,
            weapon.category,
            weapon.rarity,
            weapon.target_stats.join(", ")
        );
    }
    Ok(())
}

fn track(ctx: &Context, action: &TrackAction) -> Result<(), PlannerError> {
    let mut storage = ctx.storage()?;
    let mut tracked = storage.load()?;

    match action {
        TrackAction::Add { names } => {
            let dataset = ctx.load_dataset()?;
            for name in names {
                ensure_known(&dataset, name)?;
                if tracked.insert(name.clone()) {
                    println!("Tracking {}", name);
                } else {
                    println!("Already tracking {}", name);
                }
            }
        }
        TrackAction::Remove { names } => {
            for name in names {
                if tracked.remove(name) {
                    println!("No longer tracking {}", name);
                } else {
                    println!("{} was not tracked", name);
                }
            }
        }
        TrackAction::Toggle { names } => {
            let dataset = ctx.load_dataset()?;
            for name in names {
                ensure_known(&dataset, name)?;
                if tracked.toggle(name) {
                    println!("Tracking {}", name);
                } else {
                    println!("No longer tracking {}", name);
                }
            }
        }
        TrackAction::Clear => {
            tracked.clear();
            println!("Cleared tracked weapons");
        }
        TrackAction::List => {
            let dataset = ctx.load_dataset()?;
            for name in tracked.retain_known(&dataset.weapons) {
                warn!("Dropping {} from the tracked list, it is no longer in the dataset", name);
            }
            if tracked.is_empty() {
                println!("{}", report::EMPTY_STATE_MESSAGE);
            }
            for name in tracked.iter() {
                println!("{}", name);
            }
        }
    }

    storage.save(&tracked)
}

fn evaluate(ctx: &Context, weapon_name: &str, stats: &[String]) -> Result<(), PlannerError> {
    let dataset = ctx.load_dataset()?;
    let weapon = dataset
        .weapon(weapon_name)
        .ok_or_else(|| PlannerError::UnknownWeapon {
            name: weapon_name.to_string(),
        })?;
    let taxonomy = StatTaxonomy::from_database(&dataset.database)?;

    let evaluation = evaluator::evaluate(weapon, stats, &taxonomy)?;
    match evaluation.score {
        Some(score) => println!(
            "{} {}% ({} of {} slots match {})",
            evaluation.verdict, score, evaluation.matches, evaluation.slot_limit, weapon.name
        ),
        None => println!(
            "{}: {} of {} stats entered",
            evaluation.verdict,
            stats.len(),
            evaluation.slot_limit
        ),
    }
    Ok(())
}

fn configure(mut config: AppConfig, action: &ConfigAction) -> Result<(), PlannerError> {
    match action {
        ConfigAction::Show => {
            println!("# {}", AppConfig::default_path()?.display());
            let text = serde_json::to_string_pretty(&config)
                .map_err(|e| PlannerError::ConfigSerializeError { source: e })?;
            println!("{}", text);
            return Ok(());
        }
        ConfigAction::SetDataset { path } => {
            config.dataset_path = Some(path.clone());
        }
        ConfigAction::SetGate { policy } => {
            config.gate_policy = (*policy).into();
        }
    }
    config.save()
}

fn run(cli: Args) -> Result<(), PlannerError> {
    let ctx = Context {
        config: AppConfig::from_local_file()?,
        dataset: cli.dataset,
        tracked: cli.tracked,
    };

    match &cli.command {
        Commands::Advise {
            weapons,
            strict_gate,
            output,
        } => advise(&ctx, weapons, *strict_gate, output.as_deref()),
        Commands::Weapons {
            search,
            rarity,
            category,
            tracked_only,
        } => {
            let filter = WeaponFilter {
                search: search.clone(),
                rarities: rarity.clone(),
                categories: category.clone(),
            };
            list_weapons(&ctx, filter, *tracked_only)
        }
        Commands::Track { action } => track(&ctx, action),
        Commands::Evaluate { weapon, stats } => evaluate(&ctx, weapon, stats),
        Commands::Config { action } => configure(ctx.config, action),
    }
}

/// Debug builds and `--verbose` log at debug level, everything else at info.
fn log_level(verbose: bool, debug_build: bool) -> LevelFilter {
    if verbose || debug_build {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn main() {
    let cli = Args::parse();

    let level = log_level(cli.verbose, cfg!(debug_assertions));
    colog::default_builder().filter_level(level).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", snafu::Report::from_error(e));
        std::process::exit(1);
    }
}
