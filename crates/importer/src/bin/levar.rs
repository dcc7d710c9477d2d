use clap::{Parser, Subcommand};
use importer::{ExerciseSource, JsonFileSource, plan_seed, seed_store, snapshot};
use std::path::{Path, PathBuf};
use storage::models::{ExerciseCategory, TimeRange};
use storage::services::history::{format_duration, session_exercise_names};
use storage::services::library::{filter_exercises, group_by_category};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "levar")]
#[command(about = "Levar workout log: seed the exercise library and report progress", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "LEVAR_STORE_FILE", default_value = "./data/store.json")]
    store: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate an empty exercise library from the default list
    Seed {
        #[arg(long, env = "LEVAR_SEED_FILE", default_value = "./data/default_exercises.json")]
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
    /// Daily progress and records for one exercise
    Progress {
        #[arg(short, long)]
        exercise: String,

        /// 1M, 3M, 6M, 1Y or All
        #[arg(short, long, default_value = "3M")]
        range: String,
    },
    /// Browse the exercise library by category
    Exercises {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long)]
        category: Option<String>,
    },
    /// Completed sessions grouped by month
    History,
    /// Lifetime statistics for one exercise
    Stats {
        #[arg(short, long)]
        exercise: String,

        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("levar={},importer={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Seed {
            file,
            validate_only,
        } => {
            handle_seed(&cli.store, file, validate_only).await?;
        }
        Commands::Progress { exercise, range } => {
            handle_progress(&cli.store, &exercise, &range).await?;
        }
        Commands::Exercises { search, category } => {
            handle_exercises(&cli.store, &search, category.as_deref()).await?;
        }
        Commands::History => {
            handle_history(&cli.store).await?;
        }
        Commands::Stats { exercise, limit } => {
            handle_stats(&cli.store, &exercise, limit).await?;
        }
    }

    Ok(())
}

async fn handle_seed(
    store_path: &Path,
    file: PathBuf,
    validate_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = JsonFileSource::new(file);
    tracing::info!(
        "Loading default exercises from {} ({})",
        source.path().display(),
        source.name()
    );
    let entries = source.load().await?;
    tracing::info!("Loaded {} seed entries", entries.len());

    let mut store = snapshot::load_store(store_path).await?;

    if validate_only {
        let plan = plan_seed(store.exercises(), &entries);
        if plan.already_seeded {
            tracing::info!("Exercise library already populated, nothing to seed");
            return Ok(());
        }
        plan.log_warnings();
        tracing::info!(
            "✓ {} exercises would be seeded, {} skipped",
            plan.exercises.len(),
            plan.skipped.len()
        );
        return Ok(());
    }

    let inserted = seed_store(&mut store, &entries)?;
    if inserted > 0 {
        snapshot::save_store(store_path, &store).await?;
        tracing::info!("✓ Store written to {}", store_path.display());
    }

    Ok(())
}

async fn handle_progress(
    store_path: &Path,
    exercise_name: &str,
    range: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let range: TimeRange = range.parse()?;
    let store = snapshot::load_store(store_path).await?;
    let exercise = store.find_exercise_by_name(exercise_name).map_err(|_| {
        format!("Unknown exercise '{}'", exercise_name)
    })?;

    let report = store.progress_report(exercise.id, range, &chrono::Local::now())?;

    tracing::info!("{} progress over {}", exercise.name, report.range);
    if report.points.is_empty() {
        tracing::info!("  No sets logged in this range");
        return Ok(());
    }

    for point in &report.points {
        tracing::info!(
            "  {}  max {}  volume {}",
            point.day,
            point.max_weight.normalize(),
            point.volume
        );
    }

    let records = &report.records;
    tracing::info!("Records:");
    tracing::info!("  Max weight: {}", records.max_weight.normalize());
    tracing::info!("  Max reps:   {}", records.max_reps);
    tracing::info!("  Best day:   {}", records.max_volume);
    tracing::info!("  Est. 1RM:   {}", records.estimated_one_rep_max.normalize());
    tracing::info!(
        "  Total:      {} over {} sets",
        records.total_volume.normalize(),
        records.total_sets
    );

    Ok(())
}

async fn handle_exercises(
    store_path: &Path,
    search: &str,
    category: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = category.map(str::parse::<ExerciseCategory>).transpose()?;
    let store = snapshot::load_store(store_path).await?;

    let matches = filter_exercises(store.exercises(), search, category);
    if matches.is_empty() {
        tracing::info!("No exercises found");
        return Ok(());
    }

    for (category, exercises) in group_by_category(matches) {
        tracing::info!("{} ({})", category, exercises.len());
        for exercise in exercises {
            let marker = if exercise.is_custom { " *" } else { "" };
            tracing::info!("  {}{}", exercise.name, marker);
        }
    }

    Ok(())
}

async fn handle_history(store_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = snapshot::load_store(store_path).await?;
    let groups = store.history(&chrono::Local);

    if groups.is_empty() {
        tracing::info!("No completed workouts yet");
        return Ok(());
    }

    for group in groups {
        tracing::info!("{} ({} workouts)", group.label, group.sessions.len());
        for session in &group.sessions {
            tracing::info!(
                "  {}  {}  {} sets  volume {}  [{}]",
                session.date.with_timezone(&chrono::Local).format("%a %d"),
                format_duration(session.duration),
                session.total_sets(),
                session.total_volume().trunc(),
                session_exercise_names(session, store.exercises()).join(", ")
            );
        }
    }

    Ok(())
}

async fn handle_stats(
    store_path: &Path,
    exercise_name: &str,
    limit: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = snapshot::load_store(store_path).await?;
    let exercise = store.find_exercise_by_name(exercise_name).map_err(|_| {
        format!("Unknown exercise '{}'", exercise_name)
    })?;
    let stats = store.exercise_stats(exercise.id, limit)?;

    tracing::info!("{} ({})", exercise.name, exercise.category);
    tracing::info!("  Total sets:   {}", stats.total_sets);
    tracing::info!("  Total reps:   {}", stats.total_reps);
    tracing::info!("  Total volume: {}", stats.total_volume.normalize());
    tracing::info!("  Max weight:   {}", stats.max_weight.normalize());

    if !stats.recent_sets.is_empty() {
        tracing::info!("Recent sets:");
        for set in &stats.recent_sets {
            tracing::info!(
                "  {}  {} × {}",
                set.timestamp.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
                set.weight.normalize(),
                set.reps
            );
        }
    }

    Ok(())
}
