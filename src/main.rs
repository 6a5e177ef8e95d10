//! Wiring & DI. Entry point: load config, seed the catalog, report it.
//! No business logic here; enrollment rules live in the domain.

use dotenv::dotenv;
use school_activities::adapters::catalog::{
    InMemoryActivityRepository, default_catalog, load_seed_file,
};
use school_activities::domain::Activity;
use school_activities::ports::ActivityRepository;
use school_activities::shared::config::AppConfig;
use school_activities::usecases::{ActivityFilter, EnrollmentService};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    let cfg = AppConfig::load().unwrap_or_default();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.log_filter_or_default())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let activities = match cfg.seed_path() {
        Some(path) => load_seed_file(path).await?,
        None => {
            info!("SCHOOL_ACTIVITIES_SEED_PATH not set, using built-in catalog");
            default_catalog()?
        }
    };
    if activities.is_empty() {
        warn!("seed catalog is empty");
    }

    let repo: Arc<dyn ActivityRepository> =
        Arc::new(InMemoryActivityRepository::with_activities(activities));
    let enrollment = EnrollmentService::new(Arc::clone(&repo));

    let filter = ActivityFilter {
        day: cfg.default_day().map(str::to_string),
        ..Default::default()
    };
    if let Some(day) = &filter.day {
        info!(day = %day, "listing activities for one weekday");
    }

    for activity in enrollment.list_activities(&filter).await? {
        print_activity(&activity);
    }

    Ok(())
}

fn print_activity(activity: &Activity) {
    let level = activity
        .difficulty_level()
        .map(|l| l.label())
        .unwrap_or("Todos os níveis");
    println!(
        "{} [{} / {}] {} ({}/{} inscritos)",
        activity.name(),
        activity.activity_type(),
        level,
        activity.schedule_label(),
        activity.current_participant_count(),
        activity.max_participants(),
    );
    for email in activity.participants() {
        println!("    - {}", email);
    }
}
