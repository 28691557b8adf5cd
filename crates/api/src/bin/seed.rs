//! Load the sample dataset straight into the database.
//!
//! Safe to run repeatedly: rows that already exist are left alone.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskhub_seed=info,taskhub_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = taskhub_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    taskhub_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Creating sample data");
    let report = taskhub_db::seed::seed_sample_data(&pool)
        .await
        .context("Failed to seed sample data")?;

    tracing::info!(
        organizations = report.total_organizations,
        projects = report.total_projects,
        tasks = report.total_tasks,
        comments = report.total_comments,
        created = !report.is_noop(),
        "Sample data ready"
    );

    pool.close().await;
    Ok(())
}
