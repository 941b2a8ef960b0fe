use backend::{build_rocket, config::AppConfig, routes::AppState};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::{error, info};

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting voter roll server");

    let config = AppConfig::from_lookup(|key| secret_store.get(key));
    info!(
        "Config: elections limit {}, CORS origins {:?}",
        config.elections_limit, config.allowed_origins
    );

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| {
            error!("❌ Database migration failed: {}", e);
            CustomError::new(e)
        })?;

    info!("📋 Migrations complete");

    let rocket = build_rocket(AppState::new(pool, config));

    Ok(rocket.into())
}
